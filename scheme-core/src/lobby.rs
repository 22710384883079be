/// Outbound notifications for the host lobby page.
///
/// The editor page does not know what hosting it means; it only announces
/// that the user wants to proceed with the current settings, or wants the
/// room renamed. The host registers handlers for both.
#[derive(Default)]
pub struct LobbyHooks {
    setup: Vec<Box<dyn FnMut()>>,
    room_name: Vec<Box<dyn FnMut(&str)>>,
}

impl LobbyHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler for "proceed with current settings".
    pub fn on_setup(&mut self, handler: impl FnMut() + 'static) {
        self.setup.push(Box::new(handler));
    }

    /// Registers a handler for "rename the room to this".
    pub fn on_room_name_update(&mut self, handler: impl FnMut(&str) + 'static) {
        self.room_name.push(Box::new(handler));
    }

    pub fn request_setup(&mut self) {
        for handler in &mut self.setup {
            handler();
        }
    }

    pub fn request_room_name_update(&mut self, name: &str) {
        for handler in &mut self.room_name {
            handler(name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_setup_reaches_every_handler() {
        let count = Rc::new(RefCell::new(0));
        let mut hooks = LobbyHooks::new();
        for _ in 0..2 {
            let count = Rc::clone(&count);
            hooks.on_setup(move || *count.borrow_mut() += 1);
        }
        hooks.request_setup();
        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn test_room_name_carries_payload() {
        let seen = Rc::new(RefCell::new(String::new()));
        let sink = Rc::clone(&seen);
        let mut hooks = LobbyHooks::new();
        hooks.on_room_name_update(move |name| sink.borrow_mut().push_str(name));
        hooks.request_room_name_update("tourney room");
        assert_eq!(&*seen.borrow(), "tourney room");
    }

    #[test]
    fn test_no_handlers_is_fine() {
        let mut hooks = LobbyHooks::new();
        hooks.request_setup();
        hooks.request_room_name_update("empty");
    }
}
