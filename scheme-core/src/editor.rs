use crate::fields::{ModifierField, SettingField};
use crate::models::Scheme;
use crate::store::{SchemeError, SchemeStore};

/// Which row the editor is bound to, and whether it may be edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// No row bound yet.
    Unselected,
    /// A user row; edits write straight through.
    Editable(usize),
    /// A built-in row; values are shown read-only.
    Locked(usize),
}

impl Selection {
    pub fn index(&self) -> Option<usize> {
        match self {
            Selection::Unselected => None,
            Selection::Editable(i) | Selection::Locked(i) => Some(*i),
        }
    }

    pub fn is_editable(&self) -> bool {
        matches!(self, Selection::Editable(_))
    }

    pub fn is_locked(&self) -> bool {
        matches!(self, Selection::Locked(_))
    }
}

/// What just happened, for registered observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    SelectionChanged,
    RowEdited(usize),
    RowsChanged,
}

type ChangeHandler = Box<dyn FnMut(Change)>;

/// Binds one selected row of an exclusively owned [`SchemeStore`] to edit
/// operations. Replaces the original page's signal/slot wiring with
/// explicit handler registration, and models the blocking delete
/// confirmation as a request / confirm / cancel pair.
pub struct SchemeEditor {
    store: SchemeStore,
    selection: Selection,
    pending_delete: Option<usize>,
    handlers: Vec<ChangeHandler>,
}

impl SchemeEditor {
    /// Starts unselected; call [`select_first`](Self::select_first) to bind
    /// the first row, as the page does when it receives its model.
    pub fn new(store: SchemeStore) -> Self {
        Self {
            store,
            selection: Selection::Unselected,
            pending_delete: None,
            handlers: Vec::new(),
        }
    }

    pub fn store(&self) -> &SchemeStore {
        &self.store
    }

    pub fn into_store(self) -> SchemeStore {
        self.store
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The bound scheme, if any.
    pub fn selected(&self) -> Option<&Scheme> {
        self.selection.index().and_then(|i| self.store.get(i))
    }

    /// Registers a handler invoked after every state change.
    pub fn on_change(&mut self, handler: impl FnMut(Change) + 'static) {
        self.handlers.push(Box::new(handler));
    }

    fn emit(&mut self, change: Change) {
        for handler in &mut self.handlers {
            handler(change);
        }
    }

    fn selection_for(&self, index: usize) -> Selection {
        if self.store.is_default(index) {
            Selection::Locked(index)
        } else {
            Selection::Editable(index)
        }
    }

    /// Rebinds to row `index`, recomputing the lock state from the
    /// built-in boundary. An armed delete is dropped.
    pub fn select_row(&mut self, index: usize) -> Result<(), SchemeError> {
        if index >= self.store.row_count() {
            return Err(SchemeError::OutOfRange {
                index,
                len: self.store.row_count(),
            });
        }
        self.pending_delete = None;
        self.selection = self.selection_for(index);
        self.emit(Change::SelectionChanged);
        Ok(())
    }

    /// Binds the first row, if the store has one.
    pub fn select_first(&mut self) {
        if self.store.row_count() > 0 {
            // Row 0 always exists here, select_row cannot fail.
            let _ = self.select_row(0);
        }
    }

    /// Appends a default-valued row and selects it. New rows are always
    /// past the built-in boundary, so the selection is editable.
    pub fn new_row(&mut self) -> usize {
        let index = self.store.add_new("New scheme");
        self.emit(Change::RowsChanged);
        let _ = self.select_row(index);
        index
    }

    /// Appends a copy of the selected row and selects the copy. Copying a
    /// locked built-in is allowed; the copy is editable.
    pub fn copy_row(&mut self) -> Result<usize, SchemeError> {
        let current = self.selection.index().ok_or(SchemeError::NoSelection)?;
        let index = self.store.duplicate(current)?;
        self.emit(Change::RowsChanged);
        let _ = self.select_row(index);
        Ok(index)
    }

    /// Arms deletion of the selected row, pending confirmation. Refused
    /// for built-in rows before any dialog is shown.
    pub fn request_delete(&mut self) -> Result<(), SchemeError> {
        match self.selection {
            Selection::Unselected => Err(SchemeError::NoSelection),
            Selection::Locked(index) => Err(SchemeError::BuiltIn { index }),
            Selection::Editable(index) => {
                self.pending_delete = Some(index);
                Ok(())
            }
        }
    }

    /// The row an armed delete would remove.
    pub fn pending_delete(&self) -> Option<usize> {
        self.pending_delete
    }

    /// Removes the armed row and shifts the selection to the nearest
    /// remaining neighbor (the row that slid into the slot, or the new
    /// last row when the tail was deleted).
    pub fn confirm_delete(&mut self) -> Result<(), SchemeError> {
        let index = self.pending_delete.take().ok_or(SchemeError::NoPendingDelete)?;
        self.store.remove(index)?;
        self.emit(Change::RowsChanged);
        let count = self.store.row_count();
        if count == 0 {
            self.selection = Selection::Unselected;
            self.emit(Change::SelectionChanged);
        } else {
            let _ = self.select_row(index.min(count - 1));
        }
        Ok(())
    }

    /// Drops an armed delete with no state change.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Renames the selected row. Uniqueness is not enforced.
    pub fn set_name(&mut self, name: &str) -> Result<(), SchemeError> {
        let index = self.editable_index()?;
        self.store.get_mut(index)?.name = name.to_string();
        self.emit(Change::RowEdited(index));
        Ok(())
    }

    /// Writes one toggle straight into the selected row.
    pub fn set_modifier(&mut self, field: ModifierField, value: bool) -> Result<(), SchemeError> {
        let index = self.editable_index()?;
        self.store.get_mut(index)?.modifiers.set(field, value);
        self.emit(Change::RowEdited(index));
        Ok(())
    }

    /// Writes one numeric setting into the selected row, clamped to the
    /// field's range. Returns the value actually stored.
    pub fn set_setting(&mut self, field: SettingField, value: i32) -> Result<i32, SchemeError> {
        let index = self.editable_index()?;
        let stored = self.store.get_mut(index)?.settings.set_clamped(field, value);
        self.emit(Change::RowEdited(index));
        Ok(stored)
    }

    /// Moves one numeric setting by `steps` increments of its step size.
    pub fn adjust_setting(&mut self, field: SettingField, steps: i32) -> Result<i32, SchemeError> {
        let index = self.editable_index()?;
        let scheme = self.store.get_mut(index)?;
        let next = field.spec().adjust(scheme.settings.get(field), steps);
        let stored = scheme.settings.set_clamped(field, next);
        self.emit(Change::RowEdited(index));
        Ok(stored)
    }

    fn editable_index(&self) -> Result<usize, SchemeError> {
        match self.selection {
            Selection::Unselected => Err(SchemeError::NoSelection),
            Selection::Locked(index) => Err(SchemeError::BuiltIn { index }),
            Selection::Editable(index) => Ok(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn editor_with_custom_row() -> SchemeEditor {
        let mut store = SchemeStore::with_defaults();
        let idx = store.add_new("MyScheme");
        store.get_mut(idx).unwrap().settings.damage_modifier = 150;
        SchemeEditor::new(store)
    }

    #[test]
    fn test_starts_unselected_then_locks_on_first_row() {
        let mut editor = SchemeEditor::new(SchemeStore::with_defaults());
        assert_eq!(editor.selection(), Selection::Unselected);
        editor.select_first();
        assert_eq!(editor.selection(), Selection::Locked(0));
    }

    #[test]
    fn test_built_in_rows_present_as_locked() {
        let mut editor = editor_with_custom_row();
        for i in 0..editor.store().default_count() {
            editor.select_row(i).unwrap();
            assert!(editor.selection().is_locked());
        }
    }

    #[test]
    fn test_user_row_presents_as_editable() {
        let mut editor = editor_with_custom_row();
        let idx = editor.store().default_count();
        editor.select_row(idx).unwrap();
        assert_eq!(editor.selection(), Selection::Editable(idx));
        assert_eq!(editor.selected().unwrap().settings.damage_modifier, 150);
    }

    #[test]
    fn test_new_row_selects_a_default_valued_editable_row() {
        let mut editor = SchemeEditor::new(SchemeStore::with_defaults());
        let idx = editor.new_row();
        assert_eq!(editor.selection(), Selection::Editable(idx));
        let scheme = editor.selected().unwrap();
        assert_eq!(scheme.settings, crate::models::Settings::default());
        assert_eq!(scheme.modifiers, crate::models::Modifiers::default());
    }

    #[test]
    fn test_copy_row_snapshot_is_independent_of_later_edits() {
        let mut editor = editor_with_custom_row();
        let original = editor.store().default_count();
        editor.select_row(original).unwrap();

        let copy = editor.copy_row().unwrap();
        assert_eq!(editor.selection(), Selection::Editable(copy));
        assert_eq!(editor.selected().unwrap().settings.damage_modifier, 150);

        editor.select_row(original).unwrap();
        editor.set_setting(SettingField::DamageModifier, 200).unwrap();
        assert_eq!(editor.store().get(copy).unwrap().settings.damage_modifier, 150);
    }

    #[test]
    fn test_copy_scenario_defaults_plus_custom() {
        // Built-ins + one custom row ("MyScheme", damage 150); select the
        // custom row, copy it, and check where everything lands.
        let mut custom = Scheme::new("MyScheme");
        custom.settings.damage_modifier = 150;
        let store = SchemeStore::with_user_rows(vec![custom]);

        let defaults = store.default_count();
        let mut editor = SchemeEditor::new(store);
        let custom_idx = defaults;
        editor.select_row(custom_idx).unwrap();
        assert!(editor.selection().is_editable());
        assert_eq!(editor.selected().unwrap().settings.damage_modifier, 150);

        let before = editor.store().row_count();
        let copy = editor.copy_row().unwrap();
        assert_eq!(editor.store().row_count(), before + 1);
        assert_eq!(copy, before);
        assert_eq!(editor.selection(), Selection::Editable(copy));
        assert_eq!(editor.store().get(copy).unwrap().settings.damage_modifier, 150);
    }

    #[test]
    fn test_confirmed_delete_removes_exactly_one_row() {
        let mut editor = editor_with_custom_row();
        let idx = editor.store().default_count();
        editor.select_row(idx).unwrap();
        let before = editor.store().row_count();

        editor.request_delete().unwrap();
        editor.confirm_delete().unwrap();

        assert_eq!(editor.store().row_count(), before - 1);
        assert!(editor.store().find_by_name("MyScheme").is_none());
        // Selection shifted to the new last row.
        assert_eq!(editor.selection().index(), Some(before - 2));
    }

    #[test]
    fn test_cancelled_delete_changes_nothing() {
        let mut editor = editor_with_custom_row();
        let idx = editor.store().default_count();
        editor.select_row(idx).unwrap();
        let snapshot = editor.store().clone();

        editor.request_delete().unwrap();
        editor.cancel_delete();

        assert_eq!(editor.store(), &snapshot);
        assert_eq!(editor.pending_delete(), None);
        assert_eq!(editor.confirm_delete(), Err(SchemeError::NoPendingDelete));
    }

    #[test]
    fn test_delete_request_refused_on_locked_row() {
        let mut editor = editor_with_custom_row();
        editor.select_row(0).unwrap();
        assert_eq!(
            editor.request_delete(),
            Err(SchemeError::BuiltIn { index: 0 })
        );
        assert_eq!(editor.pending_delete(), None);
    }

    #[test]
    fn test_deleting_middle_row_selects_the_slid_in_row() {
        let mut store = SchemeStore::with_defaults();
        store.add_new("A");
        store.add_new("B");
        store.add_new("C");
        let defaults = store.default_count();
        let mut editor = SchemeEditor::new(store);

        editor.select_row(defaults + 1).unwrap(); // "B"
        editor.request_delete().unwrap();
        editor.confirm_delete().unwrap();

        assert_eq!(editor.selection().index(), Some(defaults + 1));
        assert_eq!(editor.selected().unwrap().name, "C");
    }

    #[test]
    fn test_edits_write_through_immediately_and_only_to_selected_row() {
        let mut editor = editor_with_custom_row();
        let idx = editor.store().default_count();
        let other = editor.new_row();
        editor.select_row(idx).unwrap();

        editor.set_modifier(ModifierField::Vampirism, true).unwrap();
        editor.set_setting(SettingField::TurnTime, 60).unwrap();
        editor.set_name("Renamed").unwrap();

        let edited = editor.store().get(idx).unwrap();
        assert!(edited.modifiers.vampirism);
        assert_eq!(edited.settings.turn_time, 60);
        assert_eq!(edited.name, "Renamed");

        let untouched = editor.store().get(other).unwrap();
        assert!(!untouched.modifiers.vampirism);
        assert_eq!(untouched.settings.turn_time, 45);
    }

    #[test]
    fn test_edits_refused_on_locked_and_unselected() {
        let mut editor = SchemeEditor::new(SchemeStore::with_defaults());
        assert_eq!(
            editor.set_modifier(ModifierField::Karma, true),
            Err(SchemeError::NoSelection)
        );
        editor.select_first();
        assert_eq!(
            editor.set_setting(SettingField::TurnTime, 60),
            Err(SchemeError::BuiltIn { index: 0 })
        );
    }

    #[test]
    fn test_numeric_writes_clamp_to_range() {
        let mut editor = editor_with_custom_row();
        let idx = editor.store().default_count();
        editor.select_row(idx).unwrap();
        assert_eq!(editor.set_setting(SettingField::DamageModifier, 9999), Ok(300));
        assert_eq!(editor.set_setting(SettingField::MinesTime, -100), Ok(-1));
    }

    #[test]
    fn test_adjust_setting_steps_within_range() {
        let mut editor = editor_with_custom_row();
        let idx = editor.store().default_count();
        editor.select_row(idx).unwrap();
        assert_eq!(editor.adjust_setting(SettingField::DamageModifier, 1), Ok(175));
        assert_eq!(editor.adjust_setting(SettingField::DamageModifier, 10), Ok(300));
    }

    #[test]
    fn test_change_handlers_observe_mutations() {
        let seen: Rc<RefCell<Vec<Change>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut editor = editor_with_custom_row();
        editor.on_change(move |c| sink.borrow_mut().push(c));

        let idx = editor.store().default_count();
        editor.select_row(idx).unwrap();
        editor.set_setting(SettingField::TurnTime, 90).unwrap();
        editor.new_row();

        let changes = seen.borrow();
        assert_eq!(changes[0], Change::SelectionChanged);
        assert_eq!(changes[1], Change::RowEdited(idx));
        assert!(changes.contains(&Change::RowsChanged));
    }
}
