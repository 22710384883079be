use eframe::egui;
use scheme_core::{
    default_schemes_path, LobbyHooks, ModifierField, SchemeEditor, SchemeStore, SettingField,
    Storage,
};

/// One queued write into the selected scheme.
enum Edit {
    Name(String),
    Modifier(ModifierField, bool),
    Setting(SettingField, i32),
}

pub struct SchemeEditorApp {
    storage: Storage,
    editor: SchemeEditor,
    hooks: LobbyHooks,
    room_name: String,

    // Messages
    message: Option<(String, bool)>, // (message, is_error)

    // Pending operations (to avoid borrow checker issues)
    pending_edits: Vec<Edit>,
    pending_select: Option<usize>,
    pending_new: bool,
    pending_copy: bool,
    pending_delete_request: bool,
    pending_confirm: Option<bool>,
    pending_setup: bool,
    pending_room_update: bool,
}

impl SchemeEditorApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let schemes_path = default_schemes_path()
            .unwrap_or_else(|_| std::path::PathBuf::from("schemes.yaml"));

        let storage = Storage::new(schemes_path);
        let store = storage.load().unwrap_or_else(|_| SchemeStore::with_defaults());

        let mut editor = SchemeEditor::new(store);
        editor.select_first();

        // The host lobby page would register here; standalone we just log.
        let mut hooks = LobbyHooks::new();
        hooks.on_setup(|| log::info!("setup requested with current scheme"));
        hooks.on_room_name_update(|name| log::info!("room name update requested: {}", name));

        Self {
            storage,
            editor,
            hooks,
            room_name: String::new(),
            message: None,
            pending_edits: Vec::new(),
            pending_select: None,
            pending_new: false,
            pending_copy: false,
            pending_delete_request: false,
            pending_confirm: None,
            pending_setup: false,
            pending_room_update: false,
        }
    }

    fn save(&mut self) {
        if let Err(e) = self.storage.save(self.editor.store()) {
            self.message = Some((format!("Error saving: {}", e), true));
        }
    }

    fn apply_pending(&mut self) {
        let mut dirty = false;

        for edit in std::mem::take(&mut self.pending_edits) {
            let result = match edit {
                Edit::Name(name) => self.editor.set_name(&name),
                Edit::Modifier(field, value) => self.editor.set_modifier(field, value),
                Edit::Setting(field, value) => self.editor.set_setting(field, value).map(|_| ()),
            };
            match result {
                Ok(()) => dirty = true,
                Err(e) => self.message = Some((format!("Edit rejected: {}", e), true)),
            }
        }

        if let Some(idx) = self.pending_select.take() {
            if let Err(e) = self.editor.select_row(idx) {
                self.message = Some((format!("Selection failed: {}", e), true));
            }
        }

        if std::mem::take(&mut self.pending_new) {
            self.editor.new_row();
            self.message = Some(("Scheme created".to_string(), false));
            dirty = true;
        }

        if std::mem::take(&mut self.pending_copy) {
            match self.editor.copy_row() {
                Ok(_) => {
                    self.message = Some(("Scheme copied".to_string(), false));
                    dirty = true;
                }
                Err(e) => self.message = Some((format!("Copy failed: {}", e), true)),
            }
        }

        if std::mem::take(&mut self.pending_delete_request) {
            if let Err(e) = self.editor.request_delete() {
                self.message = Some((format!("Delete refused: {}", e), true));
            }
        }

        if let Some(confirmed) = self.pending_confirm.take() {
            if confirmed {
                match self.editor.confirm_delete() {
                    Ok(()) => {
                        self.message = Some(("Scheme deleted".to_string(), false));
                        dirty = true;
                    }
                    Err(e) => self.message = Some((format!("Delete failed: {}", e), true)),
                }
            } else {
                self.editor.cancel_delete();
            }
        }

        if std::mem::take(&mut self.pending_setup) {
            self.hooks.request_setup();
        }
        if std::mem::take(&mut self.pending_room_update) {
            self.hooks.request_room_name_update(&self.room_name);
        }

        if dirty {
            self.save();
        }
    }

    fn show_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                let names: Vec<String> =
                    self.editor.store().iter().map(|s| s.name.clone()).collect();
                let current = self.editor.selection().index();
                let selected_text = current
                    .and_then(|i| names.get(i).cloned())
                    .unwrap_or_else(|| "Select scheme".to_string());

                egui::ComboBox::new("scheme_select", "")
                    .selected_text(selected_text)
                    .show_ui(ui, |ui| {
                        for (idx, name) in names.iter().enumerate() {
                            if ui.selectable_label(current == Some(idx), name).clicked() {
                                self.pending_select = Some(idx);
                            }
                        }
                    });

                if ui.button("New").clicked() {
                    self.pending_new = true;
                }
                if ui.button("Copy").clicked() {
                    self.pending_copy = true;
                }
                let deletable = self.editor.selection().is_editable();
                if ui.add_enabled(deletable, egui::Button::new("Delete")).clicked() {
                    self.pending_delete_request = true;
                }

                ui.separator();
                ui.label(format!("Schemes: {}", self.editor.store().row_count()));

                if let Some((msg, is_error)) = &self.message {
                    ui.separator();
                    let color = if *is_error { egui::Color32::RED } else { egui::Color32::GREEN };
                    ui.colored_label(color, msg);
                }
            });
        });
    }

    fn show_room_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("room_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Room name:");
                ui.text_edit_singleline(&mut self.room_name);
                if ui.button("Update").clicked() {
                    self.pending_room_update = true;
                }
                if ui.button("Setup").clicked() {
                    self.pending_setup = true;
                }
            });
        });
    }

    fn show_editor_panel(&mut self, ui: &mut egui::Ui) {
        let Some(scheme) = self.editor.selected().cloned() else {
            ui.vertical_centered(|ui| {
                ui.add_space(100.0);
                ui.heading("Select a scheme");
            });
            return;
        };
        let editable = self.editor.selection().is_editable();
        let mut edits: Vec<Edit> = Vec::new();

        ui.add_enabled_ui(editable, |ui| {
            ui.horizontal(|ui| {
                ui.label("Scheme Name:");
                let mut name = scheme.name.clone();
                if ui.text_edit_singleline(&mut name).changed() {
                    edits.push(Edit::Name(name));
                }
            });
            if !editable {
                ui.label(
                    egui::RichText::new("Built-in scheme (read-only). Use Copy to customize.")
                        .italics(),
                );
            }
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Game Modifiers");
                egui::Grid::new("modifiers_grid")
                    .num_columns(3)
                    .spacing([30.0, 6.0])
                    .show(ui, |ui| {
                        for (i, field) in ModifierField::ALL.iter().enumerate() {
                            let mut value = scheme.modifiers.get(*field);
                            if ui.checkbox(&mut value, field.label()).changed() {
                                edits.push(Edit::Modifier(*field, value));
                            }
                            if i % 3 == 2 {
                                ui.end_row();
                            }
                        }
                    });

                ui.separator();
                ui.heading("Basic Settings");
                egui::Grid::new("settings_grid")
                    .num_columns(2)
                    .spacing([40.0, 6.0])
                    .striped(true)
                    .show(ui, |ui| {
                        for field in SettingField::ALL {
                            let spec = field.spec();
                            ui.label(field.label());
                            let mut value = scheme.settings.get(field);
                            let show_random = field == SettingField::MinesTime && value == -1;
                            let drag = egui::DragValue::new(&mut value)
                                .range(spec.min..=spec.max)
                                .speed(spec.step as f64 * 0.25);
                            let response = if show_random {
                                ui.add(drag.custom_formatter(|_, _| "Random".to_string()))
                            } else {
                                ui.add(drag)
                            };
                            if response.changed() {
                                edits.push(Edit::Setting(field, value));
                            }
                            ui.end_row();
                        }
                    });
            });
        });

        self.pending_edits.extend(edits);
    }

    fn show_delete_confirmation(&mut self, ctx: &egui::Context) {
        if self.editor.pending_delete().is_none() {
            return;
        }
        egui::Window::new("Schemes")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Really delete this game scheme?");
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Ok").clicked() {
                        self.pending_confirm = Some(true);
                    }
                    if ui.button("Cancel").clicked() {
                        self.pending_confirm = Some(false);
                    }
                });
            });
    }
}

impl eframe::App for SchemeEditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handle pending operations (to avoid borrow checker issues)
        self.apply_pending();

        self.show_top_panel(ctx);
        self.show_room_panel(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_editor_panel(ui);
        });

        self.show_delete_confirmation(ctx);
    }
}
