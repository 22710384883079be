pub mod editor;
pub mod fields;
pub mod lobby;
pub mod models;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use editor::{Change, Selection, SchemeEditor};
pub use fields::{ModifierField, SettingField, SettingSpec};
pub use lobby::LobbyHooks;
pub use models::{default_schemes, Modifiers, Scheme, Settings};
pub use storage::{default_schemes_path, Storage};
pub use store::{SchemeError, SchemeStore};
