//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO platform dependencies (serde and chrono only).

mod entity;
mod note;
mod settings;
mod history;
mod message;

pub use entity::{Entity, NotesError, NotesResult};
pub use note::{Note, NoteDraft, DEFAULT_CATEGORY, DEFAULT_TITLE};
pub use settings::{parse_int_prefix, FontSize, Settings, SettingsForm};
pub use history::{format_long_date, HistoryEntry};
pub use message::{ExtensionMessage, SelectedText, TabInfo};
