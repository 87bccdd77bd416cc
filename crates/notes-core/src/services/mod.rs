//! Services Layer
//!
//! Operations invoked by the extension surfaces.

mod collection;
mod quick_capture;
mod settings_manager;
mod transfer;
mod capture;

pub use collection::{NoteCollection, NoteFilter, NoteView, ALL_CATEGORIES, BUILTIN_CATEGORIES};
pub use quick_capture::{QuickCapture, QuickCaptureOutcome, HISTORY_LIMIT, ROUGH_NOTES_FILENAME};
pub use settings_manager::SettingsManager;
pub use transfer::{backup_filename, merge_by_id, parse_import, ImportBatch};
pub use capture::{CaptureService, MenuClick};
