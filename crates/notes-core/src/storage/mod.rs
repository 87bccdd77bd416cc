//! Storage Layer
//!
//! The storage gateway abstraction and the repositories built on it.

mod traits;
pub mod keys;
mod memory;
mod note_repo;
mod settings_repo;
mod history_repo;

pub use traits::{read_json, write_json, Bucket, StorageGateway};
pub use memory::MemoryStorage;
pub use note_repo::NoteRepository;
pub use settings_repo::SettingsRepository;
pub use history_repo::HistoryRepository;
