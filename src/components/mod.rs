//! UI Components
//!
//! Leptos components for the popup, options page and rough-notes popup.

mod filter_bar;
mod note_card;
mod note_list;
mod note_editor;
mod options_page;
mod rough_notes;

pub use filter_bar::FilterBar;
pub use note_card::NoteCard;
pub use note_list::NoteList;
pub use note_editor::NoteEditor;
pub use options_page::OptionsPage;
pub use rough_notes::RoughNotes;
