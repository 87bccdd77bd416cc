//! Popup State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use notes_core::services::{NoteCollection, NoteFilter};
use notes_core::{NoteDraft, Settings, TabInfo};
use reactive_stores::Store;

/// Popup state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct PopupState {
    /// The popup's copy of the notes array
    pub session: NoteCollection,
    /// Search box and category dropdown
    pub filter: NoteFilter,
    /// Open editor form; `None` shows the list
    pub editor: Option<NoteDraft>,
    /// Tab the popup was opened over
    pub tab: TabInfo,
    pub settings: Settings,
}

/// Type alias for the store
pub type PopupStore = Store<PopupState>;

/// Get the popup store from context
pub fn use_popup_store() -> PopupStore {
    expect_context::<PopupStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Open the editor on a blank note for the current tab
pub fn store_start_new_note(store: &PopupStore) {
    let tab = store.tab().get_untracked();
    let draft = NoteDraft {
        url: (!tab.url.is_empty()).then_some(tab.url),
        category: notes_core::DEFAULT_CATEGORY.to_string(),
        ..Default::default()
    };
    store.editor().set(Some(draft));
}

/// Open the editor on an existing note
pub fn store_edit_note(store: &PopupStore, id: i64) {
    let draft = store.session().with_untracked(|s| s.get(id).map(NoteDraft::from_note));
    if draft.is_some() {
        store.editor().set(draft);
    }
}

pub fn store_close_editor(store: &PopupStore) {
    store.editor().set(None);
}

/// Offer a session-only category; returns false if it was blank or known
pub fn store_add_category(store: &PopupStore, name: &str) -> bool {
    let mut added = false;
    store.session().update(|s| added = s.add_category(name));
    added
}
