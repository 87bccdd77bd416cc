//! Note Collection Session
//!
//! The popup's in-memory copy of the "notes" array. Loaded when the popup
//! opens and dropped when it closes; writes from other surfaces are only seen
//! after a reload.

use log::{info, warn};

use crate::domain::{Note, NoteDraft, NotesError, NotesResult};
use crate::storage::{NoteRepository, StorageGateway};

/// Category filter value that matches everything
pub const ALL_CATEGORIES: &str = "all";

/// Categories offered before any note uses one
pub const BUILTIN_CATEGORIES: [&str; 4] = ["work", "personal", "ideas", "other"];

/// Search box plus category dropdown
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFilter {
    pub search: String,
    /// Exact category, or empty / "all" for any
    pub category: String,
}

impl NoteFilter {
    pub fn new(search: impl Into<String>, category: impl Into<String>) -> Self {
        Self { search: search.into(), category: category.into() }
    }

    fn any_category(&self) -> bool {
        self.category.is_empty() || self.category == ALL_CATEGORIES
    }

    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.any_category()
    }

    pub fn matches(&self, note: &Note) -> bool {
        let needle = self.search.trim().to_lowercase();
        note.matches_text(&needle) && (self.any_category() || note.category == self.category)
    }
}

/// What the note list should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteView {
    /// Placeholder state
    Empty,
    /// Newest first
    Notes(Vec<Note>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteCollection {
    notes: Vec<Note>,
    /// Added through the category input this session; never persisted
    session_categories: Vec<String>,
    /// A save writes the whole array, so it needs a good copy of it first
    loaded: bool,
}

impl NoteCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session over an already-fetched array
    pub fn from_notes(notes: Vec<Note>) -> Self {
        Self { notes, session_categories: Vec::new(), loaded: true }
    }

    /// Notes in stored order
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: i64) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Whether the stored array has been read successfully
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Replace the in-memory list with the stored array. A storage error is
    /// logged and leaves the list as it was.
    pub async fn load<S: StorageGateway + ?Sized>(&mut self, storage: &S) {
        match NoteRepository::new(storage).list().await {
            Ok(notes) => {
                info!("loaded {} notes", notes.len());
                self.notes = notes;
                self.loaded = true;
            }
            Err(e) => warn!("loading notes failed: {}", e),
        }
    }

    /// Sorted view by `lastModified` descending; equal timestamps keep their
    /// stored order.
    pub fn render(&self, filter: Option<&NoteFilter>) -> NoteView {
        let mut visible: Vec<Note> = match filter {
            Some(f) => self.notes.iter().filter(|n| f.matches(n)).cloned().collect(),
            None => self.notes.clone(),
        };
        if visible.is_empty() {
            return NoteView::Empty;
        }
        visible.sort_by(|a, b| b.last_modified.cmp(&a.last_modified));
        NoteView::Notes(visible)
    }

    /// Notes matching a search term and category, in stored order
    pub fn filter(&self, search: &str, category: &str) -> Vec<Note> {
        let filter = NoteFilter::new(search, category);
        self.notes.iter().filter(|n| filter.matches(n)).cloned().collect()
    }

    /// Create or update a note and persist the whole array.
    ///
    /// Editing replaces the note with the same id in place and keeps its
    /// original `url`. The in-memory list only changes once the write
    /// succeeds. Refuses to write until the stored array has been loaded.
    pub async fn save<S: StorageGateway + ?Sized>(
        &mut self,
        storage: &S,
        draft: NoteDraft,
        now_ms: i64,
    ) -> NotesResult<Note> {
        draft.validate()?;
        if !self.loaded {
            return Err(NotesError::storage("notes were not loaded; refusing to overwrite them"));
        }

        let mut notes = self.notes.clone();
        let existing = draft.id.and_then(|id| notes.iter().position(|n| n.id == id));

        let saved = match existing {
            Some(pos) => {
                let mut note = draft.into_note(notes[pos].id, now_ms);
                note.url = notes[pos].url.clone();
                note.extra = notes[pos].extra.clone();
                notes[pos] = note.clone();
                note
            }
            None => {
                let mut id = draft.id.unwrap_or(now_ms);
                while notes.iter().any(|n| n.id == id) {
                    id += 1;
                }
                let note = draft.into_note(id, now_ms);
                notes.push(note.clone());
                note
            }
        };

        if let Err(e) = NoteRepository::new(storage).replace_all(&notes).await {
            warn!("saving note {} failed: {}", saved.id, e);
            return Err(e);
        }
        self.notes = notes;
        Ok(saved)
    }

    /// Offer a new category in the pickers for this session only.
    /// Returns false for blanks and names already offered.
    pub fn add_category(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.categories().iter().any(|c| c == name) {
            return false;
        }
        self.session_categories.push(name.to_string());
        true
    }

    /// Built-ins, then categories used by notes, then session additions
    pub fn categories(&self) -> Vec<String> {
        let mut out: Vec<String> = BUILTIN_CATEGORIES.iter().map(|c| c.to_string()).collect();
        let used = self.notes.iter().map(|n| n.category.as_str());
        for cat in used.chain(self.session_categories.iter().map(String::as_str)) {
            if !cat.is_empty() && !out.iter().any(|c| c == cat) {
                out.push(cat.to_string());
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NotesError;
    use crate::storage::{keys, Bucket, MemoryStorage};
    use serde_json::json;

    fn note(id: i64, last_modified: i64) -> Note {
        let mut n = Note::captured(id, format!("Note {}", id), format!("body {}", id), None);
        n.last_modified = last_modified;
        n
    }

    fn storage_with(notes: &[Note]) -> MemoryStorage {
        MemoryStorage::new().with_value(Bucket::Synced, keys::NOTES, serde_json::to_value(notes).unwrap())
    }

    fn stored(storage: &MemoryStorage) -> Vec<Note> {
        serde_json::from_value(storage.peek(Bucket::Synced, keys::NOTES).unwrap()).unwrap()
    }

    fn ids(view: NoteView) -> Vec<i64> {
        match view {
            NoteView::Empty => Vec::new(),
            NoteView::Notes(notes) => notes.iter().map(|n| n.id).collect(),
        }
    }

    #[tokio::test]
    async fn test_load_absent_is_empty() {
        let storage = MemoryStorage::new();
        let mut session = NoteCollection::new();
        session.load(&storage).await;
        assert!(session.notes().is_empty());
        assert_eq!(session.render(None), NoteView::Empty);
    }

    #[tokio::test]
    async fn test_load_error_keeps_previous_list() {
        let storage = storage_with(&[note(1, 1)]);
        let mut session = NoteCollection::new();
        session.load(&storage).await;
        storage.set_fail_reads(true);
        session.load(&storage).await;
        assert_eq!(session.notes().len(), 1);
    }

    #[test]
    fn test_render_sorts_newest_first_and_is_stable() {
        let session = NoteCollection::from_notes(vec![note(1, 10), note(2, 30), note(3, 10), note(4, 20)]);
        assert_eq!(ids(session.render(None)), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_render_filter_combines_text_and_category() {
        let mut a = note(1, 1);
        a.category = "work".into();
        a.tags = vec!["Budget".into()];
        let mut b = note(2, 2);
        b.category = "personal".into();
        b.title = "budget at home".into();
        let session = NoteCollection::from_notes(vec![a, b]);

        assert_eq!(ids(session.render(Some(&NoteFilter::new("BUDGET", "all")))), vec![2, 1]);
        assert_eq!(ids(session.render(Some(&NoteFilter::new("budget", "work")))), vec![1]);
        assert_eq!(session.render(Some(&NoteFilter::new("nothing", ""))), NoteView::Empty);
        assert_eq!(session.filter("", "personal").len(), 1);
    }

    #[tokio::test]
    async fn test_empty_content_never_writes() {
        let storage = storage_with(&[note(1, 1)]);
        let mut session = NoteCollection::new();
        session.load(&storage).await;

        let draft = NoteDraft { id: Some(1), content: "   ".into(), ..Default::default() };
        let err = session.save(&storage, draft, 99).await.unwrap_err();
        assert!(matches!(err, NotesError::Validation(_)));
        assert_eq!(storage.write_count(), 0);
        assert_eq!(stored(&storage), vec![note(1, 1)]);
    }

    #[tokio::test]
    async fn test_edit_replaces_in_place_and_keeps_url() {
        let mut first = note(1, 1);
        first.url = Some("https://origin.example".into());
        let second = note(2, 2);
        let storage = storage_with(&[first, second.clone()]);
        let mut session = NoteCollection::new();
        session.load(&storage).await;

        let draft = NoteDraft {
            id: Some(1),
            title: "Edited".into(),
            content: "new body".into(),
            category: "work".into(),
            tags: "a, b".into(),
            url: None,
        };
        let saved = session.save(&storage, draft, 500).await.unwrap();
        assert_eq!(saved.url.as_deref(), Some("https://origin.example"));
        assert_eq!(saved.last_modified, 500);

        let notes = stored(&storage);
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].id, 1);
        assert_eq!(notes[0].title, "Edited");
        assert_eq!(notes[0].tags, vec!["a", "b"]);
        assert_eq!(notes[1], second);
        assert_eq!(session.notes(), notes.as_slice());
    }

    #[tokio::test]
    async fn test_new_note_appends_with_unique_id() {
        let storage = storage_with(&[note(1000, 1)]);
        let mut session = NoteCollection::new();
        session.load(&storage).await;

        let draft = NoteDraft {
            content: "fresh".into(),
            url: Some("https://tab.example".into()),
            ..Default::default()
        };
        let saved = session.save(&storage, draft, 1000).await.unwrap();
        assert_eq!(saved.id, 1001);
        assert_eq!(saved.url.as_deref(), Some("https://tab.example"));
        assert_eq!(stored(&storage).iter().map(|n| n.id).collect::<Vec<_>>(), vec![1000, 1001]);
    }

    #[tokio::test]
    async fn test_failed_write_leaves_session_untouched() {
        let storage = storage_with(&[note(1, 1)]);
        let mut session = NoteCollection::new();
        session.load(&storage).await;
        storage.set_fail_writes(true);

        let draft = NoteDraft { content: "lost".into(), ..Default::default() };
        let err = session.save(&storage, draft, 7).await.unwrap_err();
        assert!(matches!(err, NotesError::Storage(_)));
        assert_eq!(session.notes().len(), 1);
    }

    #[test]
    fn test_categories_are_session_only() {
        let mut used = note(1, 1);
        used.category = "recipes".into();
        let mut session = NoteCollection::from_notes(vec![used]);
        assert!(session.add_category(" travel "));
        assert!(!session.add_category("work"));
        assert!(!session.add_category("  "));
        assert_eq!(
            session.categories(),
            vec!["work", "personal", "ideas", "other", "recipes", "travel"]
        );

        let reloaded = NoteCollection::from_notes(session.notes().to_vec());
        assert!(!reloaded.categories().contains(&"travel".to_string()));
    }

    #[tokio::test]
    async fn test_saving_with_new_category_persists_it() {
        let storage = MemoryStorage::new().with_value(Bucket::Synced, keys::NOTES, json!([]));
        let mut session = NoteCollection::new();
        session.load(&storage).await;
        session.add_category("travel");
        let draft = NoteDraft { content: "pack".into(), category: "travel".into(), ..Default::default() };
        session.save(&storage, draft, 1).await.unwrap();

        let mut reopened = NoteCollection::new();
        reopened.load(&storage).await;
        assert!(reopened.categories().contains(&"travel".to_string()));
    }

    #[tokio::test]
    async fn test_one_sparse_note_does_not_hide_the_rest() {
        let storage = MemoryStorage::new().with_value(
            Bucket::Synced,
            keys::NOTES,
            json!([
                {"id": 1, "title": "Keep", "content": "important", "lastModified": 1},
                {"id": 2, "title": null, "content": "x", "tags": null, "category": null, "url": null}
            ]),
        );
        let mut session = NoteCollection::new();
        session.load(&storage).await;
        assert_eq!(session.notes().len(), 2);

        let draft = NoteDraft { content: "new".into(), ..Default::default() };
        session.save(&storage, draft, 5).await.unwrap();
        let notes = stored(&storage);
        assert_eq!(notes.iter().map(|n| n.id).collect::<Vec<_>>(), vec![1, 2, 5]);
        assert_eq!(notes[0].content, "important");
    }

    #[tokio::test]
    async fn test_save_refused_after_failed_load() {
        let storage = storage_with(&[note(1, 1)]);
        storage.set_fail_reads(true);
        let mut session = NoteCollection::new();
        session.load(&storage).await;
        assert!(!session.is_loaded());

        let draft = NoteDraft { content: "new".into(), ..Default::default() };
        let err = session.save(&storage, draft.clone(), 5).await.unwrap_err();
        assert!(matches!(err, NotesError::Storage(_)));
        assert_eq!(storage.write_count(), 0);
        assert_eq!(stored(&storage), vec![note(1, 1)]);

        storage.set_fail_reads(false);
        session.load(&storage).await;
        session.save(&storage, draft, 5).await.unwrap();
        assert_eq!(stored(&storage).len(), 2);
    }

    #[tokio::test]
    async fn test_edit_keeps_unknown_fields() {
        let storage = MemoryStorage::new().with_value(
            Bucket::Synced,
            keys::NOTES,
            json!([{"id": 1, "content": "a", "pinned": true}]),
        );
        let mut session = NoteCollection::new();
        session.load(&storage).await;
        let draft = NoteDraft { id: Some(1), content: "b".into(), ..Default::default() };
        session.save(&storage, draft, 9).await.unwrap();

        let raw = storage.peek(Bucket::Synced, keys::NOTES).unwrap();
        assert_eq!(raw[0]["pinned"], json!(true));
        assert_eq!(raw[0]["content"], "b");
    }
}
