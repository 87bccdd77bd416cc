//! Settings Manager
//!
//! Options page operations: settings load/save/reset plus note export and
//! import.

use chrono::NaiveDate;
use log::{info, warn};

use super::transfer::{backup_filename, merge_by_id, ImportBatch};
use crate::domain::{NotesResult, Settings, SettingsForm};
use crate::platform::{ContextMenus, DownloadRequest, Downloads};
use crate::storage::{NoteRepository, SettingsRepository, StorageGateway};

pub struct SettingsManager<'a, S, M, D>
where
    S: StorageGateway + ?Sized,
    M: ContextMenus + ?Sized,
    D: Downloads + ?Sized,
{
    storage: &'a S,
    menus: &'a M,
    downloads: &'a D,
}

impl<'a, S, M, D> SettingsManager<'a, S, M, D>
where
    S: StorageGateway + ?Sized,
    M: ContextMenus + ?Sized,
    D: Downloads + ?Sized,
{
    pub fn new(storage: &'a S, menus: &'a M, downloads: &'a D) -> Self {
        Self { storage, menus, downloads }
    }

    /// Stored settings, or the defaults if none were saved or they can't be read
    pub async fn load(&self) -> Settings {
        match SettingsRepository::new(self.storage).load().await {
            Ok(Some(settings)) => settings,
            Ok(None) => Settings::default(),
            Err(e) => {
                warn!("loading settings failed: {}", e);
                Settings::default()
            }
        }
    }

    /// Validate the options form and save it
    pub async fn save_form(&self, form: SettingsForm) -> NotesResult<Settings> {
        let settings = form.into_settings()?;
        self.save(&settings).await?;
        Ok(settings)
    }

    /// Persist the whole record, then add or remove the context-menu entry
    pub async fn save(&self, settings: &Settings) -> NotesResult<()> {
        SettingsRepository::new(self.storage).save(settings).await?;
        info!("settings saved");
        self.sync_context_menu(settings.context_menu).await;
        Ok(())
    }

    /// Restore defaults
    pub async fn reset(&self) -> NotesResult<Settings> {
        let defaults = Settings::default();
        self.save(&defaults).await?;
        Ok(defaults)
    }

    async fn sync_context_menu(&self, enabled: bool) {
        let result = if enabled {
            self.menus.create_capture_entry().await
        } else {
            self.menus.remove_capture_entry().await
        };
        if let Err(e) = result {
            warn!("updating context menu failed: {}", e);
        }
    }

    /// Download every stored note as a dated JSON backup. Returns the count.
    pub async fn export_all(&self, today: NaiveDate) -> NotesResult<usize> {
        let notes = NoteRepository::new(self.storage).list().await?;
        let request = DownloadRequest {
            filename: backup_filename(today),
            mime: "application/json",
            contents: serde_json::to_string_pretty(&notes)?,
            save_as: false,
        };
        self.downloads.download(&request).await?;
        info!("exported {} notes", notes.len());
        Ok(notes.len())
    }

    /// Merge a parsed import into the stored notes.
    ///
    /// Returns the number of notes in the batch, which is what the user is
    /// told was imported even when some ids were already present.
    pub async fn import_merge(&self, batch: ImportBatch) -> NotesResult<usize> {
        let requested = batch.requested();
        let repo = NoteRepository::new(self.storage);
        let current = repo.list().await?;
        let before = current.len();
        let merged = merge_by_id(current, batch.notes);
        repo.replace_all(&merged).await?;
        info!("imported {} of {} notes", merged.len() - before, requested);
        Ok(requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Note, NotesError};
    use crate::platform::fakes::{MenuCall, RecordingDownloads, RecordingMenus};
    use crate::services::parse_import;
    use crate::storage::{keys, Bucket, MemoryStorage};
    use serde_json::json;

    struct Fixture {
        storage: MemoryStorage,
        menus: RecordingMenus,
        downloads: RecordingDownloads,
    }

    impl Fixture {
        fn new(storage: MemoryStorage) -> Self {
            Self { storage, menus: RecordingMenus::default(), downloads: RecordingDownloads::default() }
        }

        fn manager(&self) -> SettingsManager<'_, MemoryStorage, RecordingMenus, RecordingDownloads> {
            SettingsManager::new(&self.storage, &self.menus, &self.downloads)
        }

        fn stored_ids(&self) -> Vec<i64> {
            let notes: Vec<Note> =
                serde_json::from_value(self.storage.peek(Bucket::Synced, keys::NOTES).unwrap()).unwrap();
            notes.iter().map(|n| n.id).collect()
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[tokio::test]
    async fn test_load_defaults_when_absent() {
        let fx = Fixture::new(MemoryStorage::new());
        assert_eq!(fx.manager().load().await, Settings::default());
    }

    #[tokio::test]
    async fn test_save_toggles_context_menu() {
        let fx = Fixture::new(MemoryStorage::new());
        let mut form = SettingsForm::from(&Settings::default());
        form.context_menu = false;
        form.max_notes = "250 notes".into();
        let saved = fx.manager().save_form(form).await.unwrap();
        assert_eq!(saved.max_notes, 250);
        assert_eq!(fx.manager().load().await, saved);

        fx.manager().reset().await.unwrap();
        assert_eq!(*fx.menus.calls.borrow(), vec![MenuCall::Remove, MenuCall::Create]);
    }

    #[tokio::test]
    async fn test_invalid_max_notes_writes_nothing() {
        let fx = Fixture::new(MemoryStorage::new());
        let mut form = SettingsForm::from(&Settings::default());
        form.max_notes = "many".into();
        assert!(matches!(fx.manager().save_form(form).await, Err(NotesError::Validation(_))));
        assert_eq!(fx.storage.write_count(), 0);
        assert!(fx.menus.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_reset_restores_every_default() {
        let custom = json!({
            "darkMode": true, "fontSize": "large", "fontFamily": "Georgia, serif",
            "syncEnabled": false, "maxNotes": 5, "contextMenu": false,
            "notifications": false, "floatingButton": true
        });
        let fx = Fixture::new(MemoryStorage::new().with_value(Bucket::Synced, keys::SETTINGS, custom));
        assert!(fx.manager().load().await.dark_mode);
        fx.manager().reset().await.unwrap();
        assert_eq!(fx.manager().load().await, Settings::default());
    }

    #[tokio::test]
    async fn test_import_merge_reports_requested_count() {
        let current = json!([
            {"id": 1, "title": "a", "content": "one", "category": "other", "tags": [], "lastModified": 1},
            {"id": 2, "title": "b", "content": "two", "category": "other", "tags": [], "lastModified": 2}
        ]);
        let fx = Fixture::new(MemoryStorage::new().with_value(Bucket::Synced, keys::NOTES, current));
        let batch = parse_import(
            r#"[{"id": 2, "content": "two again"}, {"id": 3, "content": "three"}]"#,
        )
        .unwrap();
        assert_eq!(fx.manager().import_merge(batch).await.unwrap(), 2);
        assert_eq!(fx.stored_ids(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_export_then_import_round_trips() {
        let original = json!([
            {"id": 5, "title": "x", "content": "five", "category": "work", "tags": ["t"], "lastModified": 50, "url": "https://e.x"},
            {"id": 4, "title": "y", "content": "four", "category": "ideas", "tags": [], "lastModified": 40}
        ]);
        let source = Fixture::new(MemoryStorage::new().with_value(Bucket::Synced, keys::NOTES, original.clone()));
        assert_eq!(source.manager().export_all(today()).await.unwrap(), 2);

        let request = source.downloads.requests.borrow()[0].clone();
        assert_eq!(request.filename, "chrome-notes-backup-2026-10-18.json");
        assert_eq!(request.mime, "application/json");
        assert!(request.contents.starts_with("[\n  {"));

        let target = Fixture::new(MemoryStorage::new());
        let batch = parse_import(&request.contents).unwrap();
        target.manager().import_merge(batch).await.unwrap();
        assert_eq!(target.storage.peek(Bucket::Synced, keys::NOTES), Some(original));
    }
}
