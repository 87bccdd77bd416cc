//! Settings Repository

use super::keys;
use super::traits::{read_json, write_json, Bucket, StorageGateway};
use crate::domain::{NotesResult, Settings};

pub struct SettingsRepository<'a, S: StorageGateway + ?Sized> {
    storage: &'a S,
}

impl<'a, S: StorageGateway + ?Sized> SettingsRepository<'a, S> {
    pub fn new(storage: &'a S) -> Self {
        Self { storage }
    }

    /// Stored settings, if any were ever saved
    pub async fn load(&self) -> NotesResult<Option<Settings>> {
        read_json(self.storage, Bucket::Synced, keys::SETTINGS).await
    }

    pub async fn save(&self, settings: &Settings) -> NotesResult<()> {
        write_json(self.storage, Bucket::Synced, keys::SETTINGS, settings).await
    }
}
