//! Quick-capture History Repository

use super::keys;
use super::traits::{read_json, write_json, Bucket, StorageGateway};
use crate::domain::{HistoryEntry, NotesResult};

pub struct HistoryRepository<'a, S: StorageGateway + ?Sized> {
    storage: &'a S,
}

impl<'a, S: StorageGateway + ?Sized> HistoryRepository<'a, S> {
    pub fn new(storage: &'a S) -> Self {
        Self { storage }
    }

    pub async fn list(&self) -> NotesResult<Vec<HistoryEntry>> {
        Ok(read_json(self.storage, Bucket::Local, keys::NOTE_HISTORY)
            .await?
            .unwrap_or_default())
    }

    pub async fn save(&self, history: &[HistoryEntry]) -> NotesResult<()> {
        write_json(self.storage, Bucket::Local, keys::NOTE_HISTORY, history).await
    }
}
