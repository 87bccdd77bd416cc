//! Note Repository
//!
//! The whole collection lives in one array under the synced "notes" key, so
//! every mutation is read-array, modify, write-array.

use log::debug;

use super::keys;
use super::traits::{read_json, write_json, Bucket, StorageGateway};
use crate::domain::{Note, NotesResult};

pub struct NoteRepository<'a, S: StorageGateway + ?Sized> {
    storage: &'a S,
}

impl<'a, S: StorageGateway + ?Sized> NoteRepository<'a, S> {
    pub fn new(storage: &'a S) -> Self {
        Self { storage }
    }

    /// All stored notes; empty when the key is absent
    pub async fn list(&self) -> NotesResult<Vec<Note>> {
        Ok(read_json(self.storage, Bucket::Synced, keys::NOTES)
            .await?
            .unwrap_or_default())
    }

    /// Overwrite the stored array
    pub async fn replace_all(&self, notes: &[Note]) -> NotesResult<()> {
        debug!("writing {} notes", notes.len());
        write_json(self.storage, Bucket::Synced, keys::NOTES, notes).await
    }

    /// Append one note to whatever is stored right now
    pub async fn append(&self, note: Note) -> NotesResult<Vec<Note>> {
        let mut notes = self.list().await?;
        notes.push(note);
        self.replace_all(&notes).await?;
        Ok(notes)
    }

    /// Write an empty array if nothing is stored yet. Returns true if it wrote.
    pub async fn ensure_initialized(&self) -> NotesResult<bool> {
        if self.storage.get(Bucket::Synced, keys::NOTES).await?.is_some() {
            return Ok(false);
        }
        self.replace_all(&[]).await?;
        Ok(true)
    }
}
