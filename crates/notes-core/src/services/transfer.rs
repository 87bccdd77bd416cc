//! Export / Import
//!
//! Backups are the pretty-printed "notes" array. Imports merge by id: an
//! imported note whose id already exists is dropped without comparison.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde_json::Value;

use crate::domain::{Entity, Note, NotesError, NotesResult};

/// `chrome-notes-backup-<YYYY-MM-DD>.json`
pub fn backup_filename(date: NaiveDate) -> String {
    format!("chrome-notes-backup-{}.json", date.format("%Y-%m-%d"))
}

/// Notes read from an import file, not yet merged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportBatch {
    pub notes: Vec<Note>,
}

impl ImportBatch {
    /// Number of notes in the file, merged or not
    pub fn requested(&self) -> usize {
        self.notes.len()
    }
}

/// Parse an import file. Malformed JSON is a parse error; valid JSON that is
/// not an array is a validation error. Elements only need an integer `id`.
pub fn parse_import(text: &str) -> NotesResult<ImportBatch> {
    let value: Value = serde_json::from_str(text)?;
    if !value.is_array() {
        return Err(NotesError::validation("Invalid format: Imported data is not an array"));
    }
    let notes: Vec<Note> = serde_json::from_value(value)?;
    Ok(ImportBatch { notes })
}

/// Append every imported entity whose id is not already present.
/// Existing entities keep their position and content.
pub fn merge_by_id<T: Entity>(current: Vec<T>, imported: Vec<T>) -> Vec<T> {
    let known: HashSet<T::Id> = current.iter().map(Entity::id).collect();
    let mut merged = current;
    merged.extend(imported.into_iter().filter(|e| !known.contains(&e.id())));
    merged
}
