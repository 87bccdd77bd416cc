//! Note Entity
//!
//! A captured text note. Serialized with the camelCase field names the
//! extension has always stored under the "notes" key.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::entity::{Entity, NotesError, NotesResult};

pub const DEFAULT_TITLE: &str = "Untitled Note";
pub const DEFAULT_CATEGORY: &str = "other";

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

// Older builds and hand-edited backups store `null` for unset fields.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_title<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_title))
}

fn null_as_category<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_category))
}

/// A stored note. Only `id` is required when reading; anything else that is
/// missing or `null` takes its default, and unknown fields are carried along.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Creation timestamp in milliseconds, unique within the collection
    pub id: i64,
    #[serde(default = "default_title", deserialize_with = "null_as_title")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default = "default_category", deserialize_with = "null_as_category")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_modified: i64,
    /// Page the note was captured from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Fields this version doesn't know about
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Note {
    /// Note built by a capture entry point from selected page text
    pub fn captured(id: i64, title: String, content: String, url: Option<String>) -> Self {
        Self {
            id,
            title,
            content,
            category: default_category(),
            tags: Vec::new(),
            last_modified: id,
            url,
            extra: Map::new(),
        }
    }

    /// Case-insensitive substring match over title, content and tags.
    /// `needle` must already be lowercase.
    pub fn matches_text(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(needle)
            || self.content.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}

impl Entity for Note {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Editor form contents, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    /// Set when editing an existing note
    pub id: Option<i64>,
    pub title: String,
    pub content: String,
    pub category: String,
    /// Comma-separated tag input
    pub tags: String,
    /// Page url for new notes; ignored when editing
    pub url: Option<String>,
}

impl NoteDraft {
    /// Prefill the editor from an existing note
    pub fn from_note(note: &Note) -> Self {
        Self {
            id: Some(note.id),
            title: note.title.clone(),
            content: note.content.clone(),
            category: note.category.clone(),
            tags: note.tags.join(", "),
            url: note.url.clone(),
        }
    }

    pub fn validate(&self) -> NotesResult<()> {
        if self.content.trim().is_empty() {
            return Err(NotesError::validation("Please enter some content for your note"));
        }
        Ok(())
    }

    /// Split the tag input on commas, trimming and dropping empties.
    /// Duplicates are kept.
    pub fn parse_tags(input: &str) -> Vec<String> {
        input
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Build the stored note. Caller validates first.
    pub fn into_note(self, id: i64, now_ms: i64) -> Note {
        let title = self.title.trim();
        let category = self.category.trim();
        Note {
            id,
            title: if title.is_empty() { default_title() } else { title.to_string() },
            content: self.content.trim().to_string(),
            category: if category.is_empty() { default_category() } else { category.to_string() },
            tags: Self::parse_tags(&self.tags),
            last_modified: now_ms,
            url: self.url,
            extra: Map::new(),
        }
    }
}
