//! Note Card Component

use chrono::{DateTime, Local};
use leptos::prelude::*;
use notes_core::Note;

use crate::store::{store_edit_note, use_popup_store};

const PREVIEW_CHARS: usize = 100;

/// First `max` characters of the content, with an ellipsis when cut
pub fn preview(content: &str, max: usize) -> String {
    let mut chars = content.chars();
    let head: String = chars.by_ref().take(max).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

/// Local date of a millisecond timestamp, e.g. "Oct 18, 2026"
pub fn format_modified(ms: i64) -> String {
    DateTime::from_timestamp_millis(ms)
        .map(|dt| dt.with_timezone(&Local).format("%b %-d, %Y").to_string())
        .unwrap_or_default()
}

#[component]
pub fn NoteCard(note: Note) -> impl IntoView {
    let store = use_popup_store();
    let Note { id, title, content, category, tags, last_modified, .. } = note;
    let badge_class = format!("category-badge category-{}", category);

    view! {
        <div class="note-card" on:click=move |_| store_edit_note(&store, id)>
            <div class="note-card-header">
                <span class="note-title">{title}</span>
                <span class=badge_class>{category}</span>
            </div>
            <p class="note-preview">{preview(&content, PREVIEW_CHARS)}</p>
            <div class="note-card-footer">
                <span class="note-tags">
                    {tags.into_iter().map(|tag| view! { <span class="tag">{tag}</span> }).collect_view()}
                </span>
                <span class="note-date">{format_modified(last_modified)}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_truncates_on_chars() {
        assert_eq!(preview("short", 10), "short");
        assert_eq!(preview("abcdef", 3), "abc...");
        assert_eq!(preview("ééééé", 2), "éé...");
        assert_eq!(preview("exact", 5), "exact");
    }

    #[test]
    fn test_format_modified_out_of_range() {
        assert_eq!(format_modified(i64::MAX), "");
        assert!(!format_modified(1_700_000_000_000).is_empty());
    }
}
