//! Capture Entry Points
//!
//! Background-side handling of the context menu and the floating button.
//! Both append straight to the stored array; open popups are not told.

use log::{info, warn};
use serde::Deserialize;

use crate::domain::{Note, NotesResult, Settings, DEFAULT_TITLE};
use crate::platform::{ContextMenus, Notifications, CONTEXT_MENU_ID};
use crate::storage::{NoteRepository, SettingsRepository, StorageGateway};

/// The fields of a context-menu click the extension uses
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuClick {
    pub menu_item_id: String,
    #[serde(default)]
    pub selection_text: Option<String>,
}

pub struct CaptureService<'a, S, N, M>
where
    S: StorageGateway + ?Sized,
    N: Notifications + ?Sized,
    M: ContextMenus + ?Sized,
{
    storage: &'a S,
    notifications: &'a N,
    menus: &'a M,
}

impl<'a, S, N, M> CaptureService<'a, S, N, M>
where
    S: StorageGateway + ?Sized,
    N: Notifications + ?Sized,
    M: ContextMenus + ?Sized,
{
    pub fn new(storage: &'a S, notifications: &'a N, menus: &'a M) -> Self {
        Self { storage, notifications, menus }
    }

    /// First-run setup: an empty notes array and the context-menu entry
    /// (unless settings turned it off).
    pub async fn on_installed(&self) -> NotesResult<()> {
        if NoteRepository::new(self.storage).ensure_initialized().await? {
            info!("initialized empty notes array");
        }
        if self.settings().await.context_menu {
            self.menus.create_capture_entry().await?;
        }
        Ok(())
    }

    /// Save the selection from a context-menu click. Other menu ids and
    /// empty selections are ignored.
    pub async fn on_menu_clicked(
        &self,
        click: &MenuClick,
        page_title: &str,
        page_url: &str,
        now_ms: i64,
    ) -> NotesResult<Option<Note>> {
        if click.menu_item_id != CONTEXT_MENU_ID {
            return Ok(None);
        }
        match click.selection_text.as_deref() {
            Some(text) if !text.is_empty() => {
                self.capture(text, page_title, page_url, now_ms).await.map(Some)
            }
            _ => Ok(None),
        }
    }

    /// Stored settings; defaults when absent or unreadable
    async fn settings(&self) -> Settings {
        match SettingsRepository::new(self.storage).load().await {
            Ok(settings) => settings.unwrap_or_default(),
            Err(e) => {
                warn!("reading settings failed, using defaults: {}", e);
                Settings::default()
            }
        }
    }

    /// Append a note built from page text and raise a notification if enabled
    pub async fn capture(
        &self,
        content: &str,
        page_title: &str,
        page_url: &str,
        now_ms: i64,
    ) -> NotesResult<Note> {
        let title = if page_title.trim().is_empty() {
            DEFAULT_TITLE.to_string()
        } else {
            format!("Note from {}", page_title)
        };
        let url = (!page_url.is_empty()).then(|| page_url.to_string());
        let note = Note::captured(now_ms, title, content.to_string(), url);

        NoteRepository::new(self.storage).append(note.clone()).await?;
        info!("captured note {} from page", note.id);

        if self.settings().await.notifications {
            if let Err(e) = self
                .notifications
                .notify("Note Created", "Selected text has been saved as a note")
                .await
            {
                warn!("notification failed: {}", e);
            }
        }
        Ok(note)
    }
}
