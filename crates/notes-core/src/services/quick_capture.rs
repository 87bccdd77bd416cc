//! Quick Capture ("rough notes")
//!
//! Appends dated text to a short local history and downloads the same line
//! as a text file. The two side effects are independent.

use chrono::{DateTime, Local};
use log::{info, warn};

use crate::domain::{format_long_date, HistoryEntry, NotesResult};
use crate::platform::{DownloadRequest, Downloads};
use crate::storage::{HistoryRepository, StorageGateway};

/// Entries kept in "noteHistory"
pub const HISTORY_LIMIT: usize = 5;
pub const ROUGH_NOTES_FILENAME: &str = "rough_notes.txt";

/// Result of one capture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickCaptureOutcome {
    /// New history, newest first; `None` if it could not be persisted
    pub history: Option<Vec<HistoryEntry>>,
    pub downloaded: bool,
}

pub struct QuickCapture<'a, S: StorageGateway + ?Sized, D: Downloads + ?Sized> {
    storage: &'a S,
    downloads: &'a D,
}

impl<'a, S: StorageGateway + ?Sized, D: Downloads + ?Sized> QuickCapture<'a, S, D> {
    pub fn new(storage: &'a S, downloads: &'a D) -> Self {
        Self { storage, downloads }
    }

    /// Stored history; empty when absent or unreadable
    pub async fn load(&self) -> Vec<HistoryEntry> {
        HistoryRepository::new(self.storage).list().await.unwrap_or_else(|e| {
            warn!("loading rough note history failed: {}", e);
            Vec::new()
        })
    }

    /// Capture `text`. Blank input does nothing and returns `None`.
    pub async fn capture(&self, text: &str, now: DateTime<Local>) -> Option<QuickCaptureOutcome> {
        let content = text.trim();
        if content.is_empty() {
            return None;
        }
        let date = format_long_date(now.date_naive());

        let request = DownloadRequest {
            filename: ROUGH_NOTES_FILENAME.to_string(),
            mime: "text/plain",
            contents: format!("{} {}\n", date, content),
            save_as: false,
        };
        let downloaded = match self.downloads.download(&request).await {
            Ok(()) => true,
            Err(e) => {
                warn!("rough note download failed: {}", e);
                false
            }
        };

        let entry = HistoryEntry {
            date,
            content: content.to_string(),
            timestamp: now.timestamp_millis(),
        };
        let history = match self.push_history(entry).await {
            Ok(history) => Some(history),
            Err(e) => {
                warn!("saving rough note history failed: {}", e);
                None
            }
        };

        info!("captured rough note (downloaded: {})", downloaded);
        Some(QuickCaptureOutcome { history, downloaded })
    }

    async fn push_history(&self, entry: HistoryEntry) -> NotesResult<Vec<HistoryEntry>> {
        let repo = HistoryRepository::new(self.storage);
        let mut history = repo.list().await?;
        history.insert(0, entry);
        history.truncate(HISTORY_LIMIT);
        repo.save(&history).await?;
        Ok(history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::fakes::RecordingDownloads;
    use crate::storage::MemoryStorage;
    use chrono::{Duration, TimeZone};

    fn morning() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).single().unwrap()
    }

    #[tokio::test]
    async fn test_blank_input_is_ignored() {
        let storage = MemoryStorage::new();
        let downloads = RecordingDownloads::default();
        let qc = QuickCapture::new(&storage, &downloads);
        assert!(qc.capture(" \n\t ", morning()).await.is_none());
        assert_eq!(storage.write_count(), 0);
        assert!(downloads.requests.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_capture_downloads_dated_line() {
        let storage = MemoryStorage::new();
        let downloads = RecordingDownloads::default();
        let qc = QuickCapture::new(&storage, &downloads);
        let outcome = qc.capture("  call the bank  ", morning()).await.unwrap();

        assert!(outcome.downloaded);
        let requests = downloads.requests.borrow();
        assert_eq!(requests[0].filename, "rough_notes.txt");
        assert_eq!(requests[0].contents, "October 18, 2026 call the bank\n");
        assert!(!requests[0].save_as);

        let history = outcome.history.unwrap();
        assert_eq!(history[0].date, "October 18, 2026");
        assert_eq!(history[0].content, "call the bank");
        assert_eq!(history[0].timestamp, morning().timestamp_millis());
    }

    #[tokio::test]
    async fn test_history_capped_newest_first() {
        let storage = MemoryStorage::new();
        let downloads = RecordingDownloads::default();
        let qc = QuickCapture::new(&storage, &downloads);

        assert!(qc.load().await.is_empty());
        for i in 0..8 {
            let at = morning() + Duration::minutes(i);
            let outcome = qc.capture(&format!("note {}", i), at).await.unwrap();
            let history = outcome.history.unwrap();
            assert!(history.len() <= HISTORY_LIMIT);
            assert_eq!(history[0].content, format!("note {}", i));
        }

        let history = qc.load().await;
        let contents: Vec<_> = history.iter().map(|h| h.content.as_str()).collect();
        assert_eq!(contents, vec!["note 7", "note 6", "note 5", "note 4", "note 3"]);
        assert!(history.windows(2).all(|w| w[0].timestamp > w[1].timestamp));
    }

    #[tokio::test]
    async fn test_side_effects_are_independent() {
        let storage = MemoryStorage::new();
        let downloads = RecordingDownloads::default();
        let qc = QuickCapture::new(&storage, &downloads);

        downloads.fail.set(true);
        let outcome = qc.capture("kept", morning()).await.unwrap();
        assert!(!outcome.downloaded);
        assert_eq!(outcome.history.unwrap().len(), 1);

        downloads.fail.set(false);
        storage.set_fail_writes(true);
        let outcome = qc.capture("downloaded only", morning()).await.unwrap();
        assert!(outcome.downloaded);
        assert!(outcome.history.is_none());
        assert_eq!(downloads.requests.borrow().len(), 1);
    }
}
