//! Browser Side-effect Traits
//!
//! Downloads, the context-menu entry and system notifications. The extension
//! implements these over `chrome.*`; tests use recording fakes.

use async_trait::async_trait;

use crate::domain::NotesResult;

/// Id of the selection context-menu entry
pub const CONTEXT_MENU_ID: &str = "createNote";
pub const CONTEXT_MENU_TITLE: &str = "Add to Chrome Notes";

/// A file handed to the browser download manager
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub filename: String,
    pub mime: &'static str,
    pub contents: String,
    pub save_as: bool,
}

#[async_trait(?Send)]
pub trait Downloads {
    async fn download(&self, request: &DownloadRequest) -> NotesResult<()>;
}

#[async_trait(?Send)]
pub trait ContextMenus {
    /// Register the "Add to Chrome Notes" selection entry
    async fn create_capture_entry(&self) -> NotesResult<()>;
    async fn remove_capture_entry(&self) -> NotesResult<()>;
}

#[async_trait(?Send)]
pub trait Notifications {
    async fn notify(&self, title: &str, message: &str) -> NotesResult<()>;
}

#[cfg(test)]
pub(crate) mod fakes {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::domain::NotesError;

    #[derive(Default)]
    pub struct RecordingDownloads {
        pub requests: RefCell<Vec<DownloadRequest>>,
        pub fail: Cell<bool>,
    }

    #[async_trait(?Send)]
    impl Downloads for RecordingDownloads {
        async fn download(&self, request: &DownloadRequest) -> NotesResult<()> {
            if self.fail.get() {
                return Err(NotesError::storage("download blocked"));
            }
            self.requests.borrow_mut().push(request.clone());
            Ok(())
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum MenuCall {
        Create,
        Remove,
    }

    #[derive(Default)]
    pub struct RecordingMenus {
        pub calls: RefCell<Vec<MenuCall>>,
    }

    #[async_trait(?Send)]
    impl ContextMenus for RecordingMenus {
        async fn create_capture_entry(&self) -> NotesResult<()> {
            self.calls.borrow_mut().push(MenuCall::Create);
            Ok(())
        }

        async fn remove_capture_entry(&self) -> NotesResult<()> {
            self.calls.borrow_mut().push(MenuCall::Remove);
            Ok(())
        }
    }

    #[derive(Default)]
    pub struct RecordingNotifications {
        pub shown: RefCell<Vec<(String, String)>>,
    }

    #[async_trait(?Send)]
    impl Notifications for RecordingNotifications {
        async fn notify(&self, title: &str, message: &str) -> NotesResult<()> {
            self.shown.borrow_mut().push((title.to_string(), message.to_string()));
            Ok(())
        }
    }
}
