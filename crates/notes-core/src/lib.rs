//! Chrome Notes Core
//!
//! Layered architecture:
//! - domain: notes, settings, history entries, messages and errors
//! - storage: the storage gateway abstraction and repositories
//! - services: collection session, quick capture, settings, transfer and capture entry points
//! - platform: browser side effects (downloads, context menu, notifications)

pub mod domain;
pub mod storage;
pub mod services;
pub mod platform;

pub use domain::*;
pub use platform::{ContextMenus, DownloadRequest, Downloads, Notifications, CONTEXT_MENU_ID, CONTEXT_MENU_TITLE};
pub use storage::{Bucket, MemoryStorage, StorageGateway};
