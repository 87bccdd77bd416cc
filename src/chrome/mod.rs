//! Chrome Extension API Wrappers
//!
//! Bindings to `chrome.*` APIs, organized by domain, implementing the
//! notes-core platform traits.

mod storage;
mod downloads;
mod context_menus;
mod notifications;
mod runtime;
mod dialog;

use notes_core::NotesError;
use wasm_bindgen::prelude::*;

// Re-export all public items
pub use storage::*;
pub use downloads::*;
pub use context_menus::*;
pub use notifications::*;
pub use runtime::*;
pub use dialog::*;

/// Best-effort text for a rejected promise or thrown value
pub(crate) fn describe_js_error(err: &JsValue) -> String {
    if let Some(s) = err.as_string() {
        return s;
    }
    js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}

pub(crate) fn js_error(err: JsValue) -> NotesError {
    NotesError::storage(describe_js_error(&err))
}
