//! Surface Detection
//!
//! One WASM bundle serves every extension surface. Each loader script sets
//! `CHROME_NOTES_SURFACE` on the global object before calling `init()`.

use wasm_bindgen::JsValue;

const SURFACE_GLOBAL: &str = "CHROME_NOTES_SURFACE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Popup,
    Options,
    RoughNotes,
    Background,
    Content,
}

impl Surface {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "popup" => Some(Surface::Popup),
            "options" => Some(Surface::Options),
            "rough_notes" => Some(Surface::RoughNotes),
            "background" => Some(Surface::Background),
            "content" => Some(Surface::Content),
            _ => None,
        }
    }

    /// Read the loader's marker; pages default to the popup, windowless
    /// contexts to the background worker.
    pub fn detect() -> Self {
        let marker = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(SURFACE_GLOBAL))
            .ok()
            .and_then(|v| v.as_string());
        marker
            .as_deref()
            .and_then(Surface::from_str)
            .unwrap_or_else(|| if web_sys::window().is_some() { Surface::Popup } else { Surface::Background })
    }
}
