//! Runtime Messaging and Tabs
//!
//! Message passing between surfaces, tab lookup and extension windows.
//! Event listeners are registered by the JS loaders so they exist on the
//! script's first turn; they call the handlers exported from `background`
//! and `content`.

use notes_core::{ExtensionMessage, NotesResult, TabInfo};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::js_error;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["chrome", "runtime"], js_name = sendMessage)]
    async fn runtime_send_message(message: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["chrome", "tabs"], js_name = query)]
    async fn tabs_query(query: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["chrome", "action"], js_name = openPopup)]
    async fn action_open_popup() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["chrome", "runtime"], js_name = getURL)]
    fn runtime_get_url(path: &str) -> String;

    #[wasm_bindgen(catch, js_namespace = ["chrome", "windows"], js_name = create)]
    async fn windows_create(options: JsValue) -> Result<JsValue, JsValue>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TabQuery {
    active: bool,
    current_window: bool,
}

/// Page of the quick-capture surface
pub const ROUGH_NOTES_PAGE: &str = "rough_notes.html";

#[derive(Debug, Serialize)]
struct PopupWindow {
    url: String,
    #[serde(rename = "type")]
    kind: &'static str,
    width: u32,
    height: u32,
}

impl PopupWindow {
    fn rough_notes(url: String) -> Self {
        Self { url, kind: "popup", width: 360, height: 480 }
    }
}

/// Send a message to the other extension surfaces and await the reply
pub async fn send_message(message: &ExtensionMessage) -> NotesResult<JsValue> {
    let js_message = serde_wasm_bindgen::to_value(message).map_err(|e| js_error(e.into()))?;
    runtime_send_message(js_message).await.map_err(js_error)
}

/// Ask the background surface for the active tab (`getTabInfo`)
pub async fn request_tab_info() -> NotesResult<TabInfo> {
    let reply = send_message(&ExtensionMessage::GetTabInfo).await?;
    if reply.is_undefined() || reply.is_null() {
        return Ok(TabInfo::default());
    }
    serde_wasm_bindgen::from_value(reply).map_err(|e| js_error(e.into()))
}

/// The active tab of the current window, if any
pub async fn active_tab() -> NotesResult<Option<TabInfo>> {
    let query = serde_wasm_bindgen::to_value(&TabQuery { active: true, current_window: true })
        .map_err(|e| js_error(e.into()))?;
    let tabs: js_sys::Array = tabs_query(query).await.map_err(js_error)?.into();
    let first = tabs.get(0);
    if first.is_undefined() {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value(first).map(Some).map_err(|e| js_error(e.into()))
}

pub async fn open_popup() -> NotesResult<()> {
    action_open_popup().await.map_err(js_error)?;
    Ok(())
}

/// Open the rough-notes page in its own small window
pub async fn open_rough_notes() -> NotesResult<()> {
    let window = PopupWindow::rough_notes(runtime_get_url(ROUGH_NOTES_PAGE));
    let options = serde_wasm_bindgen::to_value(&window).map_err(|e| js_error(e.into()))?;
    windows_create(options).await.map_err(js_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rough_notes_window_shape() {
        let window = PopupWindow::rough_notes("chrome-extension://abc/rough_notes.html".into());
        assert_eq!(
            serde_json::to_value(&window).unwrap(),
            serde_json::json!({
                "url": "chrome-extension://abc/rough_notes.html",
                "type": "popup",
                "width": 360,
                "height": 480
            })
        );
    }

    #[test]
    fn test_rough_notes_page_is_shipped() {
        let loader = include_str!("../../extension/rough_notes.js");
        assert!(loader.contains("CHROME_NOTES_SURFACE = 'rough_notes'"));
        assert!(include_str!("../../extension/rough_notes.html").contains("rough_notes.js"));
        assert!(ROUGH_NOTES_PAGE.ends_with(".html"));
    }
}
