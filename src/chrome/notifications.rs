//! System Notifications

use async_trait::async_trait;
use notes_core::{Notifications, NotesResult};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::js_error;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["chrome", "notifications"], js_name = create)]
    async fn notifications_create(options: JsValue) -> Result<JsValue, JsValue>;
}

const ICON_URL: &str = "images/icon48.png";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NotificationOptions<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    icon_url: &'a str,
    title: &'a str,
    message: &'a str,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ChromeNotifications;

#[async_trait(?Send)]
impl Notifications for ChromeNotifications {
    async fn notify(&self, title: &str, message: &str) -> NotesResult<()> {
        let options = NotificationOptions { kind: "basic", icon_url: ICON_URL, title, message };
        let js_options = serde_wasm_bindgen::to_value(&options).map_err(|e| js_error(e.into()))?;
        notifications_create(js_options).await.map_err(js_error)?;
        Ok(())
    }
}
