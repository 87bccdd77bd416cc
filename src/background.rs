//! Background Surface
//!
//! Service-worker handlers: install-time setup, the context-menu capture and
//! the message router for the other surfaces. `extension/background.js`
//! registers the listeners synchronously and forwards each event here once
//! the module has initialized.

use chrono::Utc;
use notes_core::services::{CaptureService, MenuClick};
use notes_core::{ExtensionMessage, TabInfo};
use wasm_bindgen::prelude::*;

use crate::chrome::{self, ChromeContextMenus, ChromeNotifications, ChromeStorage};

type Capture = CaptureService<'static, ChromeStorage, ChromeNotifications, ChromeContextMenus>;

fn capture_service() -> Capture {
    CaptureService::new(&ChromeStorage, &ChromeNotifications, &ChromeContextMenus)
}

pub fn start() {
    log::info!("[BACKGROUND] ready");
}

/// `runtime.onInstalled`
#[wasm_bindgen]
pub async fn background_installed() {
    match capture_service().on_installed().await {
        Ok(()) => log::info!("[BACKGROUND] Chrome Notes Extension installed"),
        Err(e) => log::error!("[BACKGROUND] install setup failed: {}", e),
    }
}

/// `contextMenus.onClicked`
#[wasm_bindgen]
pub async fn background_menu_clicked(info: JsValue, tab: JsValue) {
    let click: MenuClick = match serde_wasm_bindgen::from_value(info) {
        Ok(click) => click,
        Err(e) => {
            log::warn!("[BACKGROUND] unreadable menu click: {}", e);
            return;
        }
    };
    let tab: TabInfo = if tab.is_undefined() || tab.is_null() {
        TabInfo::default()
    } else {
        serde_wasm_bindgen::from_value(tab).unwrap_or_default()
    };
    let now = Utc::now().timestamp_millis();
    if let Err(e) = capture_service().on_menu_clicked(&click, &tab.title, &tab.url, now).await {
        log::error!("[BACKGROUND] saving selection failed: {}", e);
    }
}

/// `runtime.onMessage`; resolves to the reply, `undefined` when there is none
#[wasm_bindgen]
pub async fn background_message(request: JsValue) -> JsValue {
    let message: ExtensionMessage = match serde_wasm_bindgen::from_value(request) {
        Ok(message) => message,
        Err(_) => return JsValue::UNDEFINED,
    };
    match message {
        ExtensionMessage::GetTabInfo => {
            let tab = match chrome::active_tab().await {
                Ok(tab) => tab.unwrap_or_default(),
                Err(e) => {
                    log::warn!("[BACKGROUND] tab query failed: {}", e);
                    TabInfo::default()
                }
            };
            serde_wasm_bindgen::to_value(&tab).unwrap_or(JsValue::UNDEFINED)
        }
        ExtensionMessage::CreateNote { content, url, title } => {
            let now = Utc::now().timestamp_millis();
            if let Err(e) = capture_service().capture(&content, &title, &url, now).await {
                log::error!("[BACKGROUND] floating button capture failed: {}", e);
            }
            JsValue::UNDEFINED
        }
        ExtensionMessage::OpenPopup => {
            if let Err(e) = chrome::open_popup().await {
                log::warn!("[BACKGROUND] opening popup failed: {}", e);
            }
            JsValue::UNDEFINED
        }
        ExtensionMessage::GetSelectedText => JsValue::UNDEFINED,
    }
}
