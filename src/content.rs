//! Content Surface
//!
//! Runs inside web pages: answers selection queries and, when enabled,
//! adds the floating note button. `extension/content.js` owns the message
//! listener and forwards requests to `content_message`.

use wasm_bindgen_futures::spawn_local;
use notes_core::storage::SettingsRepository;
use notes_core::{ExtensionMessage, SelectedText};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::chrome::{self, ChromeStorage};

const BUTTON_ID: &str = "chrome-notes-button";

const BUTTON_STYLE: [(&str, &str); 15] = [
    ("position", "fixed"),
    ("bottom", "20px"),
    ("right", "20px"),
    ("width", "50px"),
    ("height", "50px"),
    ("border-radius", "50%"),
    ("background-color", "#4285f4"),
    ("color", "white"),
    ("display", "flex"),
    ("align-items", "center"),
    ("justify-content", "center"),
    ("font-size", "24px"),
    ("box-shadow", "0 2px 10px rgba(0, 0, 0, 0.2)"),
    ("cursor", "pointer"),
    ("z-index", "9999"),
];

/// `runtime.onMessage` in the page; `undefined` for requests it doesn't answer
#[wasm_bindgen]
pub fn content_message(request: JsValue) -> JsValue {
    let message: Option<ExtensionMessage> = serde_wasm_bindgen::from_value(request).ok();
    match selection_reply(message.as_ref(), selected_text) {
        Some(reply) => serde_wasm_bindgen::to_value(&reply).unwrap_or(JsValue::UNDEFINED),
        None => JsValue::UNDEFINED,
    }
}

fn selection_reply(message: Option<&ExtensionMessage>, selection: impl FnOnce() -> String) -> Option<SelectedText> {
    match message {
        Some(ExtensionMessage::GetSelectedText) => Some(SelectedText { selected_text: selection() }),
        _ => None,
    }
}

pub fn start() {
    spawn_local(async move {
        let settings = match SettingsRepository::new(&ChromeStorage).load().await {
            Ok(settings) => settings.unwrap_or_default(),
            Err(e) => {
                log::debug!("[CONTENT] settings unavailable: {}", e);
                return;
            }
        };
        if settings.floating_button {
            if let Err(e) = create_floating_button() {
                log::warn!("[CONTENT] floating button failed: {}", chrome::describe_js_error(&e));
            }
        }
    });
}

/// Current page selection as text
fn selected_text() -> String {
    web_sys::window()
        .and_then(|w| w.get_selection().ok().flatten())
        .map(|s| String::from(s.to_string()))
        .unwrap_or_default()
}

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))
}

fn create_floating_button() -> Result<(), JsValue> {
    let document = document()?;
    if document.get_element_by_id(BUTTON_ID).is_some() {
        return Ok(());
    }
    let button: HtmlElement = document.create_element("div")?.dyn_into()?;
    button.set_id(BUTTON_ID);
    button.set_inner_html("📝");
    button.set_title("Add to Chrome Notes");

    let style = button.style();
    for (property, value) in BUTTON_STYLE {
        style.set_property(property, value)?;
    }
    style.set_property("transition", "transform 0.2s")?;

    let hovered = button.clone();
    let on_over = Closure::<dyn FnMut()>::new(move || {
        let _ = hovered.style().set_property("transform", "scale(1.1)");
    });
    button.add_event_listener_with_callback("mouseover", on_over.as_ref().unchecked_ref())?;
    on_over.forget();

    let left = button.clone();
    let on_out = Closure::<dyn FnMut()>::new(move || {
        let _ = left.style().set_property("transform", "scale(1)");
    });
    button.add_event_listener_with_callback("mouseout", on_out.as_ref().unchecked_ref())?;
    on_out.forget();

    let on_click = Closure::<dyn FnMut()>::new(move || {
        let message = floating_button_message(selected_text(), page_url(), page_title());
        spawn_local(async move {
            if let Err(e) = chrome::send_message(&message).await {
                log::warn!("[CONTENT] message to background failed: {}", e);
            }
        });
    });
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?
        .append_child(&button)?;
    log::info!("[CONTENT] floating button added");
    Ok(())
}

fn page_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}

fn page_title() -> String {
    document().map(|d| d.title()).unwrap_or_default()
}

/// Capture the selection if there is one, otherwise open the popup
fn floating_button_message(selection: String, url: String, title: String) -> ExtensionMessage {
    if selection.is_empty() {
        ExtensionMessage::OpenPopup
    } else {
        ExtensionMessage::CreateNote { content: selection, url, title }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_selection_requests_get_a_reply() {
        let reply = selection_reply(Some(&ExtensionMessage::GetSelectedText), || "picked".into());
        assert_eq!(reply, Some(SelectedText { selected_text: "picked".into() }));
        assert_eq!(selection_reply(Some(&ExtensionMessage::OpenPopup), || "x".into()), None);
        assert_eq!(selection_reply(None, || "x".into()), None);
    }

    #[test]
    fn test_loader_listens_before_module_loads() {
        let loader = include_str!("../extension/content.js");
        let listen_at = loader.find("chrome.runtime.onMessage.addListener").unwrap();
        let import_at = loader.find("import(").unwrap();
        assert!(listen_at > import_at);
        assert!(!loader.contains("await import"));
        assert!(loader.contains("content_message"));
    }

    #[test]
    fn test_button_without_selection_opens_popup() {
        let msg = floating_button_message(String::new(), "https://a.test".into(), "A".into());
        assert_eq!(msg, ExtensionMessage::OpenPopup);
    }

    #[test]
    fn test_button_with_selection_creates_note() {
        let msg = floating_button_message("quoted".into(), "https://a.test".into(), "A".into());
        assert_eq!(
            msg,
            ExtensionMessage::CreateNote {
                content: "quoted".into(),
                url: "https://a.test".into(),
                title: "A".into(),
            }
        );
    }
}
