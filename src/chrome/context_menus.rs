//! Context Menu Commands

use async_trait::async_trait;
use notes_core::{ContextMenus, NotesResult, CONTEXT_MENU_ID, CONTEXT_MENU_TITLE};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::js_error;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["chrome", "contextMenus"], js_name = create)]
    fn context_menus_create(properties: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["chrome", "contextMenus"], js_name = remove)]
    async fn context_menus_remove(id: JsValue) -> Result<JsValue, JsValue>;
}

#[derive(Serialize)]
struct CreateProperties<'a> {
    id: &'a str,
    title: &'a str,
    contexts: [&'a str; 1],
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ChromeContextMenus;

#[async_trait(?Send)]
impl ContextMenus for ChromeContextMenus {
    async fn create_capture_entry(&self) -> NotesResult<()> {
        let props = CreateProperties {
            id: CONTEXT_MENU_ID,
            title: CONTEXT_MENU_TITLE,
            contexts: ["selection"],
        };
        let js_props = serde_wasm_bindgen::to_value(&props).map_err(|e| js_error(e.into()))?;
        context_menus_create(js_props).map_err(js_error)?;
        Ok(())
    }

    async fn remove_capture_entry(&self) -> NotesResult<()> {
        context_menus_remove(JsValue::from_str(CONTEXT_MENU_ID)).await.map_err(js_error)?;
        Ok(())
    }
}
