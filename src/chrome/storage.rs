//! chrome.storage Gateway
//!
//! Values cross the JS boundary as JSON text so numbers stay integers and
//! objects stay plain objects.

use async_trait::async_trait;
use notes_core::{Bucket, NotesError, NotesResult, StorageGateway};
use serde_json::Value;
use wasm_bindgen::prelude::*;

use super::js_error;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["chrome", "storage", "sync"], js_name = get)]
    async fn sync_get(keys: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["chrome", "storage", "sync"], js_name = set)]
    async fn sync_set(items: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["chrome", "storage", "local"], js_name = get)]
    async fn local_get(keys: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["chrome", "storage", "local"], js_name = set)]
    async fn local_set(items: JsValue) -> Result<JsValue, JsValue>;
}

/// `chrome.storage.sync` / `chrome.storage.local`
#[derive(Debug, Clone, Copy, Default)]
pub struct ChromeStorage;

#[async_trait(?Send)]
impl StorageGateway for ChromeStorage {
    async fn get(&self, bucket: Bucket, key: &str) -> NotesResult<Option<Value>> {
        let keys = JsValue::from_str(key);
        let result = match bucket {
            Bucket::Synced => sync_get(keys).await,
            Bucket::Local => local_get(keys).await,
        }
        .map_err(js_error)?;

        let value = js_sys::Reflect::get(&result, &JsValue::from_str(key)).map_err(js_error)?;
        if value.is_undefined() {
            return Ok(None);
        }
        let text: String = js_sys::JSON::stringify(&value).map_err(js_error)?.into();
        serde_json::from_str(&text)
            .map(Some)
            .map_err(|e| NotesError::storage(format!("{}.{}: {}", bucket.as_str(), key, e)))
    }

    async fn set(&self, bucket: Bucket, key: &str, value: Value) -> NotesResult<()> {
        let items = js_sys::Object::new();
        let js_value = js_sys::JSON::parse(&value.to_string()).map_err(js_error)?;
        js_sys::Reflect::set(&items, &JsValue::from_str(key), &js_value).map_err(js_error)?;

        match bucket {
            Bucket::Synced => sync_set(items.into()).await,
            Bucket::Local => local_set(items.into()).await,
        }
        .map_err(js_error)?;
        Ok(())
    }
}
