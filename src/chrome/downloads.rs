//! Downloads
//!
//! Files are handed to `chrome.downloads` as percent-encoded `data:` URLs, which
//! also work from the background service worker where object URLs don't.

use async_trait::async_trait;
use notes_core::{DownloadRequest, Downloads, NotesResult};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::js_error;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["chrome", "downloads"], js_name = download)]
    async fn downloads_download(options: JsValue) -> Result<JsValue, JsValue>;
}

#[derive(Serialize)]
struct DownloadOptions<'a> {
    url: String,
    filename: &'a str,
    #[serde(rename = "saveAs")]
    save_as: bool,
}

/// `data:<mime>;charset=utf-8,<percent-encoded contents>`
pub fn data_url(mime: &str, contents: &str) -> String {
    format!("data:{};charset=utf-8,{}", mime, utf8_percent_encode(contents, NON_ALPHANUMERIC))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ChromeDownloads;

#[async_trait(?Send)]
impl Downloads for ChromeDownloads {
    async fn download(&self, request: &DownloadRequest) -> NotesResult<()> {
        let options = DownloadOptions {
            url: data_url(request.mime, &request.contents),
            filename: &request.filename,
            save_as: request.save_as,
        };
        let js_options = serde_wasm_bindgen::to_value(&options).map_err(|e| js_error(e.into()))?;
        downloads_download(js_options).await.map_err(js_error)?;
        log::debug!("download started: {}", request.filename);
        Ok(())
    }
}
