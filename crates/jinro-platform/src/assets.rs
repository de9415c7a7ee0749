//! Static files served next to the wasm bundle.

use js_sys::Uint8Array;
use wasm_bindgen_futures::JsFuture;

use jinro_types::{ChatError, Result};

/// Download `url` relative to the page. Every failure carries the reason.
pub async fn fetch_bytes(url: &str) -> Result<Vec<u8>> {
    let window = web_sys::window()
        .ok_or_else(|| ChatError::JsInterop("no window to fetch from".to_string()))?;
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| ChatError::Network(format!("fetch {} failed: {:?}", url, e)))?;
    let resp: web_sys::Response = resp.into();
    if !resp.ok() {
        return Err(ChatError::Network(format!("{} returned HTTP {}", url, resp.status())));
    }
    let promise = resp
        .array_buffer()
        .map_err(|e| ChatError::JsInterop(format!("{} body unavailable: {:?}", url, e)))?;
    let buf = JsFuture::from(promise)
        .await
        .map_err(|e| ChatError::Network(format!("reading {} failed: {:?}", url, e)))?;
    Ok(Uint8Array::new(&buf).to_vec())
}
