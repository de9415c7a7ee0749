//! Credential lookup.
//!
//! A hosting page may inject the key as a global before the WASM module
//! loads (`window.GEMINI_API_KEY = "..."`), the browser-side equivalent of
//! a platform secret. Otherwise the key baked in at build time is used.

use js_sys::Reflect;
use wasm_bindgen::JsValue;

use jinro_types::Result;
use jinro_types::config::{API_KEY_VAR, ChatConfig, pick_api_key};

/// Key injected into the page, if any. `None` outside a window context.
pub fn page_api_key() -> Option<String> {
    let window = web_sys::window()?;
    Reflect::get(&window, &JsValue::from_str(API_KEY_VAR))
        .ok()
        .and_then(|v| v.as_string())
}

/// Key from `GEMINI_API_KEY` at compile time, if it was set.
pub fn build_time_api_key() -> Option<&'static str> {
    option_env!("GEMINI_API_KEY")
}

/// Resolve the credential and build the chat config.
/// Missing credential is a configuration error the caller must treat as fatal.
pub fn load_config() -> Result<ChatConfig> {
    let key = pick_api_key(page_api_key(), build_time_api_key());
    match &key {
        Some(_) => log::info!("{} found", API_KEY_VAR),
        None => log::error!("{} is not set", API_KEY_VAR),
    }
    ChatConfig::from_api_key(key)
}
