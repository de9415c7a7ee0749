//! Gemini completion adapter.
//!
//! Calls `streamGenerateContent` with `alt=sse` and reads the body through
//! the browser `ReadableStream`, so fragments reach the UI as they arrive.
//! Uses browser `fetch()` via gloo-net for WASM compatibility.

use async_trait::async_trait;
use futures::stream;
use gloo_net::http::Request;
use js_sys::{Reflect, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::ReadableStreamDefaultReader;

use jinro_core::ports::*;
use jinro_types::{ChatError, Result, config::ChatConfig};

use super::body::{ChunkStream, fragment_stream};
use super::wire::{GenerateContentRequest, error_body_text, http_error};

pub struct GeminiProvider {
    config: ChatConfig,
}

impl GeminiProvider {
    /// Fails when the config cannot possibly produce a working client.
    pub fn new(config: ChatConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(ChatError::Config("API key is empty".to_string()));
        }
        let base = config.api_base.as_str();
        if !(base.starts_with("https://") || base.starts_with("http://")) {
            return Err(ChatError::Config(format!("Invalid API base URL: {}", base)));
        }
        Ok(Self { config })
    }

    pub fn stream_url(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:streamGenerateContent?alt=sse",
            self.config.api_base.trim_end_matches('/'),
            model
        )
    }
}

#[async_trait(?Send)]
impl CompletionPort for GeminiProvider {
    async fn open_stream(&self, req: CompletionRequest) -> Result<FragmentStream> {
        let url = self.stream_url(&req.model);
        let body = GenerateContentRequest::from(&req);
        log::info!("Requesting {} with {} turns", req.model, req.turns.len());

        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .map_err(|e| ChatError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let text = error_body_text(status, response.text().await);
            return Err(http_error(status, &text));
        }

        let body = response
            .body()
            .ok_or_else(|| ChatError::Other("Response has no body".to_string()))?;
        let reader: ReadableStreamDefaultReader = body.get_reader().unchecked_into();
        Ok(fragment_stream(chunk_stream(reader)))
    }

    fn provider_name(&self) -> &str {
        "gemini"
    }
}

// ─── Body reading ────────────────────────────────────────────

/// Owns the browser reader. Cancels the body if dropped before it ended.
struct BodyReader {
    reader: ReadableStreamDefaultReader,
    done: bool,
}

impl Drop for BodyReader {
    fn drop(&mut self) {
        if self.done {
            return;
        }
        let cancel = JsFuture::from(self.reader.cancel());
        spawn_local(async move {
            if let Err(e) = cancel.await {
                log::warn!("Cancelling response body failed: {:?}", e);
            }
        });
    }
}

/// Adapt a browser body reader into a [`ChunkStream`].
pub fn chunk_stream(reader: ReadableStreamDefaultReader) -> ChunkStream {
    let body = BodyReader {
        reader,
        done: false,
    };
    Box::pin(stream::unfold(body, |mut body| async move {
        if body.done {
            return None;
        }
        let chunk = read_chunk(&body.reader).await;
        match chunk {
            Ok(Some(bytes)) => Some((Ok(bytes), body)),
            Ok(None) => {
                body.done = true;
                None
            }
            Err(e) => {
                body.done = true;
                Some((Err(e), body))
            }
        }
    }))
}

/// Next body chunk, or `None` once the body is exhausted.
async fn read_chunk(reader: &ReadableStreamDefaultReader) -> Result<Option<Vec<u8>>> {
    let result = JsFuture::from(reader.read()).await.map_err(js_error)?;
    let done = Reflect::get(&result, &JsValue::from_str("done"))
        .map_err(js_error)?
        .as_bool()
        .unwrap_or(false);
    if done {
        return Ok(None);
    }
    let value = Reflect::get(&result, &JsValue::from_str("value")).map_err(js_error)?;
    Ok(Some(Uint8Array::new(&value).to_vec()))
}

fn js_error(value: JsValue) -> ChatError {
    ChatError::Network(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}
