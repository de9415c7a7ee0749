//! WASM-target tests for jinro-platform (Node.js runtime).
//!
//! Covers the SSE decoder, body reader, wire mapping, credential lookup
//! and asset fetching under wasm32-unknown-unknown via `wasm-pack test --node`.
//!
//! Live Gemini calls need a browser, a key and network, and are not run here.

#![cfg(target_arch = "wasm32")]

use futures::StreamExt;
use js_sys::{Function, Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{ReadableStream, ReadableStreamDefaultReader};

use jinro_platform::llm::GeminiProvider;
use jinro_platform::llm::body::fragment_stream;
use jinro_platform::llm::gemini::chunk_stream;
use jinro_platform::llm::sse::SseDecoder;
use jinro_platform::llm::wire::chunk_text;
use jinro_platform::{assets, secrets};
use jinro_types::ChatError;
use jinro_types::config::ChatConfig;

// ─── SseDecoder Tests ────────────────────────────────────

#[wasm_bindgen_test]
fn sse_decodes_gemini_chunks() {
    let mut dec = SseDecoder::new();
    let mut texts = Vec::new();
    for chunk in [
        &b"data: {\"candidates\":[{\"content\":{\"parts\":[{\"text\":\"Hel\"}]}}]}\r\n\r\nda"[..],
        &b"ta: {\"candidates\":[{\"content\":{\"parts\":[{\"text\":\"lo\"}]}}]}\r\n\r\n"[..],
    ] {
        for payload in dec.push(chunk) {
            texts.push(chunk_text(&payload).unwrap());
        }
    }
    assert_eq!(texts, vec!["Hel", "lo"]);
}

// ─── Body Reader Tests ───────────────────────────────────

/// Reader over a body whose `start(c)` runs `script`.
fn body_reader(script: &str) -> ReadableStreamDefaultReader {
    let source = Object::new();
    Reflect::set(&source, &"start".into(), &Function::new_with_args("c", script)).unwrap();
    ReadableStream::new_with_underlying_source(&source)
        .unwrap()
        .get_reader()
        .unchecked_into()
}

fn enqueue(payload: serde_json::Value) -> String {
    let event = serde_json::to_string(&format!("data: {}\n\n", payload)).unwrap();
    format!("c.enqueue(new TextEncoder().encode({}));", event)
}

fn text(t: &str) -> serde_json::Value {
    serde_json::json!({ "candidates": [{ "content": { "parts": [{ "text": t }] } }] })
}

#[wasm_bindgen_test]
async fn body_reads_until_close() {
    let script = format!("{}{}c.close();", enqueue(text("Hel")), enqueue(text("lo")));
    let reader = body_reader(&script);

    let items: Vec<_> = fragment_stream(chunk_stream(reader)).collect().await;

    assert_eq!(items, vec![Ok("Hel".to_string()), Ok("lo".to_string())]);
}

#[wasm_bindgen_test]
async fn body_cancelled_after_error_event() {
    // The body is never closed; the error event must end the reply and
    // cancel the rest of the body.
    let error = serde_json::json!({ "error": { "code": 500, "message": "boom", "status": "INTERNAL" } });
    let script = format!("{}{}", enqueue(text("a")), enqueue(error));
    let reader = body_reader(&script);

    let items: Vec<_> = fragment_stream(chunk_stream(reader.clone())).collect().await;

    assert_eq!(items.len(), 2);
    assert_eq!(items[0], Ok("a".to_string()));
    assert!(matches!(items[1], Err(ChatError::Api { code: Some(500), .. })));
    assert!(JsFuture::from(reader.closed()).await.is_ok());
}

// ─── Provider Tests ──────────────────────────────────────

#[wasm_bindgen_test]
fn provider_requires_key() {
    assert!(matches!(
        GeminiProvider::new(ChatConfig::new("")),
        Err(ChatError::Config(_))
    ));
}

// ─── Secrets Tests ───────────────────────────────────────

#[wasm_bindgen_test]
fn page_key_absent_without_window() {
    // Node has no `window`.
    assert!(secrets::page_api_key().is_none());
}

// ─── Asset Tests ─────────────────────────────────────────

#[wasm_bindgen_test]
async fn fetch_without_window_reports_reason() {
    let err = assets::fetch_bytes("assets/NotoSansKR-Regular.otf").await.unwrap_err();
    assert!(matches!(err, ChatError::JsInterop(_)));
    assert!(err.to_string().contains("no window"));
}
