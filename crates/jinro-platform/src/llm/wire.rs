//! Gemini `generateContent` wire types and their mapping to core types.

use serde::{Deserialize, Serialize};

use jinro_core::ports::{CompletionRequest, Turn};
use jinro_types::{ChatError, Result};

// ─── Request ─────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<SystemInstruction>,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
pub struct SystemInstruction {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
pub struct Part {
    pub text: String,
}

impl From<&Turn> for Content {
    fn from(turn: &Turn) -> Self {
        Self {
            role: turn.role.as_str().to_string(),
            parts: vec![Part {
                text: turn.text.clone(),
            }],
        }
    }
}

impl From<&CompletionRequest> for GenerateContentRequest {
    fn from(req: &CompletionRequest) -> Self {
        let system_instruction = if req.system_instruction.is_empty() {
            None
        } else {
            Some(SystemInstruction {
                parts: vec![Part {
                    text: req.system_instruction.clone(),
                }],
            })
        };
        Self {
            contents: req.turns.iter().map(Content::from).collect(),
            system_instruction,
        }
    }
}

// ─── Response ────────────────────────────────────────────────

/// One streamed chunk. A chunk may also carry an `error` instead of
/// candidates when the service fails after the stream opened.
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
pub struct PartResponse {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorWrapper {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: Option<u16>,
    pub message: Option<String>,
    pub status: Option<String>,
}

impl From<ErrorBody> for ChatError {
    fn from(body: ErrorBody) -> Self {
        ChatError::Api {
            code: body.code,
            status: body.status.unwrap_or_default(),
            message: body.message.unwrap_or_default(),
        }
    }
}

/// Text carried by one streamed chunk: all text parts of the first
/// candidate, concatenated. Empty when the chunk has no text.
pub fn chunk_text(payload: &str) -> Result<String> {
    let chunk: GenerateContentResponse = serde_json::from_str(payload)?;
    if let Some(error) = chunk.error {
        return Err(error.into());
    }
    let text = chunk
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<String>()
        })
        .unwrap_or_default();
    Ok(text)
}

/// Body text of a non-2xx response. A body that could not be read is
/// logged and treated as empty.
pub fn error_body_text<E: std::fmt::Display>(
    status: u16,
    body: std::result::Result<String, E>,
) -> String {
    match body {
        Ok(text) => text,
        Err(e) => {
            log::warn!("Reading error body of HTTP {} failed: {}", status, e);
            String::new()
        }
    }
}

/// Turn a non-2xx response body into a service error.
pub fn http_error(status: u16, body: &str) -> ChatError {
    match serde_json::from_str::<ErrorWrapper>(body) {
        Ok(wrapper) => {
            let mut err: ChatError = wrapper.error.into();
            if let ChatError::Api { code, message, .. } = &mut err {
                code.get_or_insert(status);
                if message.is_empty() {
                    *message = body.to_string();
                }
            }
            err
        }
        Err(_) => ChatError::Api {
            code: Some(status),
            status: String::new(),
            message: if body.trim().is_empty() {
                format!("HTTP {}", status)
            } else {
                body.trim().to_string()
            },
        },
    }
}
