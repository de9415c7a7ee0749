//! Port traits: the hexagonal architecture boundary.
//!
//! These traits are defined here in `jinro-core` (pure Rust).
//! Implementations live in `jinro-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use std::pin::Pin;
use async_trait::async_trait;
use futures::Stream;
use serde::{Deserialize, Serialize};
use jinro_types::Result;

// ─── Completion Port ─────────────────────────────────────────

/// Role of a turn as the completion service names it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Model,
}

impl TurnRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnRole::User => "user",
            TurnRole::Model => "model",
        }
    }
}

/// One entry of the history sent upstream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: TurnRole,
    pub text: String,
}

/// Request to send to the completion service. Always streamed.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub turns: Vec<Turn>,
    pub system_instruction: String,
}

/// Lazy, finite, non-restartable sequence of text fragments.
/// An `Err` item ends the reply; nothing after it is read.
pub type FragmentStream = Pin<Box<dyn Stream<Item = Result<String>>>>;

#[async_trait(?Send)]
pub trait CompletionPort {
    /// Open a streamed completion. Setup failures (bad credential,
    /// rejected request, unreachable host) come back as `Err` here;
    /// failures after the first byte come back inside the stream.
    async fn open_stream(&self, req: CompletionRequest) -> Result<FragmentStream>;

    /// Name of this provider (for logging/debug)
    fn provider_name(&self) -> &str;
}
