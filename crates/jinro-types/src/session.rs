//! Session store: the transcript of one browser session.
//!
//! Passed explicitly to whoever needs it; nothing here is global.
//! A page reload drops the session and starts a new one.

use serde::{Deserialize, Serialize};
use crate::config::WELCOME_MESSAGE;
use crate::message::{Message, Role};

/// One user's conversation for the lifetime of a page load
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub created_at: String,
    messages: Vec<Message>,
}

impl Session {
    /// An empty session. Call [`Session::initialize`] before use.
    pub fn new(id: String) -> Self {
        Self {
            id,
            created_at: chrono::Utc::now().to_rfc3339(),
            messages: Vec::new(),
        }
    }

    /// A fresh session with a random id, already holding the welcome message.
    pub fn start() -> Self {
        let mut session = Self::new(uuid::Uuid::new_v4().to_string());
        session.initialize();
        session
    }

    /// Seed the welcome message. No-op on a non-empty transcript.
    pub fn initialize(&mut self) {
        if self.messages.is_empty() {
            self.messages.push(Message::assistant(WELCOME_MESSAGE));
        }
    }

    /// Append to the end. Role alternation is the caller's business.
    pub fn append(&mut self, role: Role, content: impl Into<String>) {
        self.messages.push(Message::new(role, content));
    }

    /// The whole transcript in insertion order
    pub fn all(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}
