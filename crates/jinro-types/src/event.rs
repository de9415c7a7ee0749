use serde::{Deserialize, Serialize};

/// Events emitted by the chat runtime.
/// UI subscribes to these for reactive updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChatEvent {
    /// A user message was committed and a reply is being requested
    TurnStart { turn_id: u64 },

    /// Accumulated reply text so far (not a single fragment)
    ReplyProgress { text: String },

    /// The stream ended normally
    ReplyComplete { text: String },

    /// The call failed; `message` is what gets committed as the reply
    ReplyFailed { message: String },

    /// The reply was committed to the session
    TurnEnd { turn_id: u64 },
}
