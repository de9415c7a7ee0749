//! Transcript → request history translation.

use jinro_types::config::ChatConfig;
use jinro_types::message::{Message, Role};
use crate::ports::{CompletionRequest, Turn, TurnRole};

/// Map a transcript role onto the service's vocabulary.
/// Roles the service has no name for are not sent.
pub fn turn_role(role: &Role) -> Option<TurnRole> {
    match role {
        Role::User => Some(TurnRole::User),
        Role::Assistant => Some(TurnRole::Model),
        Role::Other => None,
    }
}

/// One turn per message with a recognised role, in transcript order.
pub fn to_request_turns(messages: &[Message]) -> Vec<Turn> {
    messages
        .iter()
        .filter_map(|m| {
            turn_role(&m.role).map(|role| Turn {
                role,
                text: m.content.clone(),
            })
        })
        .collect()
}

pub fn build_request(config: &ChatConfig, messages: &[Message]) -> CompletionRequest {
    CompletionRequest {
        model: config.model.clone(),
        turns: to_request_turns(messages),
        system_instruction: config.system_instruction.clone(),
    }
}
