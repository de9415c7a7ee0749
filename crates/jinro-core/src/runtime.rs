//! Chat runtime: drives one exchange against an explicit session.
//!
//! A turn is three steps so the caller never has to hold the session
//! across the network wait:
//! 1. [`ChatRuntime::begin_turn`] commits the user message and builds the request
//! 2. [`ChatRuntime::stream_reply`] drains the reply, publishing progress
//! 3. [`ChatRuntime::finish_turn`] commits whatever text came out of step 2
//!
//! Failures never escape step 2: they are turned into reply text.

use std::cell::Cell;

use jinro_types::{
    ChatError,
    config::ChatConfig,
    event::ChatEvent,
    message::Role,
    session::Session,
};
use crate::accumulate::drain_fragments;
use crate::event_bus::EventBus;
use crate::history::build_request;
use crate::ports::{CompletionPort, CompletionRequest};

pub struct ChatRuntime {
    config: ChatConfig,
    event_bus: EventBus,
    turn_counter: Cell<u64>,
}

impl ChatRuntime {
    pub fn new(config: ChatConfig, event_bus: EventBus) -> Self {
        Self {
            config,
            event_bus,
            turn_counter: Cell::new(0),
        }
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    /// Id of the most recently started turn (0 before the first)
    pub fn current_turn(&self) -> u64 {
        self.turn_counter.get()
    }

    /// Commit the user's message and build a request from the whole history.
    pub fn begin_turn(&self, session: &mut Session, user_input: &str) -> CompletionRequest {
        let turn_id = self.turn_counter.get() + 1;
        self.turn_counter.set(turn_id);

        session.append(Role::User, user_input);
        log::info!(
            "Turn {} started in session {} ({} messages)",
            turn_id,
            session.id,
            session.len()
        );
        self.event_bus.emit(ChatEvent::TurnStart { turn_id });

        build_request(&self.config, session.all())
    }

    /// Stream the reply for `req`. Always yields the text to commit:
    /// the full reply, or a readable description of what went wrong.
    pub async fn stream_reply(&self, llm: &dyn CompletionPort, req: CompletionRequest) -> String {
        let bus = &self.event_bus;
        let result = match llm.open_stream(req).await {
            Ok(stream) => {
                drain_fragments(stream, |text| {
                    bus.emit(ChatEvent::ReplyProgress {
                        text: text.to_string(),
                    });
                })
                .await
            }
            Err(e) => Err(e),
        };

        match result {
            Ok(text) => {
                bus.emit(ChatEvent::ReplyComplete { text: text.clone() });
                text
            }
            Err(e) => {
                log::error!("Completion via {} failed: {}", llm.provider_name(), e);
                let message = in_band_reply(&e);
                bus.emit(ChatEvent::ReplyFailed {
                    message: message.clone(),
                });
                message
            }
        }
    }

    /// Commit the assistant's reply (or error text) and close the turn.
    pub fn finish_turn(&self, session: &mut Session, reply: String) {
        session.append(Role::Assistant, reply);
        let turn_id = self.turn_counter.get();
        log::info!("Turn {} committed in session {}", turn_id, session.id);
        self.event_bus.emit(ChatEvent::TurnEnd { turn_id });
    }

    /// All three steps back to back, for callers that own the session outright.
    pub async fn run_turn(
        &self,
        session: &mut Session,
        user_input: &str,
        llm: &dyn CompletionPort,
    ) -> String {
        let req = self.begin_turn(session, user_input);
        let reply = self.stream_reply(llm, req).await;
        self.finish_turn(session, reply.clone());
        reply
    }
}

/// Text shown to the user, and committed to history, in place of a reply.
pub fn in_band_reply(err: &ChatError) -> String {
    if err.is_service() {
        format!("API 호출 중 오류가 발생했습니다: {}", err)
    } else {
        format!("예상치 못한 오류가 발생했습니다: {}", err)
    }
}
