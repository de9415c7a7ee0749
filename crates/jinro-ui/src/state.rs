//! UI-level state that drives rendering.
//! The committed transcript lives in the session; this only holds what is
//! in flight, updated each frame by draining the EventBus.

use jinro_types::event::ChatEvent;

const STATUS_READY: &str = "준비 완료";
const STATUS_WAITING: &str = "답변을 준비하고 있어요...";
const STATUS_STREAMING: &str = "답변하는 중...";

/// Where the current turn is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStatus {
    Idle,
    /// Request sent, nothing received yet
    Waiting,
    Streaming,
}

/// State visible to UI panels
pub struct UiState {
    pub turn: TurnStatus,
    /// Reply being assembled, shown with a cursor until committed
    pub streaming_text: String,
    /// Error of the last failed turn; cleared when a new turn starts
    pub error_banner: Option<String>,
    /// Input field content
    pub input_text: String,
    pub show_sidebar: bool,
    /// Status line text
    pub status_text: String,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            turn: TurnStatus::Idle,
            streaming_text: String::new(),
            error_banner: None,
            input_text: String::new(),
            show_sidebar: true,
            status_text: STATUS_READY.to_string(),
        }
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<ChatEvent>) {
        for event in events {
            match event {
                ChatEvent::TurnStart { .. } => {
                    self.turn = TurnStatus::Waiting;
                    self.streaming_text.clear();
                    self.error_banner = None;
                    self.status_text = STATUS_WAITING.to_string();
                }
                ChatEvent::ReplyProgress { text } => {
                    self.turn = TurnStatus::Streaming;
                    self.streaming_text = text;
                    self.status_text = STATUS_STREAMING.to_string();
                }
                ChatEvent::ReplyComplete { text } => {
                    self.streaming_text = text;
                }
                ChatEvent::ReplyFailed { message } => {
                    self.streaming_text.clear();
                    self.error_banner = Some(message);
                }
                ChatEvent::TurnEnd { .. } => {
                    self.turn = TurnStatus::Idle;
                    self.streaming_text.clear();
                    self.status_text = STATUS_READY.to_string();
                }
            }
        }
    }

    /// Take the trimmed input if it may be sent now.
    pub fn take_input(&mut self) -> Option<String> {
        let text = self.input_text.trim();
        if text.is_empty() || self.is_busy() {
            return None;
        }
        let text = text.to_string();
        self.input_text.clear();
        Some(text)
    }

    pub fn is_busy(&self) -> bool {
        self.turn != TurnStatus::Idle
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
