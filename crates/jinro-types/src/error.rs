use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChatError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error reported by the completion service itself
    /// (authentication, quota, malformed request, ...).
    #[error("{}", format_api(*code, status, message))]
    Api {
        code: Option<u16>,
        status: String,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("JS interop error: {0}")]
    JsInterop(String),

    #[error("{0}")]
    Other(String),
}

impl ChatError {
    /// True for errors the remote service reported by name.
    pub fn is_service(&self) -> bool {
        matches!(self, ChatError::Api { .. })
    }
}

fn format_api(code: Option<u16>, status: &str, message: &str) -> String {
    match (code, status.is_empty()) {
        (Some(code), false) => format!("{} {}. {}", code, status, message),
        (Some(code), true) => format!("{}. {}", code, message),
        (None, false) => format!("{}. {}", status, message),
        (None, true) => message.to_string(),
    }
}

impl From<serde_json::Error> for ChatError {
    fn from(e: serde_json::Error) -> Self {
        ChatError::Serialization(e.to_string())
    }
}
