use serde::{Deserialize, Serialize};
use crate::{ChatError, Result};

/// Model every request is sent to
pub const MODEL_NAME: &str = "gemini-2.5-flash";

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Name of the credential, both as a build-time env var and as a page global
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

pub const SYSTEM_INSTRUCTION: &str = "당신은 친절하고 전문적인 10대 진로 상담사입니다. 사용자는 청소년이므로, \
쉽고 긍정적이며 구체적인 조언을 제공해야 합니다. \
꿈과 진로, 공부 방법, 적성 찾기 등에 대해 격려하며 도움을 주세요. \
어려운 전문 용어는 피하고, 항상 희망적인 어조로 답변하세요.";

pub const WELCOME_MESSAGE: &str = "안녕하세요! 저는 여러분의 꿈과 적성을 찾아주는 친절한 진로 상담사 제미나이입니다. \
어떤 고민이 있나요? 무엇이든 이야기해주세요!";

pub const INPUT_HINT: &str = "진로, 적성, 공부 방법에 대해 질문하세요...";

/// Everything the completion client needs. Fixed for the lifetime of the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatConfig {
    pub model: String,
    pub system_instruction: String,
    #[serde(skip_serializing, default)]
    pub api_key: String,
    pub api_base: String,
}

impl ChatConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            model: MODEL_NAME.to_string(),
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            api_key: api_key.into(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Build the config from a looked-up credential.
    /// A missing or blank credential is a fatal configuration error.
    pub fn from_api_key(api_key: Option<String>) -> Result<Self> {
        match api_key {
            Some(key) if !key.trim().is_empty() => Ok(Self::new(key.trim())),
            _ => Err(ChatError::Config(format!(
                "'{}' 환경 변수 또는 배포 플랫폼 Secret이 설정되지 않았습니다.",
                API_KEY_VAR
            ))),
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }
}

/// Pick the first non-blank credential: the host-injected secret wins over
/// the one baked in at build time.
pub fn pick_api_key(runtime: Option<String>, build_time: Option<&str>) -> Option<String> {
    runtime
        .filter(|k| !k.trim().is_empty())
        .or_else(|| {
            build_time
                .filter(|k| !k.trim().is_empty())
                .map(String::from)
        })
}
