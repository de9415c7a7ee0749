#[cfg(test)]
mod tests {
    use crate::message::*;
    use crate::event::*;
    use crate::config::*;
    use crate::session::*;
    use crate::error::*;

    // ─── Message Tests ───────────────────────────────────────

    #[test]
    fn test_message_user() {
        let msg = Message::user("Hello");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "Hello");
    }

    #[test]
    fn test_message_assistant() {
        let msg = Message::assistant("I can help");
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(msg.content, "I can help");
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&Message::user("hi")).unwrap();
        assert_eq!(json, r#"{"role":"user","content":"hi"}"#);
        let json = serde_json::to_string(&Role::Assistant).unwrap();
        assert_eq!(json, r#""assistant""#);
    }

    #[test]
    fn test_unknown_role_deserializes_to_other() {
        let msg: Message =
            serde_json::from_str(r#"{"role":"system","content":"be nice"}"#).unwrap();
        assert_eq!(msg.role, Role::Other);
        assert_eq!(msg.content, "be nice");
    }

    #[test]
    fn test_role_as_str() {
        assert_eq!(Role::User.as_str(), "user");
        assert_eq!(Role::Assistant.as_str(), "assistant");
    }

    // ─── Session Tests ───────────────────────────────────────

    #[test]
    fn test_session_start_holds_only_welcome() {
        let session = Session::start();
        assert_eq!(session.len(), 1);
        assert_eq!(session.all()[0].role, Role::Assistant);
        assert_eq!(session.all()[0].content, WELCOME_MESSAGE);
        assert!(!session.id.is_empty());
        assert!(!session.created_at.is_empty());
    }

    #[test]
    fn test_session_new_is_empty_until_initialized() {
        let mut session = Session::new("s1".to_string());
        assert!(session.is_empty());
        session.initialize();
        assert_eq!(session.len(), 1);
        assert_eq!(session.all()[0], Message::assistant(WELCOME_MESSAGE));
    }

    #[test]
    fn test_session_initialize_is_idempotent() {
        let mut session = Session::start();
        session.append(Role::User, "안녕");
        let before = session.all().to_vec();

        session.initialize();
        session.initialize();

        assert_eq!(session.all(), before.as_slice());
    }

    #[test]
    fn test_session_append_keeps_order() {
        let mut session = Session::start();
        session.append(Role::User, "first");
        session.append(Role::Assistant, "second");
        session.append(Role::User, "third");

        let contents: Vec<&str> = session.all().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec![WELCOME_MESSAGE, "first", "second", "third"]);
        assert_eq!(session.last().unwrap().content, "third");
    }

    #[test]
    fn test_session_append_does_not_enforce_alternation() {
        let mut session = Session::start();
        session.append(Role::Assistant, "again");
        session.append(Role::Assistant, "and again");
        assert_eq!(session.len(), 3);
    }

    #[test]
    fn test_session_ids_are_unique() {
        let a = Session::start();
        let b = Session::start();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_session_serialization_roundtrip() {
        let mut session = Session::start();
        session.append(Role::User, "나는 그림 그리기를 좋아해");
        let json = serde_json::to_string(&session).unwrap();
        let restored: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.id, session.id);
        assert_eq!(restored.all(), session.all());
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_config_new_uses_constants() {
        let config = ChatConfig::new("key");
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.system_instruction, SYSTEM_INSTRUCTION);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.api_key, "key");
    }

    #[test]
    fn test_config_from_api_key_missing() {
        let err = ChatConfig::from_api_key(None).unwrap_err();
        assert!(matches!(err, ChatError::Config(_)));
        assert!(err.to_string().contains(API_KEY_VAR));
    }

    #[test]
    fn test_config_from_api_key_blank() {
        let err = ChatConfig::from_api_key(Some("   ".to_string())).unwrap_err();
        assert!(matches!(err, ChatError::Config(_)));
    }

    #[test]
    fn test_config_from_api_key_trims() {
        let config = ChatConfig::from_api_key(Some(" abc \n".to_string())).unwrap();
        assert_eq!(config.api_key, "abc");
    }

    #[test]
    fn test_config_serialization_skips_api_key() {
        let config = ChatConfig::new("secret-key");
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret-key"));
        let restored: ChatConfig = serde_json::from_str(&json).unwrap();
        assert!(restored.api_key.is_empty());
        assert_eq!(restored.model, config.model);
    }

    #[test]
    fn test_config_with_api_base() {
        let config = ChatConfig::new("k").with_api_base("http://localhost:8080");
        assert_eq!(config.api_base, "http://localhost:8080");
    }

    #[test]
    fn test_pick_api_key_prefers_runtime() {
        let key = pick_api_key(Some("runtime".to_string()), Some("build"));
        assert_eq!(key.as_deref(), Some("runtime"));
    }

    #[test]
    fn test_pick_api_key_falls_back_to_build_time() {
        assert_eq!(pick_api_key(None, Some("build")).as_deref(), Some("build"));
        assert_eq!(
            pick_api_key(Some(" ".to_string()), Some("build")).as_deref(),
            Some("build")
        );
    }

    #[test]
    fn test_pick_api_key_none() {
        assert!(pick_api_key(None, None).is_none());
        assert!(pick_api_key(Some(String::new()), Some("")).is_none());
    }

    // ─── Event Tests ─────────────────────────────────────────

    #[test]
    fn test_event_serialization() {
        let events = vec![
            ChatEvent::TurnStart { turn_id: 1 },
            ChatEvent::ReplyProgress { text: "Hel".to_string() },
            ChatEvent::ReplyComplete { text: "Hello".to_string() },
            ChatEvent::ReplyFailed { message: "boom".to_string() },
            ChatEvent::TurnEnd { turn_id: 1 },
        ];
        for event in events {
            let json = serde_json::to_string(&event).unwrap();
            let back: ChatEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(back, event);
        }
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        assert_eq!(
            ChatError::Config("missing key".to_string()).to_string(),
            "Configuration error: missing key"
        );
        assert_eq!(
            ChatError::Network("offline".to_string()).to_string(),
            "Network error: offline"
        );
        assert_eq!(ChatError::Other("custom".to_string()).to_string(), "custom");
    }

    #[test]
    fn test_api_error_display_contains_message() {
        let err = ChatError::Api {
            code: Some(400),
            status: "INVALID_ARGUMENT".to_string(),
            message: "API key not valid.".to_string(),
        };
        assert_eq!(err.to_string(), "400 INVALID_ARGUMENT. API key not valid.");

        let bare = ChatError::Api {
            code: None,
            status: String::new(),
            message: "quota".to_string(),
        };
        assert_eq!(bare.to_string(), "quota");
    }

    #[test]
    fn test_error_is_service() {
        let api = ChatError::Api {
            code: Some(429),
            status: "RESOURCE_EXHAUSTED".to_string(),
            message: "quota".to_string(),
        };
        assert!(api.is_service());
        assert!(!ChatError::Network("x".to_string()).is_service());
        assert!(!ChatError::Serialization("x".to_string()).is_service());
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: ChatError = json_err.into();
        assert!(matches!(err, ChatError::Serialization(_)));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_ok() -> crate::Result<i32> {
            Ok(42)
        }
        fn returns_err() -> crate::Result<i32> {
            Err(ChatError::Other("fail".to_string()))
        }
        assert_eq!(returns_ok().unwrap(), 42);
        assert!(returns_err().is_err());
    }
}
