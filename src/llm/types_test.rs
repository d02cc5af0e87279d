use super::*;

#[test]
fn turn_serializes_as_role_and_content() {
    let json = serde_json::to_value(Turn::user("hello")).unwrap();
    assert_eq!(json, serde_json::json!({ "role": "user", "content": "hello" }));
}

#[test]
fn turn_deserializes_assistant_role() {
    let turn: Turn = serde_json::from_str(r#"{"role":"assistant","content":"hi"}"#).unwrap();
    assert_eq!(turn.role(), Role::Assistant);
    assert_eq!(turn.content(), "hi");
}

#[test]
fn unknown_role_is_rejected() {
    let err = serde_json::from_str::<Turn>(r#"{"role":"tool","content":"x"}"#);
    assert!(err.is_err());
}

#[test]
fn role_as_str_matches_wire_names() {
    assert_eq!(Role::User.as_str(), "user");
    assert_eq!(Role::Assistant.as_str(), "assistant");
    assert_eq!(Role::System.as_str(), "system");
}

// =============================================================================
// ErrorCode
// =============================================================================

#[test]
fn timeout_and_server_errors_are_retryable() {
    assert!(LlmError::Timeout("slow".into()).retryable());
    assert!(LlmError::ApiRequest("reset".into()).retryable());
    assert!(LlmError::ApiResponse { status: 503, message: String::new() }.retryable());
    assert!(LlmError::ApiResponse { status: 429, message: String::new() }.retryable());
}

#[test]
fn client_errors_are_not_retryable() {
    assert!(!LlmError::ApiResponse { status: 401, message: "bad key".into() }.retryable());
    assert!(!LlmError::ApiParse("missing".into()).retryable());
    assert!(!LlmError::MissingApiKey { var: "LLM_API_KEY".into() }.retryable());
}

#[test]
fn api_response_display_includes_message() {
    let err = LlmError::ApiResponse { status: 401, message: "Incorrect API key".into() };
    assert_eq!(err.to_string(), "API response error: status 401: Incorrect API key");
    assert_eq!(err.error_code(), "E_API_RESPONSE");
}
