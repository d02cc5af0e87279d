use super::*;
use crate::chat::render::BubbleKind;
use crate::llm::Role;
use std::sync::Mutex;

// =========================================================================
// MockLlm
// =========================================================================

struct MockLlm {
    replies: Mutex<Vec<Result<Completion, LlmError>>>,
    seen: Mutex<Vec<Vec<Turn>>>,
}

impl MockLlm {
    fn new(replies: Vec<Result<Completion, LlmError>>) -> Self {
        Self { replies: Mutex::new(replies), seen: Mutex::new(Vec::new()) }
    }

    fn replying(text: &str) -> Self {
        Self::new(vec![Ok(completion(text))])
    }

    fn failing(err: LlmError) -> Self {
        Self::new(vec![Err(err)])
    }

    fn calls(&self) -> Vec<Vec<Turn>> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl CompletionClient for MockLlm {
    async fn complete(&self, messages: &[Turn]) -> Result<Completion, LlmError> {
        self.seen.lock().unwrap().push(messages.to_vec());
        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() { Ok(completion("done")) } else { replies.remove(0) }
    }
}

fn completion(text: &str) -> Completion {
    Completion { content: text.into(), model: "mock".into(), prompt_tokens: 0, completion_tokens: 0 }
}

// =========================================================================
// submit
// =========================================================================

#[tokio::test]
async fn blank_submission_changes_nothing() {
    let llm = MockLlm::replying("unused");
    let mut session = ConversationSession::new();

    for text in ["", "   ", "\n\t "] {
        let err = session.submit(&llm, text).await.unwrap_err();
        assert!(matches!(err, ChatError::EmptyInput));
    }

    assert!(session.turns().is_empty());
    assert!(session.render().is_welcome());
    assert!(llm.calls().is_empty());
}

#[tokio::test]
async fn successful_submission_appends_user_then_assistant() {
    let llm = MockLlm::replying("Hi! How can I help?");
    let mut session = ConversationSession::new();

    let reply = session.submit(&llm, "hello").await.unwrap();

    assert_eq!(reply, "Hi! How can I help?");
    assert_eq!(session.turns(), &[Turn::user("hello"), Turn::assistant("Hi! How can I help?")]);
    assert!(!session.is_pending());
    assert_eq!(session.render().count(BubbleKind::Thinking), 0);
}

#[tokio::test]
async fn request_carries_system_turn_then_full_log() {
    let llm = MockLlm::new(vec![Ok(completion("one")), Ok(completion("two"))]);
    let mut session = ConversationSession::new();

    session.submit(&llm, "first").await.unwrap();
    session.submit(&llm, "  second  ").await.unwrap();

    let calls = llm.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], vec![Turn::system(SYSTEM_PROMPT), Turn::user("first")]);
    assert_eq!(
        calls[1],
        vec![
            Turn::system(SYSTEM_PROMPT),
            Turn::user("first"),
            Turn::assistant("one"),
            Turn::user("second"),
        ]
    );
}

#[tokio::test]
async fn failed_submission_keeps_only_user_turn() {
    let llm = MockLlm::failing(LlmError::ApiResponse { status: 500, message: "boom".into() });
    let mut session = ConversationSession::new();

    let err = session.submit(&llm, "hello").await.unwrap_err();

    assert!(matches!(err, ChatError::Request(LlmError::ApiResponse { status: 500, .. })));
    assert_eq!(session.turns(), &[Turn::user("hello")]);
    let view = session.render();
    assert_eq!(view.count(BubbleKind::Error), 1);
    assert_eq!(view.count(BubbleKind::Thinking), 0);
    assert!(session.turns().iter().all(|t| t.role() != Role::Assistant));
}

#[tokio::test]
async fn failure_notice_is_not_sent_upstream() {
    let llm = MockLlm::new(vec![Err(LlmError::Timeout("slow".into())), Ok(completion("ok"))]);
    let mut session = ConversationSession::new();

    assert!(session.submit(&llm, "hello").await.is_err());
    session.submit(&llm, "again").await.unwrap();

    let second = &llm.calls()[1];
    assert!(second.iter().all(|t| t.content() != ERROR_NOTICE));
    assert_eq!(second.len(), 3);
}

// =========================================================================
// begin / complete
// =========================================================================

#[test]
fn begin_shows_thinking_indicator() {
    let mut session = ConversationSession::new();
    let request = session.begin("hello").unwrap();

    assert!(session.is_pending());
    assert_eq!(request.generation(), 0);
    assert_eq!(request.messages().len(), 2);
    assert_eq!(session.render().count(BubbleKind::Thinking), 1);
}

#[test]
fn concurrent_submission_is_rejected() {
    let mut session = ConversationSession::new();
    let _first = session.begin("one").unwrap();

    let err = session.begin("two").unwrap_err();

    assert!(matches!(err, ChatError::Busy));
    assert_eq!(session.turns(), &[Turn::user("one")]);
}

#[test]
fn failure_removes_thinking_indicator() {
    let mut session = ConversationSession::new();
    let request = session.begin("hello").unwrap();

    let outcome = session.complete(request, Err(LlmError::ApiRequest("refused".into())));

    assert!(matches!(outcome, Outcome::Failed(_)));
    assert!(!session.is_pending());
    assert_eq!(session.render().count(BubbleKind::Thinking), 0);
    assert_eq!(session.notices().len(), 1);
    assert_eq!(session.notices()[0].position, 1);
}

// =========================================================================
// reset
// =========================================================================

#[tokio::test]
async fn reset_always_yields_welcome() {
    let llm = MockLlm::new(vec![Ok(completion("a")), Err(LlmError::ApiRequest("x".into()))]);
    let mut session = ConversationSession::new();
    session.submit(&llm, "one").await.unwrap();
    let _ = session.submit(&llm, "two").await;

    session.reset();

    assert!(session.turns().is_empty());
    assert!(session.notices().is_empty());
    assert!(session.render().is_welcome());
    assert_eq!(session.generation(), 1);
}

#[test]
fn reply_after_reset_is_dropped() {
    let mut session = ConversationSession::new();
    let request = session.begin("old question").unwrap();

    session.reset();
    let outcome = session.complete(request, Ok(completion("old answer")));

    assert!(matches!(outcome, Outcome::Stale));
    assert!(session.turns().is_empty());
    assert!(session.render().is_welcome());
}

#[test]
fn failure_after_reset_adds_no_notice() {
    let mut session = ConversationSession::new();
    let request = session.begin("old question").unwrap();

    session.reset();
    let outcome = session.complete(request, Err(LlmError::Timeout("slow".into())));

    assert!(matches!(outcome, Outcome::Stale));
    assert!(session.notices().is_empty());
}

#[test]
fn new_conversation_accepted_while_stale_request_in_flight() {
    let mut session = ConversationSession::new();
    let stale = session.begin("old").unwrap();
    session.reset();

    let fresh = session.begin("new").unwrap();
    assert!(matches!(session.complete(stale, Ok(completion("old answer"))), Outcome::Stale));
    assert!(session.is_pending());

    assert!(matches!(session.complete(fresh, Ok(completion("new answer"))), Outcome::Replied(_)));
    assert_eq!(session.turns(), &[Turn::user("new"), Turn::assistant("new answer")]);
}

#[test]
fn sessions_are_independent() {
    let mut a = ConversationSession::new();
    let b = ConversationSession::new();
    let _ = a.begin("hello").unwrap();

    assert_ne!(a.id(), b.id());
    assert!(b.turns().is_empty());
    assert!(!b.is_pending());
}
