//! Conversation session: ordered turn log plus one request at a time.

use tracing::{debug, info, warn};
use uuid::Uuid;

use super::ChatError;
use super::render::{self, ChatView};
use crate::llm::{Completion, CompletionClient, LlmError, SYSTEM_PROMPT, Turn};

/// Text of the notice shown when a submission fails.
pub const ERROR_NOTICE: &str = "Sorry, I encountered an error. Please try again.";

/// A user-visible notice rendered into the conversation but never sent
/// upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Number of log turns that precede this notice.
    pub position: usize,
    pub text: String,
}

/// A request issued by [`ConversationSession::begin`], waiting for its reply.
#[derive(Debug, Clone)]
pub struct PendingRequest {
    generation: u64,
    messages: Vec<Turn>,
}

impl PendingRequest {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Full message list: system turn first, then the log at issue time.
    #[must_use]
    pub fn messages(&self) -> &[Turn] {
        &self.messages
    }
}

/// What [`ConversationSession::complete`] did with a reply.
#[derive(Debug)]
pub enum Outcome {
    /// An assistant turn with this content was appended.
    Replied(String),
    /// The request failed; an error notice was attached to the view.
    Failed(LlmError),
    /// The session was reset after the request was issued; nothing changed.
    Stale,
}

/// Ordered, append-only conversation log for one chat session.
#[derive(Debug)]
pub struct ConversationSession {
    id: Uuid,
    log: Vec<Turn>,
    generation: u64,
    pending: bool,
    notices: Vec<Notice>,
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationSession {
    #[must_use]
    pub fn new() -> Self {
        Self { id: Uuid::new_v4(), log: Vec::new(), generation: 0, pending: false, notices: Vec::new() }
    }

    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.log
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    #[must_use]
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Append the user turn and build the request for it.
    ///
    /// # Errors
    ///
    /// [`ChatError::EmptyInput`] for blank text, [`ChatError::Busy`] while a
    /// request of the current generation is outstanding. Neither changes
    /// any state.
    pub fn begin(&mut self, text: &str) -> Result<PendingRequest, ChatError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ChatError::EmptyInput);
        }
        if self.pending {
            return Err(ChatError::Busy);
        }

        self.log.push(Turn::user(text));
        self.pending = true;

        let mut messages = Vec::with_capacity(self.log.len() + 1);
        messages.push(Turn::system(SYSTEM_PROMPT));
        messages.extend(self.log.iter().cloned());

        debug!(session_id = %self.id, generation = self.generation, turns = self.log.len(), "chat request issued");
        Ok(PendingRequest { generation: self.generation, messages })
    }

    /// Apply the reply for `request`, unless the session was reset since.
    pub fn complete(&mut self, request: PendingRequest, result: Result<Completion, LlmError>) -> Outcome {
        if request.generation != self.generation || !self.pending {
            debug!(
                session_id = %self.id,
                request_generation = request.generation,
                generation = self.generation,
                "dropping stale chat reply"
            );
            return Outcome::Stale;
        }

        self.pending = false;
        match result {
            Ok(completion) => {
                self.log.push(Turn::assistant(completion.content.clone()));
                Outcome::Replied(completion.content)
            }
            Err(e) => {
                warn!(session_id = %self.id, error = %e, "chat request failed");
                self.notices.push(Notice { position: self.log.len(), text: ERROR_NOTICE.to_string() });
                Outcome::Failed(e)
            }
        }
    }

    /// Run one full request/response cycle against `client`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::EmptyInput`] / [`ChatError::Busy`] from
    /// [`begin`](Self::begin), or [`ChatError::Request`] when the completion
    /// call fails. On failure the log keeps only the user turn.
    pub async fn submit<C>(&mut self, client: &C, text: &str) -> Result<String, ChatError>
    where
        C: CompletionClient + ?Sized,
    {
        let request = self.begin(text)?;
        let result = client.complete(request.messages()).await;
        match self.complete(request, result) {
            Outcome::Replied(content) => Ok(content),
            Outcome::Failed(e) => Err(ChatError::Request(e)),
            Outcome::Stale => Err(ChatError::Stale),
        }
    }

    /// Start a new chat: clear the log, notices and pending indicator.
    ///
    /// In-flight requests are not cancelled; their replies come back as
    /// [`Outcome::Stale`].
    pub fn reset(&mut self) {
        self.log.clear();
        self.notices.clear();
        self.pending = false;
        self.generation += 1;
        info!(session_id = %self.id, generation = self.generation, "chat reset");
    }

    #[must_use]
    pub fn render(&self) -> ChatView {
        render::render(&self.log, self.pending, &self.notices)
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
