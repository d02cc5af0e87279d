//! Chat: conversation session and its pure render.
//!
//! DESIGN
//! ======
//! A [`ConversationSession`] owns the ordered turn log. One submission is one
//! request/response cycle; every request is tagged with the session
//! generation at the time it was issued, and `reset()` bumps the generation
//! so a reply that lands afterwards is dropped instead of leaking into the
//! fresh conversation.
//!
//! Rendering is a pure function of (log, pending, notices). Front-ends diff
//! or redraw as they like; nothing here touches a terminal or a DOM.

pub mod render;
pub mod session;

pub use render::{Bubble, BubbleKind, ChatView, Sender, render};
pub use session::{ConversationSession, Notice, Outcome, PendingRequest};

use crate::error::ErrorCode;
use crate::llm::LlmError;

/// Errors surfaced by a conversation session.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// Blank or whitespace-only submission. Callers ignore it silently.
    #[error("message cannot be empty")]
    EmptyInput,

    /// A request for the current conversation is still in flight.
    #[error("a reply is still pending")]
    Busy,

    /// The reply belongs to a conversation that has since been reset.
    #[error("reply arrived after the conversation was reset")]
    Stale,

    /// The completion request failed; the user may resubmit.
    #[error("completion request failed: {0}")]
    Request(#[from] LlmError),
}

impl ErrorCode for ChatError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyInput => "E_EMPTY_INPUT",
            Self::Busy => "E_BUSY",
            Self::Stale => "E_STALE",
            Self::Request(e) => e.error_code(),
        }
    }

    fn retryable(&self) -> bool {
        match self {
            Self::Busy => true,
            Self::Request(e) => e.retryable(),
            Self::EmptyInput | Self::Stale => false,
        }
    }
}
