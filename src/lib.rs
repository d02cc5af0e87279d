//! chatdesk: a chat-completion conversation session and a people directory.

pub mod chat;
pub mod directory;
pub mod error;
pub mod llm;

pub use error::ErrorCode;
