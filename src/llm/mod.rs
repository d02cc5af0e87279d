//! LLM: chat completion adapter for the conversation session.
//!
//! DESIGN
//! ======
//! One provider shape: OpenAI-compatible `/chat/completions`. The session
//! only sees the [`CompletionClient`] trait, so tests swap in a mock and the
//! credential arrives through [`LlmConfig`] instead of a global.

pub mod config;
pub mod openai;
pub mod types;

pub use config::LlmConfig;
pub use openai::OpenAiClient;
pub use types::{Completion, CompletionClient, LlmError, Role, Turn};

/// Fixed system instruction sent ahead of every conversation.
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";
