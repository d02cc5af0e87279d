//! LLM types: conversation turns, completion results and the client error.
//!
//! Provider-neutral types shared by the completion client and the chat
//! session. A [`Turn`] is exactly the `{role, content}` pair that goes on the
//! wire.

use serde::{Deserialize, Serialize};

use crate::error::ErrorCode;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by completion client operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The required API key environment variable is not set.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// The HTTP request to the completion endpoint failed.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The completion endpoint did not answer within the request timeout.
    #[error("API request timed out: {0}")]
    Timeout(String),

    /// The completion endpoint returned a non-success HTTP status.
    #[error("API response error: status {status}: {message}")]
    ApiResponse { status: u16, message: String },

    /// The completion response body could not be interpreted.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl ErrorCode for LlmError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigParse(_) => "E_CONFIG_PARSE",
            Self::MissingApiKey { .. } => "E_MISSING_API_KEY",
            Self::ApiRequest(_) => "E_API_REQUEST",
            Self::Timeout(_) => "E_API_TIMEOUT",
            Self::ApiResponse { .. } => "E_API_RESPONSE",
            Self::ApiParse(_) => "E_API_PARSE",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
        }
    }

    fn retryable(&self) -> bool {
        matches!(
            self,
            Self::ApiRequest(_) | Self::Timeout(_) | Self::ApiResponse { status: 429 | 500..=599, .. }
        )
    }
}

// =============================================================================
// TURNS
// =============================================================================

/// Author of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::System => "system",
        }
    }
}

/// One message exchanged in a conversation, tagged with its author role.
///
/// Fields are private so a turn cannot change after it is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    role: Role,
    content: String,
}

impl Turn {
    #[must_use]
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self { role, content: content.into() }
    }

    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

// =============================================================================
// COMPLETION
// =============================================================================

/// Result of one successful completion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// The reply text, `choices[0].message.content`.
    pub content: String,
    /// Model name echoed by the provider; empty when absent.
    pub model: String,
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
}

// =============================================================================
// COMPLETION CLIENT TRAIT
// =============================================================================

/// Provider-neutral async trait for chat completion. Enables mocking in tests.
#[async_trait::async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send the full message list (system turn first) and return the reply.
    ///
    /// # Errors
    ///
    /// Returns an [`LlmError`] if the request fails, times out, the endpoint
    /// answers with a non-success status, or the body is malformed.
    async fn complete(&self, messages: &[Turn]) -> Result<Completion, LlmError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
