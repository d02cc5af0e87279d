//! OpenAI-compatible chat completions client.
//!
//! Posts `{ model, messages }` to `{base_url}/chat/completions` with a bearer
//! credential and reads `choices[0].message.content` from the reply.

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use super::config::{LlmConfig, LlmTimeouts};
use super::types::{Completion, CompletionClient, LlmError, Turn};

/// Message used when an error response carries no `error.message`.
pub const GENERIC_FAILURE_MESSAGE: &str = "failed to get response from completion API";

pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiClient {
    /// Build a client with the given timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(api_key: String, model: String, base_url: String, timeouts: LlmTimeouts) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        let base_url = base_url.trim_end_matches('/').to_string();
        Ok(Self { http, api_key, base_url, model })
    }

    /// Build a client from parsed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_config(config: LlmConfig) -> Result<Self, LlmError> {
        Self::new(config.api_key, config.model, config.base_url, config.timeouts)
    }

    /// Return the configured model name (e.g. `"gpt-3.5-turbo"`).
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    async fn send_json(&self, path: &str, body: &impl Serialize) -> Result<String, LlmError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        let text = response.text().await.map_err(classify_transport_error)?;
        if !status.is_success() {
            return Err(LlmError::ApiResponse { status: status.as_u16(), message: parse_error_message(&text) });
        }
        Ok(text)
    }
}

#[async_trait::async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, messages: &[Turn]) -> Result<Completion, LlmError> {
        let body = CcRequest { model: &self.model, messages };
        tracing::debug!(model = %self.model, messages = messages.len(), "sending chat completion request");
        let text = self.send_json("/chat/completions", &body).await?;
        let completion = parse_chat_completions_response(&text)?;
        tracing::debug!(
            model = %completion.model,
            prompt_tokens = completion.prompt_tokens,
            completion_tokens = completion.completion_tokens,
            "chat completion received"
        );
        Ok(completion)
    }
}

fn classify_transport_error(err: reqwest::Error) -> LlmError {
    if err.is_timeout() { LlmError::Timeout(err.to_string()) } else { LlmError::ApiRequest(err.to_string()) }
}

// =============================================================================
// CHAT COMPLETIONS WIRE TYPES
// =============================================================================

#[derive(Serialize)]
struct CcRequest<'a> {
    model: &'a str,
    messages: &'a [Turn],
}

pub(crate) fn parse_chat_completions_response(json_text: &str) -> Result<Completion, LlmError> {
    let root: Value = serde_json::from_str(json_text).map_err(|e| LlmError::ApiParse(e.to_string()))?;
    let model = root
        .get("model")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_default();
    let prompt_tokens = root
        .get("usage")
        .and_then(|u| u.get("prompt_tokens"))
        .and_then(Value::as_u64)
        .unwrap_or(0);
    let completion_tokens = root
        .get("usage")
        .and_then(|u| u.get("completion_tokens"))
        .and_then(Value::as_u64)
        .unwrap_or(0);

    let Some(choice) = root
        .get("choices")
        .and_then(Value::as_array)
        .and_then(|arr| arr.first())
    else {
        return Err(LlmError::ApiParse("chat_completions: missing choices[0]".to_string()));
    };
    let Some(content) = choice
        .get("message")
        .and_then(|m| m.get("content"))
        .and_then(Value::as_str)
    else {
        return Err(LlmError::ApiParse("chat_completions: missing choices[0].message.content".to_string()));
    };

    Ok(Completion { content: content.to_string(), model, prompt_tokens, completion_tokens })
}

/// Pull `error.message` out of an error envelope, falling back to a generic
/// message for empty, non-JSON or differently shaped bodies.
pub(crate) fn parse_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|root| {
            root.get("error")
                .and_then(|e| e.get("message"))
                .and_then(Value::as_str)
                .filter(|m| !m.is_empty())
                .map(str::to_owned)
        })
        .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string())
}

#[cfg(test)]
#[path = "openai_test.rs"]
mod tests;
