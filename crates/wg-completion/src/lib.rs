//! # wg-completion
//!
//! Client for the external chat-completion API used for grading, synonyms,
//! word analysis, and the HTTP proxy route.
//!
//! Requests are `{model, messages:[system, user], max_tokens, temperature}`
//! posted with bearer auth to `{base_url}/chat/completions`. The generated
//! text is read from `choices[0].message.content`; a response without it is
//! "no result", not an error.

mod error;
mod http;
#[cfg(feature = "test-support")]
mod scripted;

pub use error::CompletionError;
#[cfg(feature = "test-support")]
pub use scripted::{Reply, ScriptedCompleter};

use std::future::Future;
use std::time::Duration;

use serde::Serialize;
use serde_json::Value;
use wg_config::CompletionConfig;

use crate::http::check_response;

/// Anything that can answer a single-prompt completion.
///
/// Implemented by [`CompletionClient`]; grading and the proxy route are
/// written against this trait so they can run without a network.
pub trait Completer: Send + Sync {
    /// Send `prompt` and return the raw JSON payload.
    fn complete_raw(&self, prompt: &str) -> impl Future<Output = Result<Value, CompletionError>> + Send;

    /// Send `prompt` and return the generated text, if any.
    fn complete(&self, prompt: &str) -> impl Future<Output = Result<Option<String>, CompletionError>> + Send {
        async move {
            let payload = self.complete_raw(prompt).await?;
            Ok(extract_content(&payload))
        }
    }
}

/// `choices[0].message.content` of a completion payload.
#[must_use]
pub fn extract_content(payload: &Value) -> Option<String> {
    payload
        .get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()
        .map(str::to_string)
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

/// HTTP client for the chat-completion endpoint.
#[derive(Clone)]
pub struct CompletionClient {
    http: reqwest::Client,
    config: CompletionConfig,
}

impl CompletionClient {
    /// Build a client from the completion config section.
    ///
    /// A missing API key is not rejected here; each request fails with
    /// [`CompletionError::MissingCredential`] instead, so read-only commands
    /// still work without one.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(config: &CompletionConfig) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent(concat!("wordgrid/", env!("CARGO_PKG_VERSION")))
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .expect("reqwest client should build"),
            config: config.clone(),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &CompletionConfig {
        &self.config
    }

    fn request_body<'a>(&'a self, prompt: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.config.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &self.config.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        }
    }
}

impl Completer for CompletionClient {
    async fn complete_raw(&self, prompt: &str) -> Result<Value, CompletionError> {
        if !self.config.is_configured() {
            return Err(CompletionError::MissingCredential);
        }
        let endpoint = self.config.endpoint();
        tracing::debug!(model = %self.config.model, prompt_len = prompt.len(), "completion request");

        let resp = self
            .http
            .post(&endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&self.request_body(prompt))
            .send()
            .await?;
        let resp = check_response(resp).await?;

        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| CompletionError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn content_is_read_from_first_choice() {
        let payload = json!({
            "choices": [
                { "message": { "role": "assistant", "content": "82" } },
                { "message": { "role": "assistant", "content": "11" } }
            ]
        });
        assert_eq!(extract_content(&payload).as_deref(), Some("82"));
    }

    #[test]
    fn missing_choices_is_no_result() {
        assert_eq!(extract_content(&json!({ "id": "x" })), None);
        assert_eq!(extract_content(&json!({ "choices": [] })), None);
    }

    #[test]
    fn request_body_carries_config() {
        let client = CompletionClient::new(&CompletionConfig::default());
        let body = serde_json::to_value(client.request_body("Grade this")).unwrap();
        assert_eq!(
            body,
            json!({
                "model": "gpt-4",
                "messages": [
                    { "role": "system", "content": "You are a helpful assistant." },
                    { "role": "user", "content": "Grade this" }
                ],
                "max_tokens": 300,
                "temperature": 0.7_f32
            })
        );
    }

    #[tokio::test]
    async fn missing_key_fails_before_any_request() {
        let client = CompletionClient::new(&CompletionConfig::default());
        let err = client.complete_raw("hi").await.unwrap_err();
        assert!(matches!(err, CompletionError::MissingCredential));
    }

    #[tokio::test]
    #[ignore] // requires network
    async fn live_completion_returns_text() {
        let config = CompletionConfig {
            api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
            ..CompletionConfig::default()
        };
        let client = CompletionClient::new(&config);
        let text = client.complete("Reply with the single word: pong").await.unwrap();
        assert!(text.is_some());
    }
}
