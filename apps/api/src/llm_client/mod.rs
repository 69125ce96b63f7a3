/// Completion client — the single point of entry for completion-API calls.
///
/// ARCHITECTURAL RULE: No other module may call the completion API directly.
/// Handlers depend on the `CompletionBackend` trait carried in `AppState`.
///
/// Sampling parameters are hardcoded so every deployment answers with the
/// same voice; only the model identifier and endpoint come from configuration.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

use crate::config::Config;
use prompts::ASSISTANT_SYSTEM_PROMPT;

const TEMPERATURE: f64 = 0.7;
const TOP_P: f64 = 0.9;
const MAX_TOKENS: u32 = 300;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Model returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    temperature: f64,
    top_p: f64,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
    usage: Option<WireUsage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireUsage {
    total_tokens: u32,
}

/// A finished completion, reduced to what handlers need.
#[derive(Debug, Clone)]
pub struct Completion {
    pub text: String,
    pub model: String,
    pub total_tokens: Option<u32>,
}

/// The completion seam. Production wires in `HttpCompletionClient`; tests
/// substitute a scripted backend.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, message: &str) -> Result<Completion, CompletionError>;
}

/// reqwest-backed client for an OpenAI-compatible chat-completions API.
#[derive(Clone)]
pub struct HttpCompletionClient {
    client: Client,
    api_url: String,
    api_token: String,
    model: String,
}

impl HttpCompletionClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            api_url: config.completion_api_url.clone(),
            api_token: config.completion_api_token.clone(),
            model: config.completion_model.clone(),
        }
    }
}

#[async_trait]
impl CompletionBackend for HttpCompletionClient {
    /// Sends the fixed system prompt plus the user message as a two-message
    /// exchange. Prior turns are never forwarded, so the model sees each
    /// request in isolation. Exactly one attempt per call — no retry, no
    /// backoff; the caller converts every failure into the support fallback.
    async fn complete(&self, message: &str) -> Result<Completion, CompletionError> {
        let request_body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                WireMessage {
                    role: "system",
                    content: ASSISTANT_SYSTEM_PROMPT,
                },
                WireMessage {
                    role: "user",
                    content: message,
                },
            ],
            temperature: TEMPERATURE,
            top_p: TOP_P,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_url))
            .bearer_auth(&self.api_token)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CompletionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;

        if let Some(usage) = &completion.usage {
            debug!("Completion succeeded: total_tokens={}", usage.total_tokens);
        }

        let text = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.is_empty())
            .ok_or(CompletionError::EmptyContent)?;

        Ok(Completion {
            text,
            model: self.model.clone(),
            total_tokens: completion.usage.map(|u| u.total_tokens),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Result<(String, Option<u32>), CompletionError> {
        let completion: ChatCompletionResponse = serde_json::from_str(body).unwrap();
        let tokens = completion.usage.as_ref().map(|u| u.total_tokens);
        let text = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.is_empty())
            .ok_or(CompletionError::EmptyContent)?;
        Ok((text, tokens))
    }

    #[test]
    fn test_response_with_content_and_usage() {
        let body = r#"{
            "choices": [{"message": {"content": "Hello from YoGig"}}],
            "usage": {"total_tokens": 57}
        }"#;
        let (text, tokens) = parse(body).unwrap();
        assert_eq!(text, "Hello from YoGig");
        assert_eq!(tokens, Some(57));
    }

    #[test]
    fn test_response_without_usage_still_parses() {
        let body = r#"{"choices": [{"message": {"content": "hi"}}]}"#;
        let (text, tokens) = parse(body).unwrap();
        assert_eq!(text, "hi");
        assert_eq!(tokens, None);
    }

    #[test]
    fn test_empty_choices_is_empty_content() {
        let body = r#"{"choices": []}"#;
        assert!(matches!(parse(body), Err(CompletionError::EmptyContent)));
    }

    #[test]
    fn test_null_content_is_empty_content() {
        let body = r#"{"choices": [{"message": {"content": null}}]}"#;
        assert!(matches!(parse(body), Err(CompletionError::EmptyContent)));
    }

    #[test]
    fn test_blank_content_is_empty_content() {
        let body = r#"{"choices": [{"message": {"content": ""}}]}"#;
        assert!(matches!(parse(body), Err(CompletionError::EmptyContent)));
    }

    #[test]
    fn test_request_serializes_fixed_sampling_params() {
        let request = ChatCompletionRequest {
            model: "openai/gpt-4.1",
            messages: vec![WireMessage {
                role: "user",
                content: "hi",
            }],
            temperature: TEMPERATURE,
            top_p: TOP_P,
            max_tokens: MAX_TOKENS,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["temperature"], 0.7);
        assert_eq!(value["top_p"], 0.9);
        assert_eq!(value["max_tokens"], 300);
    }
}
