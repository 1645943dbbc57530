//! OpenAI Chat Completions client implementing [`CompletionClient`].
//!
//! Uses the real Chat Completions API through `async_openai`. The API key comes from
//! `OPENAI_API_KEY` (or explicit config); `OPENAI_BASE_URL` / `OPENAI_API_BASE` select an
//! OpenAI-compatible endpoint. Non-streaming only: the pipeline waits for the whole reply.
//!
//! Request and response bodies are logged at `trace`; the API key never is.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, trace, warn};

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
        ChatCompletionRequestUserMessage, CreateChatCompletionRequestArgs,
    },
    Client,
};

use crate::error::GenerationError;
use crate::llm::{CompletionClient, CompletionReply, CompletionUsage};
use crate::message::Message;

/// OpenAI Chat Completions client.
///
/// Built once at startup and shared; holds the HTTP client, model name and sampling
/// temperature. One `invoke` is one HTTP request: the client's backoff has a zero time
/// budget, so 5xx and 429 answers surface as errors instead of being retried.
pub struct ChatOpenAI {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: Option<f32>,
}

impl ChatOpenAI {
    /// Build client with default config (API key from `OPENAI_API_KEY` env).
    pub fn new(model: impl Into<String>) -> Self {
        Self::with_config(OpenAIConfig::new(), model)
    }

    /// Build client with custom config (e.g. custom API key or base URL).
    pub fn with_config(config: OpenAIConfig, model: impl Into<String>) -> Self {
        let no_retry = backoff::ExponentialBackoffBuilder::new()
            .with_max_elapsed_time(Some(Duration::ZERO))
            .build();
        Self {
            client: Client::with_config(config).with_backoff(no_retry),
            model: model.into(),
            temperature: None,
        }
    }

    /// Build client from the process environment: `OPENAI_API_KEY`, plus `OPENAI_BASE_URL`
    /// (or `OPENAI_API_BASE`) when set and non-empty.
    pub fn from_env(model: impl Into<String>) -> Self {
        let mut config = OpenAIConfig::new();
        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            config = config.with_api_key(key);
        } else {
            warn!("OPENAI_API_KEY is not set; completion calls will fail authentication");
        }
        if let Some(base) = Self::base_url_from_env() {
            config = config.with_api_base(base);
        }
        Self::with_config(config, model)
    }

    /// Set temperature (0–2). Lower values are more deterministic.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn temperature(&self) -> Option<f32> {
        self.temperature
    }

    /// `OPENAI_BASE_URL`, else `OPENAI_API_BASE`; trimmed, trailing `/` removed. A blank
    /// value counts as unset.
    fn base_url_from_env() -> Option<String> {
        ["OPENAI_BASE_URL", "OPENAI_API_BASE"].into_iter().find_map(|key| {
            std::env::var(key)
                .ok()
                .map(|b| b.trim().trim_end_matches('/').to_string())
                .filter(|b| !b.is_empty())
        })
    }

    fn messages_to_request(messages: &[Message]) -> Vec<ChatCompletionRequestMessage> {
        messages
            .iter()
            .map(|m| match m {
                Message::System(s) => ChatCompletionRequestMessage::System(
                    ChatCompletionRequestSystemMessage::from(s.as_str()),
                ),
                Message::User(s) => ChatCompletionRequestMessage::User(
                    ChatCompletionRequestUserMessage::from(s.as_str()),
                ),
            })
            .collect()
    }
}

#[async_trait]
impl CompletionClient for ChatOpenAI {
    async fn invoke(&self, messages: &[Message]) -> Result<CompletionReply, GenerationError> {
        let trace_id = uuid::Uuid::new_v4().to_string();
        let mut args = CreateChatCompletionRequestArgs::default();
        args.model(self.model.clone());
        args.messages(Self::messages_to_request(messages));
        if let Some(t) = self.temperature {
            args.temperature(t);
        }
        let request = args
            .build()
            .map_err(|e| GenerationError::RequestBuild(e.to_string()))?;

        debug!(
            trace_id = %trace_id,
            model = %self.model,
            message_count = messages.len(),
            temperature = ?self.temperature,
            "OpenAI chat create"
        );
        if let Ok(js) = serde_json::to_string_pretty(&request) {
            trace!(trace_id = %trace_id, request = %js, "OpenAI request body");
        }

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| GenerationError::Backend(format!("OpenAI API error: {}", e)))?;

        if let Ok(js) = serde_json::to_string_pretty(&response) {
            trace!(trace_id = %trace_id, response = %js, "OpenAI response body");
        }

        let usage = response.usage.map(|u| CompletionUsage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });
        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or(GenerationError::NoChoices)?;

        Ok(CompletionReply {
            content: choice.message.content.unwrap_or_default(),
            usage,
        })
    }
}
