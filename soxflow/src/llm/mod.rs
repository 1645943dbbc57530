//! Completion backend abstraction.
//!
//! The pipeline depends on a [`CompletionClient`] that turns a message list into one reply
//! text. Implementations: [`ChatOpenAI`] (OpenAI-compatible Chat Completions API) and
//! [`MockCompletion`] (fixed reply or fixed failure, for tests).
//!
//! Clients are built once at startup and shared behind an `Arc`; `invoke` takes `&self`
//! and holds no per-request state, so concurrent requests do not interact.

mod mock;
mod openai;

pub use mock::MockCompletion;
pub use openai::ChatOpenAI;

use async_trait::async_trait;

use crate::error::GenerationError;
use crate::message::Message;

/// Token usage for one completion call, when the backend reports it.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CompletionUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Raw reply for one completion call. Scoped to a single request; parsed, then dropped.
#[derive(Clone, Debug, Default)]
pub struct CompletionReply {
    /// Assistant message text; empty when the backend returned no content.
    pub content: String,
    pub usage: Option<CompletionUsage>,
}

impl CompletionReply {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            usage: None,
        }
    }
}

/// Completion backend: given messages, returns one reply text.
///
/// One `invoke` is exactly one outbound call; implementations do not retry or cache.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Sends `messages` and waits for the complete reply.
    async fn invoke(&self, messages: &[Message]) -> Result<CompletionReply, GenerationError>;
}
