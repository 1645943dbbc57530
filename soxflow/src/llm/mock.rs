//! Mock completion backend for tests and local runs without an API key.
//!
//! Returns a fixed reply, or a fixed [`GenerationError`], and records every call so tests
//! can assert the pipeline made exactly one outbound call with the expected messages.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::GenerationError;
use crate::llm::{CompletionClient, CompletionReply};
use crate::message::Message;

enum Outcome {
    Reply(String),
    Backend(String),
    NoChoices,
}

/// Mock backend: fixed outcome for every call.
pub struct MockCompletion {
    outcome: Outcome,
    calls: AtomicUsize,
    last_messages: Mutex<Vec<Message>>,
}

impl MockCompletion {
    fn with_outcome(outcome: Outcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            last_messages: Mutex::new(Vec::new()),
        }
    }

    /// Every call succeeds with `content`.
    pub fn with_reply(content: impl Into<String>) -> Self {
        Self::with_outcome(Outcome::Reply(content.into()))
    }

    /// Every call fails with [`GenerationError::Backend`] carrying `detail`.
    pub fn with_backend_error(detail: impl Into<String>) -> Self {
        Self::with_outcome(Outcome::Backend(detail.into()))
    }

    /// Every call fails with [`GenerationError::NoChoices`].
    pub fn with_no_choices() -> Self {
        Self::with_outcome(Outcome::NoChoices)
    }

    /// Number of `invoke` calls so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Messages passed to the most recent `invoke`; empty before the first call.
    pub fn last_messages(&self) -> Vec<Message> {
        self.last_messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl CompletionClient for MockCompletion {
    async fn invoke(&self, messages: &[Message]) -> Result<CompletionReply, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_messages.lock() {
            *last = messages.to_vec();
        }
        match &self.outcome {
            Outcome::Reply(content) => Ok(CompletionReply::new(content.clone())),
            Outcome::Backend(detail) => Err(GenerationError::Backend(detail.clone())),
            Outcome::NoChoices => Err(GenerationError::NoChoices),
        }
    }
}
