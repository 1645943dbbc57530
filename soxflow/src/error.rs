//! Generation error types.
//!
//! Returned by [`CompletionClient::invoke`](crate::CompletionClient::invoke) and
//! [`DocGenerator::generate`](crate::DocGenerator::generate) when the completion backend
//! could not produce a reply. An unparseable reply is **not** an error: it resolves to an
//! empty [`GeneratedDocs`](crate::GeneratedDocs).

use std::time::Duration;

use thiserror::Error;

/// Completion backend failure for one generation request.
///
/// Each variant carries the backend's detail so callers can log it or surface it.
/// None of them carry the API key.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The chat-completion request could not be assembled.
    #[error("completion request build failed: {0}")]
    RequestBuild(String),

    /// Network, authentication, quota or protocol error reported by the backend client.
    #[error("completion backend error: {0}")]
    Backend(String),

    /// The backend answered but the response held no choices.
    #[error("completion backend returned no choices")]
    NoChoices,

    /// The call did not resolve within the transport's bound.
    #[error("completion timed out after {0:?}")]
    Timeout(Duration),
}
