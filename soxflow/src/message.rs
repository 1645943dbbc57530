//! Chat message types sent to the completion backend.
//!
//! One generation request is a two-message exchange: the audit-assistant persona as
//! [`Message::System`], then the rendered control prompt as [`Message::User`].

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Message {
    /// System persona; placed first.
    System(String),
    /// User prompt.
    User(String),
}

impl Message {
    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::System(content.into())
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::User(content.into())
    }

    /// Message text regardless of role.
    pub fn content(&self) -> &str {
        match self {
            Self::System(s) | Self::User(s) => s,
        }
    }
}
