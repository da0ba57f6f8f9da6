use std::fmt;

use serde::{Deserialize, Serialize};

/// Speaker of a canonical message.
///
/// Parsers for structured exports only ever produce [`Role::User`] or
/// [`Role::Assistant`]; the OpenAI API format passes its roles through, so
/// anything else (e.g. `system`, `tool`) is kept verbatim in [`Role::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    User,
    Assistant,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::Other(role) => role,
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_str() {
            "user" => Role::User,
            "assistant" => Role::Assistant,
            _ => Role::Other(value),
        }
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        Role::from(value.to_string())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(role) => role,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical message produced by every parser.
///
/// `content` is never empty or whitespace-only; parsers drop such turns
/// before they reach the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub conversation_id: String,
    pub conversation_title: String,
    pub role: Role,
    pub content: String,
    /// Seconds since the Unix epoch, fractional part allowed
    pub timestamp: f64,
    /// Display name of the source service (e.g. "ChatGPT")
    pub service: String,
}

/// Canonical conversation record.
///
/// Only materialized when at least one [`Message`] was produced for it, and
/// `message_count` always equals the number of messages carrying its id in
/// the batch that created it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub title: String,
    pub create_time: f64,
    pub message_count: usize,
    pub service: String,
}
