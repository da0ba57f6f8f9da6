//! Format detection and per-service parsers for exported chat logs
//!
//! # Error Handling Strategy
//!
//! Parsers follow a **partial-failure** approach:
//!
//! - **Individual item failures**: A conversation (or API turn) that cannot be read is
//!   recorded as a [`ParseFailure`], logged with `tracing::warn!`, and skipped. The rest
//!   of the batch is still parsed.
//!
//! - **No aborts**: Parsers never return `Err`. Callers inspect the returned
//!   [`ParseOutcome`] and decide whether "no messages" is an error for them.
//!
//! - **Pure functions**: Parsers take the current time as an argument instead of reading
//!   the clock, so the same input and clock value always produce the same output.

pub mod chatgpt;
pub mod deserializers;
pub mod detect;
pub mod openai_api;
pub mod text_turns;

pub use chatgpt::parse_chatgpt_export;
pub use detect::{DETECTION_RULES, detect_format};
pub use openai_api::parse_openai_api;
pub use text_turns::{TextDialect, parse_text_turns};

use serde::Serialize;
use serde_json::Value;

use crate::models::{Conversation, Message};

/// Decoded upload payload: parsed JSON when possible, raw text otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Text(String),
}

impl Payload {
    /// Text view of the payload; a top-level JSON string counts as text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Text(text) => Some(text),
            Payload::Json(Value::String(text)) => Some(text),
            Payload::Json(_) => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Payload::Json(Value::Array(items)) => Some(items),
            _ => None,
        }
    }
}

/// One item a parser had to skip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseFailure {
    /// Which item failed, e.g. `conversation 3`
    pub item: String,
    pub reason: String,
}

/// Result of parsing one payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParseOutcome {
    pub messages: Vec<Message>,
    pub conversations: Vec<Conversation>,
    pub failures: Vec<ParseFailure>,
}

impl ParseOutcome {
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub(crate) fn record_failure(&mut self, service: &str, item: String, reason: String) {
        tracing::warn!(service, item = %item, "skipping unparseable item: {}", reason);
        self.failures.push(ParseFailure { item, reason });
    }
}
