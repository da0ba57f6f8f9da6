//! Parser for ChatGPT's `conversations.json` export.
//!
//! Each conversation carries a `mapping` of message nodes keyed by node id.
//! Nodes are read in document order; system/tool nodes are attributed to the
//! assistant, and nodes without text content are skipped.

use serde::Deserialize;
use serde_json::Value;

use super::ParseOutcome;
use super::deserializers::{
    deserialize_epoch_seconds, deserialize_lenient_string, deserialize_ordered_values,
};
use crate::models::{Conversation, Message, Role};

const SERVICE: &str = "ChatGPT";
const DEFAULT_TITLE: &str = "Untitled Conversation";

#[derive(Debug, Deserialize)]
struct ExportConversation {
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    conversation_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_epoch_seconds")]
    create_time: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_ordered_values")]
    mapping: Vec<MappingNode>,
}

#[derive(Debug, Deserialize)]
struct MappingNode {
    #[serde(default)]
    message: Option<ExportMessage>,
}

#[derive(Debug, Deserialize)]
struct ExportMessage {
    #[serde(default)]
    author: Option<ExportAuthor>,
    #[serde(default)]
    content: Option<ExportContent>,
    #[serde(default, deserialize_with = "deserialize_epoch_seconds")]
    create_time: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ExportAuthor {
    #[serde(default)]
    role: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ExportContent {
    #[serde(default)]
    parts: Value,
}

/// Joins the textual parts of a message; `None` when there are no parts.
///
/// List parts that are not strings (image pointers, attachments) are ignored.
fn parts_text(parts: &Value) -> Option<String> {
    match parts {
        Value::Array(items) if items.is_empty() => None,
        Value::Array(items) => {
            Some(items.iter().filter_map(Value::as_str).collect::<Vec<_>>().join(" "))
        }
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Object(_) => None,
    }
}

fn map_role(author: Option<&ExportAuthor>) -> Role {
    match author.and_then(|a| a.role.as_deref()) {
        Some("user") => Role::User,
        _ => Role::Assistant,
    }
}

/// Parse a ChatGPT export (a JSON array of conversations).
///
/// Conversations are keyed by `id`, then `conversation_id`; without either
/// they get `conv_<now>_<n>`, `n` counting the conversations kept so far.
///
/// A conversation that fails to deserialize is recorded in
/// [`ParseOutcome::failures`] and skipped; conversations without any
/// text message produce no record.
pub fn parse_chatgpt_export(items: &[Value], now: f64) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();

    for (index, item) in items.iter().enumerate() {
        if !item.is_object() {
            outcome.record_failure(
                SERVICE,
                format!("conversation {}", index),
                "expected a JSON object".to_string(),
            );
            continue;
        }

        let conversation = match ExportConversation::deserialize(item) {
            Ok(conversation) => conversation,
            Err(e) => {
                outcome.record_failure(SERVICE, format!("conversation {}", index), e.to_string());
                continue;
            }
        };

        let id = conversation
            .id
            .or(conversation.conversation_id)
            .unwrap_or_else(|| format!("conv_{}_{}", now, outcome.conversations.len()));
        let title = conversation.title.unwrap_or_else(|| DEFAULT_TITLE.to_string());
        let create_time = conversation.create_time.unwrap_or(now);

        let mut kept = 0;
        for node in conversation.mapping {
            let Some(message) = node.message else { continue };
            let Some(text) = message.content.as_ref().and_then(|c| parts_text(&c.parts)) else {
                continue;
            };
            if text.trim().is_empty() {
                continue;
            }

            outcome.messages.push(Message {
                conversation_id: id.clone(),
                conversation_title: title.clone(),
                role: map_role(message.author.as_ref()),
                content: text,
                timestamp: message.create_time.unwrap_or(create_time),
                service: SERVICE.to_string(),
            });
            kept += 1;
        }

        if kept > 0 {
            outcome.conversations.push(Conversation {
                id,
                title,
                create_time,
                message_count: kept,
                service: SERVICE.to_string(),
            });
        }
    }

    outcome
}
