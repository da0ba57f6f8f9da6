//! Parser for OpenAI chat-completions style message arrays
//! (`[{"role": "user", "content": "..."}, ...]`).

use serde::Deserialize;
use serde_json::Value;

use super::ParseOutcome;
use super::deserializers::deserialize_lenient_string;
use crate::models::{Conversation, Message, Role};

const SERVICE: &str = "OpenAI API";
const TITLE: &str = "API Conversation";
const CONTENT_TYPE_TEXT: &str = "text";

#[derive(Debug, Deserialize)]
struct ApiTurn {
    #[serde(deserialize_with = "deserialize_lenient_string")]
    role: Option<String>,
    content: Value,
}

/// Extracts text from `content`, which is either a string or a list of
/// typed content parts.
fn content_text(content: &Value) -> Option<String> {
    match content {
        Value::String(s) => Some(s.clone()),
        Value::Array(parts) => {
            let texts: Vec<&str> = parts
                .iter()
                .filter(|part| {
                    part.get("type").and_then(Value::as_str).unwrap_or(CONTENT_TYPE_TEXT)
                        == CONTENT_TYPE_TEXT
                })
                .filter_map(|part| part.as_str().or_else(|| part.get("text")?.as_str()))
                .collect();
            if texts.is_empty() { None } else { Some(texts.join("\n")) }
        }
        _ => None,
    }
}

/// Parse an array of API-style turns into one synthetic conversation.
///
/// Only objects carrying both `role` and `content` are considered. Roles are
/// passed through as-is; timestamps are `now + array index`.
pub fn parse_openai_api(items: &[Value], now: f64) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();
    let conversation_id = format!("api_conv_{}", now);

    for (index, item) in items.iter().enumerate() {
        let Some(obj) = item.as_object() else { continue };
        if !(obj.contains_key("role") && obj.contains_key("content")) {
            continue;
        }

        let turn = match ApiTurn::deserialize(item) {
            Ok(turn) => turn,
            Err(e) => {
                outcome.record_failure(SERVICE, format!("turn {}", index), e.to_string());
                continue;
            }
        };

        let content = match content_text(&turn.content) {
            Some(text) if !text.trim().is_empty() => text,
            _ => {
                outcome.record_failure(
                    SERVICE,
                    format!("turn {}", index),
                    "content has no text".to_string(),
                );
                continue;
            }
        };

        outcome.messages.push(Message {
            conversation_id: conversation_id.clone(),
            conversation_title: TITLE.to_string(),
            role: Role::from(turn.role.unwrap_or_default()),
            content,
            timestamp: now + index as f64,
            service: SERVICE.to_string(),
        });
    }

    if !outcome.messages.is_empty() {
        outcome.conversations.push(Conversation {
            id: conversation_id,
            title: TITLE.to_string(),
            create_time: now,
            message_count: outcome.messages.len(),
            service: SERVICE.to_string(),
        });
    }

    outcome
}
