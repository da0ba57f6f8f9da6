//! Line-oriented parser for plain-text transcripts (`Human: ...` / `Assistant: ...`).

use super::ParseOutcome;
use crate::models::{Conversation, Message, Role};

/// Speaker prefixes and service name for one text transcript flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextDialect {
    pub service: &'static str,
    pub user_prefix: &'static str,
    pub assistant_prefix: &'static str,
}

impl TextDialect {
    pub const CLAUDE: Self =
        Self { service: "Claude", user_prefix: "Human:", assistant_prefix: "Assistant:" };
    pub const GEMINI: Self =
        Self { service: "Gemini", user_prefix: "User:", assistant_prefix: "Gemini:" };
    pub const GROK: Self = Self { service: "Grok", user_prefix: "You:", assistant_prefix: "Grok:" };
    pub const GENERIC: Self =
        Self { service: "Generic Chat", user_prefix: "User:", assistant_prefix: "Assistant:" };
    /// Last-resort dialect for text the detector could not classify
    pub const FALLBACK: Self =
        Self { service: "Unknown Service", user_prefix: "User:", assistant_prefix: "Assistant:" };
}

/// Turn currently being accumulated.
struct OpenTurn {
    role: Role,
    lines: Vec<String>,
}

/// Split a transcript into turns.
///
/// A line starting with a speaker prefix opens a new turn seeded with the rest
/// of the line; other non-blank lines continue the open turn. Lines before the
/// first prefix are dropped. All turns share one synthetic conversation, and
/// timestamps are `now + index` so they increase strictly in emission order.
pub fn parse_text_turns(text: &str, dialect: &TextDialect, now: f64) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();
    let conversation_id = format!("{}_conv_{}", dialect.service.to_lowercase(), now);
    let title = format!("{} Conversation", dialect.service);

    let flush = |turn: Option<OpenTurn>, messages: &mut Vec<Message>| {
        let Some(turn) = turn else { return };
        let content = turn.lines.join(" ").trim().to_string();
        if content.is_empty() {
            return;
        }
        messages.push(Message {
            conversation_id: conversation_id.clone(),
            conversation_title: title.clone(),
            role: turn.role,
            content,
            timestamp: now + messages.len() as f64,
            service: dialect.service.to_string(),
        });
    };

    let mut current: Option<OpenTurn> = None;
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix(dialect.user_prefix) {
            flush(current.take(), &mut outcome.messages);
            current = Some(OpenTurn { role: Role::User, lines: vec![rest.trim().to_string()] });
        } else if let Some(rest) = line.strip_prefix(dialect.assistant_prefix) {
            flush(current.take(), &mut outcome.messages);
            current =
                Some(OpenTurn { role: Role::Assistant, lines: vec![rest.trim().to_string()] });
        } else if let Some(turn) = current.as_mut() {
            turn.lines.push(line.to_string());
        }
    }
    flush(current.take(), &mut outcome.messages);

    if !outcome.messages.is_empty() {
        outcome.conversations.push(Conversation {
            id: conversation_id,
            title,
            create_time: now,
            message_count: outcome.messages.len(),
            service: dialect.service.to_string(),
        });
    }

    outcome
}
