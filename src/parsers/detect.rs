//! Heuristic source-format detection.
//!
//! Detection is an ordered list of `(predicate, format)` rules; the first
//! predicate that holds wins. JSON rules look only at the first array element,
//! text rules look for speaker markers anywhere in the payload.

use serde_json::{Map, Value};

use super::Payload;
use crate::models::SourceFormat;

/// A single detection rule.
pub type DetectionRule = (fn(&Payload) -> bool, SourceFormat);

/// Rules in evaluation order.
pub const DETECTION_RULES: &[DetectionRule] = &[
    (is_chatgpt_mapping_export, SourceFormat::Chatgpt),
    (is_chatgpt_titled_export, SourceFormat::Chatgpt),
    (is_openai_api_turns, SourceFormat::OpenaiApi),
    (is_claude_transcript, SourceFormat::ClaudeText),
    (is_gemini_transcript, SourceFormat::GeminiText),
    (is_grok_transcript, SourceFormat::GrokText),
    (is_generic_chat, SourceFormat::GenericChat),
];

const GENERIC_MARKERS: &[&str] = &["user:", "assistant:", "ai:", "bot:"];

/// Classify a decoded payload. Never fails; unrecognized input is `Unknown`.
pub fn detect_format(payload: &Payload) -> SourceFormat {
    let format = DETECTION_RULES
        .iter()
        .find(|(applies, _)| applies(payload))
        .map(|(_, format)| *format)
        .unwrap_or(SourceFormat::Unknown);
    tracing::debug!(%format, "detected payload format");
    format
}

fn first_object(payload: &Payload) -> Option<&Map<String, Value>> {
    payload.as_array()?.first()?.as_object()
}

fn first_object_has(payload: &Payload, keys: [&str; 2]) -> bool {
    first_object(payload).is_some_and(|obj| keys.iter().all(|key| obj.contains_key(*key)))
}

fn text_has_all(payload: &Payload, markers: [&str; 2]) -> bool {
    payload.as_text().is_some_and(|text| markers.iter().all(|marker| text.contains(marker)))
}

fn is_chatgpt_mapping_export(payload: &Payload) -> bool {
    first_object_has(payload, ["mapping", "conversation_id"])
}

fn is_chatgpt_titled_export(payload: &Payload) -> bool {
    first_object_has(payload, ["title", "create_time"])
}

fn is_openai_api_turns(payload: &Payload) -> bool {
    first_object_has(payload, ["role", "content"])
}

fn is_claude_transcript(payload: &Payload) -> bool {
    text_has_all(payload, ["Human:", "Assistant:"])
}

fn is_gemini_transcript(payload: &Payload) -> bool {
    text_has_all(payload, ["User:", "Gemini:"])
}

fn is_grok_transcript(payload: &Payload) -> bool {
    text_has_all(payload, ["You:", "Grok:"])
}

fn is_generic_chat(payload: &Payload) -> bool {
    payload.as_text().is_some_and(|text| {
        let lower = text.to_lowercase();
        GENERIC_MARKERS.iter().any(|marker| lower.contains(marker))
    })
}
