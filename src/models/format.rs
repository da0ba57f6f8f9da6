use std::fmt;

use serde::{Deserialize, Serialize};

/// Source-service format tag assigned by the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceFormat {
    Chatgpt,
    OpenaiApi,
    ClaudeText,
    GeminiText,
    GrokText,
    GenericChat,
    Unknown,
}

impl SourceFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            SourceFormat::Chatgpt => "chatgpt",
            SourceFormat::OpenaiApi => "openai_api",
            SourceFormat::ClaudeText => "claude_text",
            SourceFormat::GeminiText => "gemini_text",
            SourceFormat::GrokText => "grok_text",
            SourceFormat::GenericChat => "generic_chat",
            SourceFormat::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entry of the supported-service catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub formats: &'static [&'static str],
}

/// Services whose exports can be ingested, in display order.
pub const SUPPORTED_SERVICES: &[ServiceInfo] = &[
    ServiceInfo { id: "chatgpt", name: "ChatGPT", formats: &["JSON"] },
    ServiceInfo { id: "claude", name: "Claude", formats: &["Text"] },
    ServiceInfo { id: "gemini", name: "Gemini", formats: &["Text"] },
    ServiceInfo { id: "grok", name: "Grok", formats: &["Text"] },
    ServiceInfo { id: "openai_api", name: "OpenAI API", formats: &["JSON"] },
];

/// Static catalog of supported services.
pub fn supported_services() -> &'static [ServiceInfo] {
    SUPPORTED_SERVICES
}
