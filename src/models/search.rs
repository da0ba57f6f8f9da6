use serde::{Deserialize, Serialize};

use super::corpus::Counters;
use super::message::Message;

/// Filter value that disables a filter.
pub const FILTER_ALL: &str = "all";

fn filter_all() -> String {
    FILTER_ALL.to_string()
}

/// Search request as accepted from callers.
///
/// Filters default to `"all"` when omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
    /// Accepted for compatibility but not applied
    #[serde(default = "filter_all")]
    pub date_filter: String,
    #[serde(default = "filter_all")]
    pub speaker_filter: String,
    #[serde(default = "filter_all")]
    pub service_filter: String,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            date_filter: filter_all(),
            speaker_filter: filter_all(),
            service_filter: filter_all(),
        }
    }

    pub fn speaker(mut self, speaker: impl Into<String>) -> Self {
        self.speaker_filter = speaker.into();
        self
    }

    pub fn service(mut self, service: impl Into<String>) -> Self {
        self.service_filter = service.into();
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date_filter = date.into();
        self
    }
}

/// A matching message with its highlighted content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(flatten)]
    pub message: Message,
    pub highlighted_content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchHit>,
    pub total: usize,
    pub query: String,
    pub stats: Counters,
}
