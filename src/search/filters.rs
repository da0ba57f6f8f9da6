use crate::models::{FILTER_ALL, Message, SearchRequest};

/// Message filters taken from a [`SearchRequest`].
///
/// All filters are AND'd together; `"all"` disables a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageFilters<'a> {
    pub speaker: &'a str,
    pub service: &'a str,
    pub date: &'a str,
}

impl<'a> MessageFilters<'a> {
    pub fn from_request(request: &'a SearchRequest) -> Self {
        if request.date_filter != FILTER_ALL {
            tracing::debug!(date_filter = %request.date_filter, "date filter is not applied");
        }
        Self {
            speaker: &request.speaker_filter,
            service: &request.service_filter,
            date: &request.date_filter,
        }
    }

    /// Evaluate every filter against a single message
    pub fn matches(&self, message: &Message) -> bool {
        match_speaker(message, self.speaker)
            && match_service(message, self.service)
            && match_date(message, self.date)
    }
}

/// Match role (exact, case-sensitive)
fn match_speaker(message: &Message, value: &str) -> bool {
    value == FILTER_ALL || message.role.as_str() == value
}

/// Match service display name (exact, case-sensitive)
fn match_service(message: &Message, value: &str) -> bool {
    value == FILTER_ALL || message.service == value
}

/// Date filtering is accepted but not applied: which timestamp to compare and
/// whether bounds are inclusive is undecided.
fn match_date(_message: &Message, _value: &str) -> bool {
    true
}
