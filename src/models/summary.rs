use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Preview of one conversation for the recent-chats listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub conversation_id: String,
    pub title: String,
    pub service: String,
    pub create_time: f64,
    pub message_count: usize,
    /// First user message, truncated; empty when there is none
    pub user_message: String,
    /// First assistant message, truncated; empty when there is none
    pub assistant_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentChats {
    pub summaries: Vec<ConversationSummary>,
    pub total: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStats {
    pub messages: usize,
    pub conversations: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total_messages: usize,
    pub total_conversations: usize,
    pub total_searches: usize,
    pub service_breakdown: BTreeMap<String, ServiceStats>,
}
