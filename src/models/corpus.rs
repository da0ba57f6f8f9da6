use serde::{Deserialize, Serialize};

use super::message::{Conversation, Message};

/// Running counters kept alongside the corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counters {
    pub messages: usize,
    pub conversations: usize,
    pub searches: usize,
}

/// All ingested data, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Corpus {
    pub messages: Vec<Message>,
    pub conversations: Vec<Conversation>,
    pub counters: Counters,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.conversations.is_empty()
    }

    /// Appends a fully parsed batch and refreshes the counters.
    pub fn extend(&mut self, messages: Vec<Message>, conversations: Vec<Conversation>) {
        self.messages.extend(messages);
        self.conversations.extend(conversations);
        self.counters.messages = self.messages.len();
        self.counters.conversations = self.conversations.len();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
