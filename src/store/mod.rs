//! Corpus storage behind a small insert/query interface.
//!
//! Operations receive the store explicitly (`&impl CorpusStore`) rather than
//! reaching for a global. [`MemoryStore`] is the in-process implementation;
//! nothing is persisted across process restarts.

pub mod memory;

pub use memory::MemoryStore;

use crate::models::{Conversation, Corpus, Counters, Message};

/// Storage collaborator for ingested messages, conversations, and counters.
///
/// Each method is atomic with respect to the others.
pub trait CorpusStore: Send + Sync {
    /// Append a fully parsed batch and return the updated counters.
    fn append(&self, messages: Vec<Message>, conversations: Vec<Conversation>) -> Counters;

    /// Consistent copy of everything stored.
    fn snapshot(&self) -> Corpus;

    /// Run `read` against the stored corpus without copying it.
    fn with_corpus<R>(&self, read: impl FnOnce(&Corpus) -> R) -> R;

    /// Run `read` and count one search in the same critical section, so the
    /// returned counters describe the corpus `read` saw.
    fn search_with<R>(&self, read: impl FnOnce(&Corpus) -> R) -> (R, Counters);

    /// Current counters.
    fn counters(&self) -> Counters;

    /// Count one executed search and return the updated counters.
    fn record_search(&self) -> Counters;

    /// Reset to empty data and zero counters.
    fn clear(&self);
}
