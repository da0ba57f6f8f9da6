use std::sync::{Mutex, MutexGuard, PoisonError};

use super::CorpusStore;
use crate::models::{Conversation, Corpus, Counters, Message};

/// In-memory corpus guarded by a single mutex.
#[derive(Debug, Default)]
pub struct MemoryStore {
    corpus: Mutex<Corpus>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Corpus> {
        // Critical sections never leave the corpus half-updated
        self.corpus.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CorpusStore for MemoryStore {
    fn append(&self, messages: Vec<Message>, conversations: Vec<Conversation>) -> Counters {
        let mut corpus = self.lock();
        corpus.extend(messages, conversations);
        corpus.counters
    }

    fn snapshot(&self) -> Corpus {
        self.lock().clone()
    }

    fn with_corpus<R>(&self, read: impl FnOnce(&Corpus) -> R) -> R {
        let corpus = self.lock();
        read(&corpus)
    }

    fn search_with<R>(&self, read: impl FnOnce(&Corpus) -> R) -> (R, Counters) {
        let mut corpus = self.lock();
        let result = read(&corpus);
        corpus.counters.searches += 1;
        (result, corpus.counters)
    }

    fn counters(&self) -> Counters {
        self.lock().counters
    }

    fn record_search(&self) -> Counters {
        let mut corpus = self.lock();
        corpus.counters.searches += 1;
        corpus.counters
    }

    fn clear(&self) {
        self.lock().clear();
    }
}
