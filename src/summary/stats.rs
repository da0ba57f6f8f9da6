use std::collections::BTreeMap;

use crate::models::{Corpus, ServiceStats, Stats};
use crate::store::CorpusStore;

/// Aggregate counters plus a per-service breakdown.
pub fn stats(store: &impl CorpusStore) -> Stats {
    store.with_corpus(compute_stats)
}

/// Compute stats from a corpus.
///
/// Services are keyed from the messages pass; a service that only appears on
/// conversation records is not listed.
pub fn compute_stats(corpus: &Corpus) -> Stats {
    let mut service_breakdown: BTreeMap<String, ServiceStats> = BTreeMap::new();
    for message in &corpus.messages {
        service_breakdown.entry(message.service.clone()).or_default().messages += 1;
    }
    for conversation in &corpus.conversations {
        if let Some(entry) = service_breakdown.get_mut(&conversation.service) {
            entry.conversations += 1;
        }
    }

    Stats {
        total_messages: corpus.counters.messages,
        total_conversations: corpus.counters.conversations,
        total_searches: corpus.counters.searches,
        service_breakdown,
    }
}
