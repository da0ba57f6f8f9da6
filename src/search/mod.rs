//! Keyword search over the corpus.
//!
//! A linear scan in storage order: a message matches when its content contains
//! the query as a case-insensitive literal substring and it passes the speaker
//! and service filters. Each hit carries a copy of the content with every
//! occurrence of the query wrapped in `<mark>` tags.

pub mod filters;
pub mod highlight;

pub use filters::MessageFilters;
pub use highlight::{HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN, Highlighter};

use crate::error::SearchError;
use crate::models::{Message, SearchHit, SearchRequest, SearchResponse};
use crate::store::CorpusStore;

/// Run a search against the store.
///
/// A blank query returns no results and is not counted. Any other query
/// increments the search counter exactly once, whatever the result count.
pub fn search(
    store: &impl CorpusStore,
    request: &SearchRequest,
) -> Result<SearchResponse, SearchError> {
    if request.query.trim().is_empty() {
        return Ok(SearchResponse {
            results: Vec::new(),
            total: 0,
            query: request.query.clone(),
            stats: store.counters(),
        });
    }

    let highlighter = Highlighter::new(&request.query)?;
    let filters = MessageFilters::from_request(request);
    let (results, stats) =
        store.search_with(|corpus| find_matches(&corpus.messages, &highlighter, &filters));

    tracing::debug!(query = %request.query, hits = results.len(), "search executed");

    Ok(SearchResponse { total: results.len(), results, query: request.query.clone(), stats })
}

/// Scan messages in order and collect highlighted hits.
pub fn find_matches(
    messages: &[Message],
    highlighter: &Highlighter,
    filters: &MessageFilters<'_>,
) -> Vec<SearchHit> {
    messages
        .iter()
        .filter(|message| highlighter.is_match(&message.content) && filters.matches(message))
        .map(|message| SearchHit {
            highlighted_content: highlighter.highlight(&message.content),
            message: message.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;
    use crate::ingest::ingest_bytes;
    use crate::models::Role;
    use crate::store::MemoryStore;

    const CLAUDE_TRANSCRIPT: &[u8] = b"Human: Tell me about the Rust borrow checker
Assistant: The borrow checker enforces rust's aliasing rules";

    fn seeded_store() -> MemoryStore {
        let store = MemoryStore::new();
        ingest_bytes(&store, CLAUDE_TRANSCRIPT).unwrap();
        ingest_bytes(&store, br#"[{"role":"user","content":"Python or RUST?"}]"#).unwrap();
        store
    }

    #[test]
    fn test_search_is_case_insensitive_and_ordered() {
        let store = seeded_store();
        let response = search(&store, &SearchRequest::new("rust")).unwrap();

        assert_eq!(response.total, 3);
        assert_eq!(response.query, "rust");
        assert_eq!(response.results[0].message.service, "Claude");
        assert_eq!(response.results[2].message.service, "OpenAI API");
        assert!(response.results[0].highlighted_content.contains("<mark>Rust</mark>"));
        assert!(response.results[2].highlighted_content.contains("<mark>RUST</mark>"));
    }

    #[test]
    fn test_blank_query_returns_nothing_and_is_not_counted() {
        let store = seeded_store();

        for query in ["", "   ", "\t\n"] {
            let response = search(&store, &SearchRequest::new(query)).unwrap();
            assert!(response.results.is_empty());
            assert_eq!(response.total, 0);
        }
        assert_eq!(store.counters().searches, 0);
    }

    #[test]
    fn test_every_non_blank_search_is_counted() {
        let store = seeded_store();
        search(&store, &SearchRequest::new("rust")).unwrap();
        let response = search(&store, &SearchRequest::new("no such words")).unwrap();

        assert_eq!(response.total, 0);
        assert_eq!(response.stats.searches, 2);
        assert_eq!(store.counters().searches, 2);
    }

    #[test]
    fn test_speaker_filter_excludes_other_roles() {
        let store = seeded_store();
        let response = search(&store, &SearchRequest::new("rust").speaker("assistant")).unwrap();

        assert_eq!(response.total, 1);
        assert!(response.results.iter().all(|hit| hit.message.role == Role::Assistant));
    }

    #[test]
    fn test_service_filter() {
        let store = seeded_store();
        let response = search(&store, &SearchRequest::new("rust").service("OpenAI API")).unwrap();

        assert_eq!(response.total, 1);
        assert_eq!(response.results[0].message.content, "Python or RUST?");
    }

    #[test]
    fn test_date_filter_does_not_change_results() {
        let store = seeded_store();
        let all = search(&store, &SearchRequest::new("rust")).unwrap();
        let dated = search(&store, &SearchRequest::new("rust").date("2000-01-01")).unwrap();

        assert_eq!(all.results, dated.results);
    }

    #[test]
    fn test_search_on_empty_store() {
        let store = MemoryStore::new();
        let response = search(&store, &SearchRequest::new("anything")).unwrap();

        assert_eq!(response.total, 0);
        assert_eq!(response.stats.searches, 1);
    }

    fn needle(conversation_id: &str) -> Message {
        Message {
            conversation_id: conversation_id.to_string(),
            conversation_title: "t".to_string(),
            role: Role::User,
            content: "a needle in the corpus".to_string(),
            timestamp: 0.0,
            service: "Claude".to_string(),
        }
    }

    #[test]
    fn test_results_and_counters_come_from_the_same_corpus() {
        let store = Arc::new(MemoryStore::new());

        let writer = {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..500 {
                    store.clear();
                    store.append(vec![needle("a"), needle("b")], Vec::new());
                }
            })
        };

        for _ in 0..500 {
            let response = search(&*store, &SearchRequest::new("needle")).unwrap();
            // Every stored message matches, so a consistent view has one hit per message
            assert_eq!(response.total, response.stats.messages);
            assert!(response.stats.searches >= 1);
        }
        writer.join().unwrap();
    }
}
