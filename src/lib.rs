//! AI Knowledge Garden - normalize, search and summarize AI chat exports
//!
//! This library turns chat logs from several assistants into one canonical
//! corpus of messages and conversations. It supports:
//!
//! - Detecting the source format of an upload (ChatGPT export, OpenAI API
//!   message arrays, Claude/Gemini/Grok/generic text transcripts)
//! - Parsing each format into canonical [`Message`]s and [`Conversation`]s,
//!   skipping and reporting malformed items instead of failing the whole upload
//! - Keyword search with `<mark>` highlighting and speaker/service filters
//! - Recent-conversation previews and per-service statistics
//!
//! # Example
//!
//! ```
//! use ai_knowledge_garden::{MemoryStore, SearchRequest, ingest_bytes, search};
//!
//! let store = MemoryStore::new();
//! ingest_bytes(&store, b"Human: What is Rust?\nAssistant: A systems language.")?;
//!
//! let response = search(&store, &SearchRequest::new("rust"))?;
//! assert_eq!(response.total, 1);
//! assert_eq!(response.results[0].highlighted_content, "What is <mark>Rust</mark>?");
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod error;
pub mod ingest;
pub mod models;
pub mod parsers;
pub mod search;
pub mod store;
pub mod summary;
pub mod utils;

// Re-export commonly used types
pub use error::{IngestError, SearchError};
pub use ingest::{IngestReport, ingest_bytes, ingest_file, ingest_paths};
pub use models::{
    Conversation, ConversationSummary, Message, RecentChats, Role, SearchRequest, SearchResponse,
    SourceFormat, Stats, supported_services,
};
pub use parsers::detect_format;
pub use search::search;
pub use store::{CorpusStore, MemoryStore};
pub use summary::{recent_chats, stats};
