//! Canonical data model shared by every parser and query.
//!
//! - [`Message`] / [`Conversation`] - normalized records all formats convert into
//! - [`Corpus`] / [`Counters`] - the accumulated data held by a store
//! - [`SearchRequest`] / [`SearchResponse`] - keyword search input and output
//! - [`ConversationSummary`] / [`Stats`] - derived, non-persisted views
//! - [`SourceFormat`] - format tags assigned by the detector

pub mod corpus;
pub mod format;
pub mod message;
pub mod search;
pub mod summary;

pub use corpus::{Corpus, Counters};
pub use format::{SUPPORTED_SERVICES, ServiceInfo, SourceFormat, supported_services};
pub use message::{Conversation, Message, Role};
pub use search::{FILTER_ALL, SearchHit, SearchRequest, SearchResponse};
pub use summary::{ConversationSummary, RecentChats, ServiceStats, Stats};
