//! Derived views over the corpus: recent-conversation previews and usage stats.

pub mod recent;
pub mod stats;

pub use recent::{PREVIEW_CHARS, RECENT_LIMIT, recent_chats, summarize_recent, truncate_preview};
pub use stats::{compute_stats, stats};
