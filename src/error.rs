//! Error types surfaced to callers.
//!
//! Per-item parse problems are not errors: parsers report them through
//! [`crate::parsers::ParseOutcome::failures`] and keep going.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::SourceFormat;

/// Failures that reject an upload as a whole.
///
/// The store is never modified when one of these is returned.
#[derive(Debug, Error)]
pub enum IngestError {
    /// No file was given, or the file name is empty.
    #[error("no file was provided")]
    InputMissing,

    /// The file could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file exceeds the configured upload limit.
    ///
    /// `size` is the reported length, or the bytes read before giving up
    /// when the content outgrew that length.
    #[error("file too large: {size} bytes (max {max} bytes)")]
    TooLarge { size: u64, max: u64 },

    /// The payload is neither JSON nor decodable text.
    #[error("file content is not valid UTF-8 text")]
    Decode,

    /// The detector could not classify the payload and the text fallback found nothing.
    #[error("unsupported file format (detected type: {detected})")]
    UnsupportedFormat { detected: SourceFormat },

    /// The format was recognized but no message survived parsing.
    #[error("no messages could be extracted from the file (detected type: {detected})")]
    NoMessages { detected: SourceFormat },
}

/// Failures of a search call.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The literal query could not be compiled into a matcher (e.g. size limit).
    #[error("invalid search query: {0}")]
    Pattern(#[from] regex::Error),
}
