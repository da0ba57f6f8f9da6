//! Upload pipeline: raw bytes → decode → detect → parse → append to the store.
//!
//! # Error Handling Strategy
//!
//! - **Whole-upload failures** (missing input, oversized or undecodable file, unsupported
//!   format, nothing extracted) are returned as [`IngestError`] and leave the store untouched.
//!
//! - **Per-item failures** inside a file are carried in [`IngestReport::failures`]; the items
//!   that did parse are still stored.
//!
//! - **Multi-file ingestion** keeps going when one file fails; each file gets its own result.
//!   Files are parsed in parallel and appended in input order, so the corpus order does not
//!   depend on scheduling.

pub mod decode;

pub use decode::decode_payload;

use std::fs::File;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;
use walkdir::WalkDir;

use crate::error::IngestError;
use crate::models::{Counters, SourceFormat};
use crate::parsers::{
    ParseFailure, ParseOutcome, Payload, TextDialect, detect_format, parse_chatgpt_export,
    parse_openai_api, parse_text_turns,
};
use crate::store::CorpusStore;
use crate::utils::{max_upload_bytes, now_epoch_seconds, read_limited, validate_file_size};

/// Spacing between the synthetic call times of files ingested together, so
/// that text and API conversations from different files never share an id.
const FILE_TIME_STEP_SECS: f64 = 0.001;

/// A parsed upload that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedUpload {
    pub format: SourceFormat,
    pub outcome: ParseOutcome,
}

/// Outcome of a successful upload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngestReport {
    pub format: SourceFormat,
    pub messages: usize,
    pub conversations: usize,
    pub failures: Vec<ParseFailure>,
    /// Store counters after the append
    pub stats: Counters,
}

/// Text dialect used for a text format tag.
pub fn text_dialect(format: SourceFormat) -> Option<TextDialect> {
    match format {
        SourceFormat::ClaudeText => Some(TextDialect::CLAUDE),
        SourceFormat::GeminiText => Some(TextDialect::GEMINI),
        SourceFormat::GrokText => Some(TextDialect::GROK),
        SourceFormat::GenericChat => Some(TextDialect::GENERIC),
        SourceFormat::Chatgpt | SourceFormat::OpenaiApi | SourceFormat::Unknown => None,
    }
}

/// Detect the format of a decoded payload and run the matching parser.
///
/// Unrecognized text falls back to the generic `User:`/`Assistant:` dialect.
pub fn parse_payload(payload: &Payload, now: f64) -> Result<ParsedUpload, IngestError> {
    let format = detect_format(payload);

    let outcome = match format {
        SourceFormat::Chatgpt => payload.as_array().map(|items| parse_chatgpt_export(items, now)),
        SourceFormat::OpenaiApi => payload.as_array().map(|items| parse_openai_api(items, now)),
        SourceFormat::Unknown => payload
            .as_text()
            .filter(|text| !text.trim().is_empty())
            .map(|text| parse_text_turns(text, &TextDialect::FALLBACK, now)),
        text_format => text_dialect(text_format)
            .zip(payload.as_text())
            .map(|(dialect, text)| parse_text_turns(text, &dialect, now)),
    };

    match outcome {
        None => Err(IngestError::UnsupportedFormat { detected: format }),
        Some(outcome) if outcome.is_empty() => match format {
            SourceFormat::Unknown => Err(IngestError::UnsupportedFormat { detected: format }),
            _ => Err(IngestError::NoMessages { detected: format }),
        },
        Some(outcome) => Ok(ParsedUpload { format, outcome }),
    }
}

/// Decode and parse raw bytes without touching any store.
pub fn parse_bytes(bytes: &[u8], now: f64) -> Result<ParsedUpload, IngestError> {
    let payload = decode_payload(bytes)?;
    parse_payload(&payload, now)
}

/// Append a parsed upload to the store.
pub fn store_upload(store: &impl CorpusStore, upload: ParsedUpload) -> IngestReport {
    let ParsedUpload { format, outcome } = upload;
    let messages = outcome.messages.len();
    let conversations = outcome.conversations.len();
    let stats = store.append(outcome.messages, outcome.conversations);

    tracing::info!(
        %format,
        messages,
        conversations,
        skipped = outcome.failures.len(),
        "ingested upload"
    );

    IngestReport { format, messages, conversations, failures: outcome.failures, stats }
}

/// Ingest an in-memory upload.
///
/// The store is only modified when the whole payload parsed successfully.
pub fn ingest_bytes(store: &impl CorpusStore, bytes: &[u8]) -> Result<IngestReport, IngestError> {
    let upload = parse_bytes(bytes, now_epoch_seconds())?;
    Ok(store_upload(store, upload))
}

/// Read an upload from disk, enforcing the configured size limit.
pub fn read_upload(path: &Path) -> Result<Vec<u8>, IngestError> {
    read_upload_with_limit(path, max_upload_bytes())
}

/// Read an upload from disk, rejecting anything larger than `max` bytes.
///
/// The limit holds for the bytes actually read, not just the size reported
/// when the file was opened.
pub fn read_upload_with_limit(path: &Path, max: u64) -> Result<Vec<u8>, IngestError> {
    if path.file_name().is_none_or(|name| name.is_empty()) {
        return Err(IngestError::InputMissing);
    }

    let file =
        File::open(path).map_err(|source| IngestError::Io { path: path.to_path_buf(), source })?;
    let size = validate_file_size(&file, path, max)?;
    read_limited(file, path, max, size)
}

/// Ingest one file from disk.
pub fn ingest_file(store: &impl CorpusStore, path: &Path) -> Result<IngestReport, IngestError> {
    let bytes = read_upload(path)?;
    ingest_bytes(store, &bytes)
}

/// Expand directories into the files they contain (recursively, sorted,
/// hidden entries skipped). Plain file paths are kept as given.
pub fn collect_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if !path.is_dir() {
            files.push(path.clone());
            continue;
        }

        let walker = WalkDir::new(path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry.file_name()));
        for entry in walker {
            match entry {
                Ok(entry) if entry.file_type().is_file() => files.push(entry.into_path()),
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!("skipping unreadable entry under {}: {}", path.display(), e)
                }
            }
        }
    }
    files
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_str().is_some_and(|name| name.starts_with('.'))
}

/// Ingest many files or directories.
///
/// Files are read and parsed in parallel, then appended one by one in the
/// order [`collect_files`] returns them. Every file gets its own result.
pub fn ingest_paths(
    store: &impl CorpusStore,
    paths: &[PathBuf],
) -> Vec<(PathBuf, Result<IngestReport, IngestError>)> {
    let files = collect_files(paths);
    let base = now_epoch_seconds();

    let parsed: Vec<(PathBuf, Result<ParsedUpload, IngestError>)> = files
        .into_par_iter()
        .enumerate()
        .map(|(index, path)| {
            let now = base + index as f64 * FILE_TIME_STEP_SECS;
            let result = read_upload(&path).and_then(|bytes| parse_bytes(&bytes, now));
            (path, result)
        })
        .collect();

    parsed
        .into_iter()
        .map(|(path, result)| {
            if let Err(e) = &result {
                tracing::warn!("failed to ingest {}: {}", path.display(), e);
            }
            let report = result.map(|upload| store_upload(store, upload));
            (path, report)
        })
        .collect()
}
