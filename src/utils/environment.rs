use std::env;

/// Environment variable overriding the upload size limit (bytes)
pub const MAX_UPLOAD_BYTES_VAR: &str = "AI_KNOWLEDGE_GARDEN_MAX_UPLOAD_BYTES";

/// Default upload size limit: 10MB
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Maximum accepted upload size, from the environment or the default.
///
/// Unparseable or zero values fall back to the default with a warning.
pub fn max_upload_bytes() -> u64 {
    match env::var(MAX_UPLOAD_BYTES_VAR) {
        Ok(raw) => match raw.trim().parse::<u64>() {
            Ok(limit) if limit > 0 => limit,
            _ => {
                tracing::warn!(
                    "ignoring invalid {}={:?}, using {} bytes",
                    MAX_UPLOAD_BYTES_VAR,
                    raw,
                    DEFAULT_MAX_UPLOAD_BYTES
                );
                DEFAULT_MAX_UPLOAD_BYTES
            }
        },
        Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
    }
}
