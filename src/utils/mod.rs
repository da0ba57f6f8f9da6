pub mod environment;
pub mod files;
pub mod time;

pub use environment::{DEFAULT_MAX_UPLOAD_BYTES, MAX_UPLOAD_BYTES_VAR, max_upload_bytes};
pub use files::{read_limited, validate_file_size};
pub use time::{format_epoch_seconds, now_epoch_seconds, to_epoch_seconds};
