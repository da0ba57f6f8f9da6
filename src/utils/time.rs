use chrono::{DateTime, Utc};

/// Converts a UTC datetime to fractional seconds since the Unix epoch
pub fn to_epoch_seconds(dt: DateTime<Utc>) -> f64 {
    dt.timestamp() as f64 + f64::from(dt.timestamp_subsec_nanos()) / 1_000_000_000.0
}

/// Current time as fractional epoch seconds
pub fn now_epoch_seconds() -> f64 {
    to_epoch_seconds(Utc::now())
}

/// Formats epoch seconds for display, or `-` when out of range
pub fn format_epoch_seconds(secs: f64) -> String {
    let whole = secs.floor();
    let nanos = ((secs - whole) * 1_000_000_000.0) as u32;
    match DateTime::from_timestamp(whole as i64, nanos) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => "-".to_string(),
    }
}
