use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::IngestError;

/// Validates that a file's size is within `max` bytes and returns the size
///
/// This only sees the length reported at open time. Pipes, `/proc` entries
/// and files that grow afterwards can still deliver more, so reads must go
/// through [`read_limited`].
///
/// # Errors
///
/// Returns an error if:
/// - The file metadata cannot be read
/// - The file is larger than `max`
pub fn validate_file_size(file: &File, path: &Path, max: u64) -> Result<u64, IngestError> {
    let metadata =
        file.metadata().map_err(|source| IngestError::Io { path: path.to_path_buf(), source })?;

    let size = metadata.len();
    if size > max {
        return Err(IngestError::TooLarge { size, max });
    }

    Ok(size)
}

/// Reads everything from `reader`, failing with `TooLarge` as soon as more
/// than `max` bytes arrive. `expected` only sizes the initial buffer.
pub fn read_limited(
    reader: impl Read,
    path: &Path,
    max: u64,
    expected: u64,
) -> Result<Vec<u8>, IngestError> {
    let mut bytes = Vec::with_capacity(expected.min(max) as usize);
    reader
        .take(max.saturating_add(1))
        .read_to_end(&mut bytes)
        .map_err(|source| IngestError::Io { path: path.to_path_buf(), source })?;

    let size = bytes.len() as u64;
    if size > max {
        return Err(IngestError::TooLarge { size, max });
    }

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn file_with(len: usize) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(&vec![b'x'; len]).expect("Failed to write temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_file_within_limit() {
        let file = file_with(100);
        let size = validate_file_size(file.as_file(), file.path(), 100).unwrap();
        assert_eq!(size, 100);
    }

    #[test]
    fn test_file_over_limit() {
        let file = file_with(101);
        let err = validate_file_size(file.as_file(), file.path(), 100).unwrap_err();
        assert!(matches!(err, IngestError::TooLarge { size: 101, max: 100 }));
        assert!(err.to_string().contains("file too large"));
    }

    #[test]
    fn test_read_limited_within_limit() {
        let bytes = read_limited(&b"0123456789"[..], Path::new("mem"), 10, 10).unwrap();
        assert_eq!(bytes, b"0123456789");
    }

    #[test]
    fn test_read_limited_stops_past_limit() {
        // The declared size says 4 bytes; the stream keeps going
        let stream = std::io::repeat(b'x').take(1_000_000);
        let err = read_limited(stream, Path::new("mem"), 64, 4).unwrap_err();
        assert!(matches!(err, IngestError::TooLarge { size: 65, max: 64 }));
    }
}
