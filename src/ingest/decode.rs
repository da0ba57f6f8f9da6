use crate::error::IngestError;
use crate::parsers::Payload;

const UTF8_BOM: &str = "\u{feff}";

/// Decode raw upload bytes.
///
/// Order of attempts: UTF-8 JSON, strict UTF-8 text, then UTF-8 text with
/// invalid sequences dropped. Fails with [`IngestError::Decode`] when the
/// bytes are not valid UTF-8 and dropping the invalid sequences leaves only
/// whitespace.
pub fn decode_payload(bytes: &[u8]) -> Result<Payload, IngestError> {
    match std::str::from_utf8(bytes) {
        Ok(text) => {
            let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);
            match serde_json::from_str(text) {
                Ok(value) => Ok(Payload::Json(value)),
                Err(_) => Ok(Payload::Text(text.to_string())),
            }
        }
        Err(_) => {
            let text: String = bytes.utf8_chunks().map(|chunk| chunk.valid()).collect();
            if text.trim().is_empty() {
                return Err(IngestError::Decode);
            }
            tracing::debug!("decoded payload with invalid UTF-8 sequences dropped");
            Ok(Payload::Text(text))
        }
    }
}
