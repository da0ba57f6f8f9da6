use std::fmt;
use std::marker::PhantomData;

use chrono::{DateTime, Utc};
use serde::de::{Error, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::utils::time::to_epoch_seconds;

/// Custom deserializer for timestamps that accepts epoch seconds (number or
/// numeric string), RFC3339 strings, and null
pub fn deserialize_epoch_seconds<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => {
            n.as_f64().map(Some).ok_or_else(|| Error::custom("timestamp out of range"))
        }
        Value::String(s) => {
            let trimmed = s.trim();
            if let Ok(secs) = trimmed.parse::<f64>() {
                return Ok(Some(secs));
            }
            trimmed
                .parse::<DateTime<Utc>>()
                .map(|dt| Some(to_epoch_seconds(dt)))
                .map_err(|e| Error::custom(format!("invalid RFC3339 timestamp: {}", e)))
        }
        _ => Err(Error::custom("timestamp must be a number or string")),
    }
}

/// Custom deserializer for identifier-like fields that may be exported as
/// strings or bare numbers
pub fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        _ => Err(Error::custom("expected a string or number")),
    }
}

/// Deserializes the values of a JSON object into a `Vec`, keeping document
/// order and discarding keys.
///
/// Order is only meaningful when the source map preserves insertion order
/// (serde_json's `preserve_order` feature).
pub fn deserialize_ordered_values<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    struct OrderedValues<T>(PhantomData<T>);

    impl<'de, T> Visitor<'de> for OrderedValues<T>
    where
        T: Deserialize<'de>,
    {
        type Value = Vec<T>;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a map of nodes")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut values = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((_, value)) = map.next_entry::<IgnoredAny, T>()? {
                values.push(value);
            }
            Ok(values)
        }
    }

    deserializer.deserialize_map(OrderedValues(PhantomData))
}
