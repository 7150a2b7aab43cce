//! Field decoders that never fail a whole record.
//!
//! Stored blobs may have been edited by hand or written by an older build.
//! A field with the wrong JSON type reads as empty instead of rejecting the
//! collection it belongs to.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Strings pass through, numbers and booleans are stringified, anything else is `""`.
pub(crate) fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    })
}

/// Decode a nested record, falling back to its default when the shape is wrong.
pub(crate) fn record<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default)]
    struct Sample {
        #[serde(deserialize_with = "string")]
        text: String,
        #[serde(deserialize_with = "record")]
        nested: Nested,
    }

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default)]
    struct Nested {
        #[serde(deserialize_with = "string")]
        inner: String,
    }

    fn decode(raw: &str) -> Sample {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn test_scalars_become_text() {
        assert_eq!(decode(r#"{"text":"plain"}"#).text, "plain");
        assert_eq!(decode(r#"{"text":1990}"#).text, "1990");
        assert_eq!(decode(r#"{"text":true}"#).text, "true");
    }

    #[test]
    fn test_non_scalars_become_empty() {
        assert_eq!(decode(r#"{"text":null}"#).text, "");
        assert_eq!(decode(r#"{"text":[1,2]}"#).text, "");
        assert_eq!(decode(r#"{"text":{"a":1}}"#).text, "");
    }

    #[test]
    fn test_misshapen_record_defaults() {
        assert_eq!(decode(r#"{"nested":null}"#).nested, Nested::default());
        assert_eq!(decode(r#"{"nested":"oops"}"#).nested, Nested::default());
        assert_eq!(decode(r#"{"nested":{"inner":7}}"#).nested.inner, "7");
    }
}
