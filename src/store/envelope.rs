//! Versioned persisted blob.
//!
//! Every kind's sequence is stored as `{"schemaVersion": 1, "records":
//! [...]}`. A bare JSON array is the legacy v0 shape (the pre-envelope
//! format); it is decoded and handed to the kind's legacy check, which
//! decides between adopting the records under v1 and discarding them
//! wholesale for a reseed. Versions newer than the current one fail
//! instead of guessing.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::error::PersistenceError;

/// Current persisted schema version.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Envelope<T> {
    schema_version: u32,
    records: Vec<T>,
}

/// Outcome of decoding a persisted blob.
#[derive(Debug)]
pub enum Decoded<T> {
    /// Current envelope shape.
    Current(Vec<T>),
    /// Legacy v0 bare array; subject to the kind's legacy check and a
    /// rewrite under the current version.
    Legacy(Vec<T>),
    /// Neither shape parsed; treated as incompatible data to discard.
    Incompatible,
}

/// Decode a persisted blob into records.
pub fn decode<T: DeserializeOwned>(raw: &str) -> Result<Decoded<T>, PersistenceError> {
    if let Ok(envelope) = serde_json::from_str::<Envelope<T>>(raw) {
        if envelope.schema_version > SCHEMA_VERSION {
            return Err(PersistenceError::UnsupportedSchema {
                found: envelope.schema_version,
                current: SCHEMA_VERSION,
            });
        }
        return Ok(Decoded::Current(envelope.records));
    }
    match serde_json::from_str::<Vec<T>>(raw) {
        Ok(records) => Ok(Decoded::Legacy(records)),
        Err(_) => Ok(Decoded::Incompatible),
    }
}

/// Encode records under the current schema version.
pub fn encode<T: Serialize + Clone>(records: &[T]) -> Result<String, PersistenceError> {
    let envelope = Envelope {
        schema_version: SCHEMA_VERSION,
        records: records.to_vec(),
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_round_trip() {
        let records = vec!["a".to_string(), "b".to_string()];
        let raw = encode(&records).unwrap();
        assert!(raw.contains("\"schemaVersion\": 1"));
        match decode::<String>(&raw).unwrap() {
            Decoded::Current(back) => assert_eq!(back, records),
            other => panic!("expected current shape, got {other:?}"),
        }
    }

    #[test]
    fn test_bare_array_is_legacy() {
        match decode::<u32>("[1, 2, 3]").unwrap() {
            Decoded::Legacy(records) => assert_eq!(records, vec![1, 2, 3]),
            other => panic!("expected legacy shape, got {other:?}"),
        }
    }

    #[test]
    fn test_garbage_is_incompatible() {
        assert!(matches!(
            decode::<u32>("{\"whatever\": true}").unwrap(),
            Decoded::Incompatible
        ));
        assert!(matches!(
            decode::<u32>("not json").unwrap(),
            Decoded::Incompatible
        ));
    }

    #[test]
    fn test_future_schema_version_fails() {
        let raw = "{\"schemaVersion\": 2, \"records\": []}";
        let err = decode::<u32>(raw).unwrap_err();
        assert!(matches!(
            err,
            PersistenceError::UnsupportedSchema { found: 2, current: 1 }
        ));
    }
}
