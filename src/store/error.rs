//! Unified error type for store operations.

use thiserror::Error;

use super::id::RecordId;

/// Errors surfaced by [`ListStore`](super::ListStore) mutations and
/// initialization.
///
/// `NotFound` is a distinguishable outcome rather than a silent no-op so
/// that stricter callers can choose to report it; the console UI treats
/// it as benign.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Record not found: {0}")]
    NotFound(RecordId),

    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),
}

/// Underlying storage failure. Always fatal to the attempted operation;
/// the in-memory sequence is left untouched when one of these surfaces.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Storage IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Unsupported schema version {found} (current is {current})")]
    UnsupportedSchema { found: u32, current: u32 },
}

impl StoreError {
    /// Required-field validation failure with a field name.
    #[must_use]
    pub fn missing_field(field: &str) -> Self {
        StoreError::Validation(format!("missing required field: {field}"))
    }

    /// True when the error is the benign missing-target case.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}
