//! Error types for the fair-split store.

use crate::types::ListKind;
use thiserror::Error;

/// Main error type for store and storage operations.
#[derive(Debug, Error)]
pub enum SplitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Index {index} out of range for {list} (len {len})")]
    IndexOutOfRange {
        list: ListKind,
        index: usize,
        len: usize,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Invalid snapshot format: {0}")]
    InvalidFormat(String),

    #[error("Storage is locked by another process")]
    Locked,
}

impl From<serde_json::Error> for SplitError {
    fn from(e: serde_json::Error) -> Self {
        if e.is_data() || e.is_eof() {
            SplitError::Deserialization(e.to_string())
        } else {
            SplitError::Serialization(e.to_string())
        }
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, SplitError>;
