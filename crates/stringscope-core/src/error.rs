//! Error types for the storage layer.
//!
//! The analyzer, filter evaluator and translator are total and have no error
//! type of their own.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// No record has the given id, and no record has it as its value.
    #[error("string not found: {key}")]
    NotFound { key: String },

    #[error("store lock poisoned")]
    Poisoned,

    #[error("snapshot i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot is not valid JSON: {0}")]
    Snapshot(#[from] serde_json::Error),
}

impl StoreError {
    pub fn not_found(key: impl Into<String>) -> Self {
        StoreError::NotFound { key: key.into() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}
