//! Storage error types for todo-storage.
//!
//! [`StorageError`] covers all anticipated failure modes in the storage
//! layer. Connectivity failures are a distinct variant so callers can
//! translate them separately from ordinary operation failures.

use thiserror::Error;

/// Errors produced by storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Opening or reaching the underlying database failed.
    #[error("connection error: {0}")]
    Connection(String),

    /// JSON serialization or deserialization of a document failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backend rejected or failed an otherwise-valid operation.
    #[error("backend error: {0}")]
    Backend(#[from] rusqlite::Error),

    /// Applying schema migrations failed.
    #[error("migration error: {0}")]
    Migration(String),

    /// The backend rejected the key value itself.
    ///
    /// Neither built-in backend constrains key format; the variant exists
    /// for backends that do.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// A data integrity violation was detected.
    #[error("integrity error: {reason}")]
    Integrity { reason: String },
}
