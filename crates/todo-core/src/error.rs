//! Core error types for todo-core.
//!
//! Uses `thiserror` for structured, matchable error variants covering
//! validation and document-decode failure modes.

use thiserror::Error;

/// Errors produced by task construction, mutation, and the document codec.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    /// The title was missing, not a string, or trimmed to empty.
    #[error("title must be a non-empty string")]
    EmptyTitle,

    /// A stored document is missing a required string field.
    #[error("document missing required field: {field}")]
    MissingField { field: &'static str },

    /// A stored document carries a timestamp that is not valid RFC 3339.
    #[error("document field is not a valid timestamp: {field}")]
    InvalidTimestamp { field: &'static str },
}
