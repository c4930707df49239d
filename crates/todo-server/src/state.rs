//! Application state holding the shared task store.
//!
//! [`AppState`] wraps the store in `Arc<tokio::sync::Mutex<>>` for use with
//! axum handlers. Uses `tokio::sync::Mutex` (async-aware) instead of
//! `std::sync::Mutex` (blocking) so handlers await the lock without blocking
//! the tokio runtime; `rusqlite::Connection` is `!Sync`, which also rules
//! out an `RwLock` around the SQLite backend.
//!
//! The store is a constructed dependency: built once at startup and passed
//! into the router, never reached through ambient/global lookup.

use std::sync::Arc;

use todo_storage::{InMemoryStore, SqliteStore, TaskStore};

use crate::error::ApiError;

/// Shared application state for the HTTP server.
///
/// Cloning is cheap; all clones share the same store handle. The handle is
/// established once at startup and never reassigned.
#[derive(Clone)]
pub struct AppState {
    /// The shared document store (async Mutex -- non-blocking await).
    pub store: Arc<tokio::sync::Mutex<Box<dyn TaskStore + Send>>>,
}

impl AppState {
    /// Creates an `AppState` backed by a SQLite database at the given path.
    pub fn new(db_path: &str) -> Result<Self, ApiError> {
        let store = SqliteStore::new(db_path)?;
        Ok(Self::with_store(Box::new(store)))
    }

    /// Creates an `AppState` backed by an in-memory store (for testing).
    pub fn in_memory() -> Self {
        Self::with_store(Box::new(InMemoryStore::new()))
    }

    /// Creates an `AppState` around any store implementation.
    pub fn with_store(store: Box<dyn TaskStore + Send>) -> Self {
        AppState {
            store: Arc::new(tokio::sync::Mutex::new(store)),
        }
    }
}
