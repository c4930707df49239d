//! The [`TaskStore`] trait defining the storage contract for task documents.
//!
//! The store is document-level: it moves opaque `serde_json::Value` objects
//! in and out of a single collection keyed by string id, and knows nothing
//! about the task shape. Absence is data at this seam (`Option`/`bool`
//! returns), not an error; callers decide what a miss means.
//!
//! All backends (InMemoryStore, SqliteStore, ...) implement this trait,
//! ensuring they are fully swappable without changing handler logic.

use serde_json::Value;

use crate::error::StorageError;

/// The storage contract for the task collection.
///
/// The trait is synchronous (not async) for simplicity; the server wraps
/// the store in an async-aware lock.
pub trait TaskStore {
    /// Returns all documents in the store's natural (insertion) order.
    fn find_all(&self) -> Result<Vec<Value>, StorageError>;

    /// Returns the document with the given id, or `None` if absent.
    fn find_by_id(&self, id: &str) -> Result<Option<Value>, StorageError>;

    /// Inserts a document under the given id.
    ///
    /// Inserting an id that already exists is an integrity/backend error.
    fn insert(&mut self, id: &str, doc: &Value) -> Result<(), StorageError>;

    /// Replaces the document with the given id.
    ///
    /// Returns `false` when no document had that id.
    fn update(&mut self, id: &str, doc: &Value) -> Result<bool, StorageError>;

    /// Deletes the document with the given id.
    ///
    /// Returns `false` when nothing was removed.
    fn delete(&mut self, id: &str) -> Result<bool, StorageError>;
}
