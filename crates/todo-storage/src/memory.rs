//! In-memory implementation of [`TaskStore`].
//!
//! [`InMemoryStore`] is a first-class backend for tests and anywhere
//! persistence isn't needed. Documents live in a Vec so iteration order
//! matches insertion order, mirroring the SQLite backend's rowid order.

use serde_json::Value;

use crate::error::StorageError;
use crate::traits::TaskStore;

/// In-memory backend holding the collection as an insertion-ordered list.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    docs: Vec<(String, Value)>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        InMemoryStore::default()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.docs.iter().position(|(key, _)| key == id)
    }
}

impl TaskStore for InMemoryStore {
    fn find_all(&self) -> Result<Vec<Value>, StorageError> {
        Ok(self.docs.iter().map(|(_, doc)| doc.clone()).collect())
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Value>, StorageError> {
        Ok(self.position(id).map(|i| self.docs[i].1.clone()))
    }

    fn insert(&mut self, id: &str, doc: &Value) -> Result<(), StorageError> {
        if self.position(id).is_some() {
            return Err(StorageError::Integrity {
                reason: format!("duplicate id: {id}"),
            });
        }
        self.docs.push((id.to_string(), doc.clone()));
        Ok(())
    }

    fn update(&mut self, id: &str, doc: &Value) -> Result<bool, StorageError> {
        match self.position(id) {
            Some(i) => {
                self.docs[i].1 = doc.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete(&mut self, id: &str) -> Result<bool, StorageError> {
        match self.position(id) {
            Some(i) => {
                self.docs.remove(i);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
