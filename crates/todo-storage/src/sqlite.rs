//! SQLite implementation of [`TaskStore`].
//!
//! [`SqliteStore`] persists the task collection in a SQLite database with
//! WAL mode and automatic schema migrations. Documents are stored as JSON
//! TEXT, keyed by the document id; every write is a single statement, so
//! per-document atomicity comes from SQLite itself.

use rusqlite::{params, Connection, OptionalExtension};
use serde_json::Value;

use crate::error::StorageError;
use crate::traits::TaskStore;

/// SQLite-backed implementation of [`TaskStore`].
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) a SQLite database at `path`.
    pub fn new(path: &str) -> Result<Self, StorageError> {
        let conn = crate::schema::open_database(path)?;
        Ok(SqliteStore { conn })
    }

    /// Opens an in-memory SQLite database (for testing).
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = crate::schema::open_in_memory()?;
        Ok(SqliteStore { conn })
    }
}

impl TaskStore for SqliteStore {
    fn find_all(&self) -> Result<Vec<Value>, StorageError> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT doc FROM tasks ORDER BY rowid")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        let mut docs = Vec::new();
        for raw in rows {
            docs.push(serde_json::from_str(&raw?)?);
        }
        Ok(docs)
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Value>, StorageError> {
        let raw: Option<String> = self
            .conn
            .query_row("SELECT doc FROM tasks WHERE id = ?1", params![id], |row| {
                row.get(0)
            })
            .optional()?;
        match raw {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn insert(&mut self, id: &str, doc: &Value) -> Result<(), StorageError> {
        let raw = serde_json::to_string(doc)?;
        self.conn.execute(
            "INSERT INTO tasks (id, doc) VALUES (?1, ?2)",
            params![id, raw],
        )?;
        Ok(())
    }

    fn update(&mut self, id: &str, doc: &Value) -> Result<bool, StorageError> {
        let raw = serde_json::to_string(doc)?;
        let changed = self.conn.execute(
            "UPDATE tasks SET doc = ?2 WHERE id = ?1",
            params![id, raw],
        )?;
        Ok(changed > 0)
    }

    fn delete(&mut self, id: &str) -> Result<bool, StorageError> {
        let removed = self
            .conn
            .execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
        Ok(removed > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store() -> SqliteStore {
        SqliteStore::in_memory().expect("failed to open in-memory store")
    }

    #[test]
    fn insert_and_find() {
        let mut store = store();
        store.insert("a", &json!({ "id": "a", "n": 1 })).unwrap();
        assert_eq!(
            store.find_by_id("a").unwrap(),
            Some(json!({ "id": "a", "n": 1 }))
        );
        assert_eq!(store.find_by_id("missing").unwrap(), None);
    }

    #[test]
    fn find_all_uses_rowid_order() {
        let mut store = store();
        store.insert("z", &json!({ "id": "z" })).unwrap();
        store.insert("a", &json!({ "id": "a" })).unwrap();
        let ids: Vec<String> = store
            .find_all()
            .unwrap()
            .iter()
            .map(|d| d["id"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(ids, vec!["z", "a"]);
    }

    #[test]
    fn duplicate_insert_is_an_error() {
        let mut store = store();
        store.insert("a", &json!({})).unwrap();
        let err = store.insert("a", &json!({})).unwrap_err();
        assert!(matches!(err, StorageError::Backend(_)));
    }

    #[test]
    fn update_replaces_or_reports_absence() {
        let mut store = store();
        store.insert("a", &json!({ "v": 1 })).unwrap();
        assert!(store.update("a", &json!({ "v": 2 })).unwrap());
        assert_eq!(store.find_by_id("a").unwrap(), Some(json!({ "v": 2 })));
        assert!(!store.update("missing", &json!({})).unwrap());
    }

    #[test]
    fn delete_removes_or_reports_absence() {
        let mut store = store();
        store.insert("a", &json!({})).unwrap();
        assert!(store.delete("a").unwrap());
        assert!(!store.delete("a").unwrap());
        assert!(store.find_all().unwrap().is_empty());
    }
}
