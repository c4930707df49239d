//! The [`Task`] entity and its document codec.
//!
//! A task is an opaque string id, a trimmed title and description, a
//! completion flag, and a pair of UTC timestamps. Conversion to and from
//! storage documents is an explicit contract with defined failure modes
//! rather than an implicit shape agreement: [`Task::to_document`] and
//! [`Task::from_document`] round-trip losslessly for any valid task.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::TaskError;

/// A single task record.
///
/// Invariants: `id` is immutable and unique, `title` is never empty or
/// whitespace-only, and `updated_at >= created_at`. Serde derives give the
/// wire JSON shape (timestamps serialize as RFC 3339 strings).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque string identifier, assigned once at construction.
    pub id: String,
    /// Trimmed, non-empty title.
    pub title: String,
    /// Trimmed description; empty by default.
    pub description: String,
    /// Completion flag; false by default.
    pub completed: bool,
    /// Set once at construction, never mutated.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every accepted mutation.
    pub updated_at: DateTime<Utc>,
}

/// A partial update: only supplied fields change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    /// Replacement title; must trim to non-empty.
    pub title: Option<String>,
    /// Replacement description; trimmed as given.
    pub description: Option<String>,
    /// Replacement completion flag.
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// True when the patch carries none of the recognized fields.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }
}

impl Task {
    /// Creates a new task with a fresh id and equal timestamps.
    ///
    /// Both fields are trimmed. Fails with [`TaskError::EmptyTitle`] when
    /// the title trims to empty.
    pub fn new(title: &str, description: &str) -> Result<Task, TaskError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TaskError::EmptyTitle);
        }
        let now = Utc::now();
        Ok(Task {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: description.trim().to_string(),
            completed: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Applies a partial patch, refreshing `updated_at`.
    ///
    /// A supplied title must trim to non-empty ([`TaskError::EmptyTitle`]
    /// otherwise, with the task left unchanged). `id` and `created_at` are
    /// never touched.
    pub fn apply(&mut self, patch: &TaskPatch) -> Result<(), TaskError> {
        if let Some(title) = &patch.title {
            let title = title.trim();
            if title.is_empty() {
                return Err(TaskError::EmptyTitle);
            }
            self.title = title.to_string();
        }
        if let Some(description) = &patch.description {
            self.description = description.trim().to_string();
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Encodes this task as a storage document.
    ///
    /// The document is a JSON object keyed by the six field names, with
    /// timestamps as RFC 3339 strings.
    pub fn to_document(&self) -> Value {
        json!({
            "id": self.id,
            "title": self.title,
            "description": self.description,
            "completed": self.completed,
            "created_at": self.created_at.to_rfc3339(),
            "updated_at": self.updated_at.to_rfc3339(),
        })
    }

    /// Decodes a storage document back into a task.
    ///
    /// `id` and `title` are required string fields. Absent `description`
    /// defaults to empty, absent `completed` to false, absent `created_at`
    /// to the current time, and absent `updated_at` to `created_at`.
    pub fn from_document(doc: &Value) -> Result<Task, TaskError> {
        let id = require_str(doc, "id")?;
        let title = require_str(doc, "title")?;
        let description = doc
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string();
        let completed = doc
            .get("completed")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        let created_at = match doc.get("created_at").and_then(Value::as_str) {
            Some(raw) => parse_timestamp("created_at", raw)?,
            None => Utc::now(),
        };
        let updated_at = match doc.get("updated_at").and_then(Value::as_str) {
            Some(raw) => parse_timestamp("updated_at", raw)?,
            None => created_at,
        };
        Ok(Task {
            id,
            title,
            description,
            completed,
            created_at,
            updated_at,
        })
    }
}

fn require_str(doc: &Value, field: &'static str) -> Result<String, TaskError> {
    doc.get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(TaskError::MissingField { field })
}

fn parse_timestamp(field: &'static str, raw: &str) -> Result<DateTime<Utc>, TaskError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| TaskError::InvalidTimestamp { field })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_title_and_description() {
        let task = Task::new("  Buy milk  ", "  from the shop  ").unwrap();
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.description, "from the shop");
    }

    #[test]
    fn new_sets_defaults() {
        let task = Task::new("Buy milk", "").unwrap();
        assert!(!task.completed);
        assert_eq!(task.created_at, task.updated_at);
        assert!(!task.id.is_empty());
    }

    #[test]
    fn new_assigns_unique_ids() {
        let a = Task::new("a", "").unwrap();
        let b = Task::new("b", "").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn new_rejects_empty_title() {
        assert_eq!(Task::new("", "desc"), Err(TaskError::EmptyTitle));
        assert_eq!(Task::new("   ", "desc"), Err(TaskError::EmptyTitle));
    }

    #[test]
    fn document_round_trip() {
        let task = Task::new("Buy milk", "2 litres").unwrap();
        let decoded = Task::from_document(&task.to_document()).unwrap();
        assert_eq!(decoded, task);
    }

    #[test]
    fn from_document_applies_defaults() {
        let doc = json!({
            "id": "abc",
            "title": "Buy milk",
            "created_at": "2026-08-23T10:00:00+00:00",
        });
        let task = Task::from_document(&doc).unwrap();
        assert_eq!(task.description, "");
        assert!(!task.completed);
        assert_eq!(task.updated_at, task.created_at);
    }

    #[test]
    fn from_document_rejects_missing_required_fields() {
        let no_id = json!({ "title": "Buy milk" });
        assert_eq!(
            Task::from_document(&no_id),
            Err(TaskError::MissingField { field: "id" })
        );

        let no_title = json!({ "id": "abc" });
        assert_eq!(
            Task::from_document(&no_title),
            Err(TaskError::MissingField { field: "title" })
        );

        // A non-string title is as absent as a missing one.
        let bad_title = json!({ "id": "abc", "title": 7 });
        assert_eq!(
            Task::from_document(&bad_title),
            Err(TaskError::MissingField { field: "title" })
        );
    }

    #[test]
    fn from_document_rejects_bad_timestamp() {
        let doc = json!({
            "id": "abc",
            "title": "Buy milk",
            "created_at": "yesterday",
        });
        assert_eq!(
            Task::from_document(&doc),
            Err(TaskError::InvalidTimestamp { field: "created_at" })
        );
    }

    #[test]
    fn apply_partial_patch() {
        let mut task = Task::new("Buy milk", "2 litres").unwrap();
        let before = task.updated_at;
        let patch = TaskPatch {
            completed: Some(true),
            ..TaskPatch::default()
        };
        task.apply(&patch).unwrap();
        assert!(task.completed);
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.description, "2 litres");
        assert!(task.updated_at >= before);
    }

    #[test]
    fn apply_trims_supplied_fields() {
        let mut task = Task::new("Buy milk", "").unwrap();
        let patch = TaskPatch {
            title: Some("  Buy bread  ".to_string()),
            description: Some("  rye  ".to_string()),
            completed: None,
        };
        task.apply(&patch).unwrap();
        assert_eq!(task.title, "Buy bread");
        assert_eq!(task.description, "rye");
    }

    #[test]
    fn apply_rejects_empty_title() {
        let mut task = Task::new("Buy milk", "").unwrap();
        let patch = TaskPatch {
            title: Some("   ".to_string()),
            ..TaskPatch::default()
        };
        assert_eq!(task.apply(&patch), Err(TaskError::EmptyTitle));
        // Task left unchanged on rejection.
        assert_eq!(task.title, "Buy milk");
    }

    #[test]
    fn patch_emptiness() {
        assert!(TaskPatch::default().is_empty());
        let patch = TaskPatch {
            completed: Some(false),
            ..TaskPatch::default()
        };
        assert!(!patch.is_empty());
    }
}
