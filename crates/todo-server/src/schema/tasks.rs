//! Task request/response types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use todo_core::TaskPatch;

/// Request to create a new task.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskRequest {
    /// The task title; required, must trim to non-empty.
    pub title: Option<String>,
    /// Optional description; defaults to empty.
    pub description: Option<String>,
}

/// Partial update to an existing task.
///
/// `title` and `description` accept any JSON value on the wire: a
/// non-string description coerces to empty (matching create's defaulting),
/// while a non-string title collapses to empty and is rejected downstream
/// as an empty title.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<Value>,
    pub description: Option<Value>,
    pub completed: Option<bool>,
}

impl UpdateTaskRequest {
    /// Collapses the wire body into a core patch.
    pub fn into_patch(self) -> TaskPatch {
        TaskPatch {
            title: self.title.map(coerce_string),
            description: self.description.map(coerce_string),
            completed: self.completed,
        }
    }
}

fn coerce_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        _ => String::new(),
    }
}

/// Confirmation body for a successful delete.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteTaskResponse {
    /// Fixed confirmation message.
    pub message: String,
}
