//! Task CRUD handlers (list, create, get, update, delete).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use todo_core::Task;

use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::schema::tasks::{CreateTaskRequest, DeleteTaskResponse, UpdateTaskRequest};
use crate::state::AppState;

/// Lists all tasks.
///
/// `GET /api/tasks`
///
/// Documents are decoded independently: a single malformed document is
/// logged and skipped, never fatal to the request.
pub async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, ApiError> {
    tracing::debug!("fetching all tasks");
    let store = state.store.lock().await;
    let docs = store.find_all()?;
    let mut tasks = Vec::with_capacity(docs.len());
    for doc in &docs {
        match Task::from_document(doc) {
            Ok(task) => tasks.push(task),
            Err(err) => tracing::warn!(error = %err, "skipping malformed task document"),
        }
    }
    Ok(Json(tasks))
}

/// Creates a new task.
///
/// `POST /api/tasks`
pub async fn create_task(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let title = req.title.as_deref().unwrap_or("");
    let description = req.description.as_deref().unwrap_or("");
    let task = Task::new(title, description)
        .map_err(|_| ApiError::BadRequest("Title is required".to_string()))?;

    let mut store = state.store.lock().await;
    store.insert(&task.id, &task.to_document())?;
    tracing::info!(id = %task.id, "created task");
    Ok((StatusCode::CREATED, Json(task)))
}

/// Fetches a task by id.
///
/// `GET /api/tasks/{id}`
///
/// The id is an opaque string key; no format validation is applied.
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Task>, ApiError> {
    let store = state.store.lock().await;
    let doc = store
        .find_by_id(&id)?
        .ok_or_else(|| ApiError::NotFound(id.clone()))?;
    Ok(Json(decode_stored(&id, &doc)?))
}

/// Applies a partial patch to a task.
///
/// `PUT /api/tasks/{id}`
///
/// Accepts any subset of `title`, `description`, `completed`; a patch with
/// none of them is a client error. On success the stored document is
/// re-read and returned fresh, never the patch echoed back.
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<UpdateTaskRequest>,
) -> Result<Json<Task>, ApiError> {
    // Lookup first: an unknown id is 404 even when the patch is empty.
    let mut store = state.store.lock().await;
    let doc = store
        .find_by_id(&id)?
        .ok_or_else(|| ApiError::NotFound(id.clone()))?;
    let mut task = decode_stored(&id, &doc)?;

    let patch = req.into_patch();
    if patch.is_empty() {
        return Err(ApiError::BadRequest("No valid fields to update".to_string()));
    }
    task.apply(&patch)
        .map_err(|_| ApiError::BadRequest("Title cannot be empty".to_string()))?;
    store.update(&id, &task.to_document())?;

    // Return what the store now holds. A concurrent delete between the
    // write and the re-read surfaces as absence, which is a 404.
    let fresh = store
        .find_by_id(&id)?
        .ok_or_else(|| ApiError::NotFound(id.clone()))?;
    let task = decode_stored(&id, &fresh)?;
    tracing::info!(id = %id, "updated task");
    Ok(Json(task))
}

/// Deletes a task by id.
///
/// `DELETE /api/tasks/{id}`
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteTaskResponse>, ApiError> {
    let mut store = state.store.lock().await;
    let removed = store.delete(&id)?;
    if !removed {
        return Err(ApiError::NotFound(id));
    }
    tracing::info!(id = %id, "deleted task");
    Ok(Json(DeleteTaskResponse {
        message: "Task deleted".to_string(),
    }))
}

/// Decodes a document the store handed back.
///
/// A stored document that fails to decode is a store-side fault, not a
/// client error.
fn decode_stored(id: &str, doc: &Value) -> Result<Task, ApiError> {
    Task::from_document(doc).map_err(|err| {
        ApiError::DatabaseOperation(format!("stored document {id} failed to decode: {err}"))
    })
}
