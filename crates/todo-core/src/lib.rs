//! Core task entity and document codec for the todo service.
//!
//! This crate is the leaf of the workspace: no I/O, no HTTP, no storage
//! backend. It defines the [`Task`] record, its validated construction and
//! partial-patch mutation, and the explicit encode/decode contract between
//! tasks and storage documents.

pub mod error;
pub mod task;

pub use error::TaskError;
pub use task::{Task, TaskPatch};
