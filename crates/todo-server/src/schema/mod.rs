//! API schema types for request/response definitions.
//!
//! Types use serde derives for JSON serialization/deserialization. The
//! task wire shape itself is `todo_core::Task`, serialized directly.

pub mod tasks;
