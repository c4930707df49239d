//! HTTP handler modules for the todo API.
//!
//! Handlers are thin: parse the request, acquire the store lock, perform at
//! most one logical store interaction, and return a status-coded JSON
//! response. Store failures convert to [`crate::error::ApiError`] at the
//! `?` boundary and are translated uniformly.

pub mod tasks;
