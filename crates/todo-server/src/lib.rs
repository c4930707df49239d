//! HTTP/JSON API server for the todo task-tracking service.
//!
//! Provides a REST API for creating, listing, fetching, updating, and
//! deleting tasks persisted in a document store. This crate contains the
//! server framework, API schema types, error translation, and route
//! definitions.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod state;
