//! REST API layer for HTTP request/response handling.
//!
//! # Modules
//!
//! - [`envelope`] - Uniform reply contract used by every handler
//! - [`validation`] - Request body validation
//! - [`dto`] - Request/response serialization types
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route table for the user resource

pub mod dto;
pub mod envelope;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod validation;
