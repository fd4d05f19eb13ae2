//! Data Transfer Objects for API requests and responses.
//!
//! Request bodies derive [`validator::Validate`]; query parameters use
//! `serde_with` to accept numbers written as strings.

pub mod health;
pub mod pagination;
pub mod user;
