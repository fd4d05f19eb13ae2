//! Infrastructure layer for external integrations.
//!
//! - [`persistence`] - Repository implementations (PostgreSQL and in-memory)

pub mod persistence;
