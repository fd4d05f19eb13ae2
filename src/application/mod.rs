//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give HTTP handlers and the admin
//! CLI one place for hashing, not-found checks and pagination defaults.
//!
//! - [`services::UserService`] - User lifecycle operations

pub mod services;
