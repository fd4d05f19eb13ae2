//! Helpers shared across layers.
//!
//! - [`password`] - bcrypt hashing and verification

pub mod password;
