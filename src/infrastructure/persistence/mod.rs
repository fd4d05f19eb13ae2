//! Concrete implementations of [`crate::domain::repositories::UserRepository`].
//!
//! - [`PgUserRepository`] - PostgreSQL storage through SQLx
//! - [`InMemoryUserRepository`] - Process-local storage for tests and demos

pub mod memory_user_repository;
pub mod pg_user_repository;

pub use memory_user_repository::InMemoryUserRepository;
pub use pg_user_repository::PgUserRepository;
