//! Domain layer: the user entity and the data-access contract.
//!
//! - [`entities`] - User records, creation/update inputs and pages
//! - [`repositories`] - The [`repositories::UserRepository`] capability trait
//!
//! Nothing here depends on HTTP or on a concrete database. Implementations of
//! the repository trait live in [`crate::infrastructure::persistence`].

pub mod entities;
pub mod repositories;
