//! Core entities of the user service.
//!
//! - [`User`] - A stored user record
//! - [`NewUser`] - Input for creating a user (password already hashed)
//! - [`UpdateUser`] - Input for updating contact fields
//! - [`Page`] / [`PageRequest`] - Paginated reads

pub mod page;
pub mod user;

pub use page::{Page, PageRequest};
pub use user::{NewUser, UpdateUser, User};
