//! Repository trait for user records.

use crate::domain::entities::{NewUser, Page, PageRequest, UpdateUser, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Data-access capability for users.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::InMemoryUserRepository`] - process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns one page of users ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn paginate(&self, request: PageRequest) -> Result<Page<User>, AppError>;

    /// Looks a user up by id.
    ///
    /// Returns an empty vector when nothing matches, never an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find(&self, id: i64) -> Result<Vec<User>, AppError>;

    /// Inserts a new user and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors, including a duplicate email.
    async fn store(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Updates name, email and phone in a single conditional write.
    ///
    /// Returns `None` if no user with `id` exists at the time of the write.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn update(&self, id: i64, update: UpdateUser) -> Result<Option<User>, AppError>;

    /// Removes a user in a single conditional delete and returns the removed record.
    ///
    /// Returns `None` if no user with `id` exists at the time of the delete.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn destroy(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Checks that the backing store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be reached.
    async fn ping(&self) -> Result<(), AppError>;
}
