//! User lifecycle service.

use crate::domain::entities::{NewUser, Page, PageRequest, UpdateUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::password::{DEFAULT_BCRYPT_COST, hash_password};
use std::sync::Arc;

/// Page served when the client does not ask for one.
pub const DEFAULT_PAGE: u32 = 1;

/// Message of every 404 produced by this service.
pub const USER_NOT_FOUND: &str = "user not found";

/// Tunables for [`UserService`].
#[derive(Debug, Clone, Copy)]
pub struct UserServiceSettings {
    pub bcrypt_cost: u32,
    pub default_page_size: u32,
    pub max_page_size: u32,
}

impl Default for UserServiceSettings {
    fn default() -> Self {
        Self {
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            default_page_size: 10,
            max_page_size: 100,
        }
    }
}

/// Service for creating, reading, updating and deleting users.
///
/// Ids arrive as raw path segments. A segment that is not an integer matches
/// no user, the same as an unknown id.
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    settings: UserServiceSettings,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(repository: Arc<dyn UserRepository>, settings: UserServiceSettings) -> Self {
        Self {
            repository,
            settings,
        }
    }

    /// Lists users, one page at a time.
    ///
    /// Missing `page` means [`DEFAULT_PAGE`]; missing `page_size` means the
    /// configured default. Out-of-range values are clamped.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_users(
        &self,
        page: Option<u32>,
        page_size: Option<u32>,
    ) -> Result<Page<User>, AppError> {
        let request = PageRequest::new(
            page.unwrap_or(DEFAULT_PAGE),
            page_size.unwrap_or(self.settings.default_page_size),
            self.settings.max_page_size,
        );

        self.repository.paginate(request).await
    }

    /// Looks a user up by raw id.
    ///
    /// Returns an empty vector when nothing matches; callers decide whether
    /// that is an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn find_user(&self, raw_id: &str) -> Result<Vec<User>, AppError> {
        match parse_id(raw_id) {
            Some(id) => self.repository.find(id).await,
            None => Ok(Vec::new()),
        }
    }

    /// Hashes the password and stores a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if hashing or storage fails.
    pub async fn create_user(
        &self,
        name: String,
        email: String,
        phone: String,
        password: String,
    ) -> Result<User, AppError> {
        let password_hash = hash_password(password, self.settings.bcrypt_cost).await?;

        let user = self
            .repository
            .store(NewUser {
                name,
                email,
                phone,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    /// Updates name, email and phone of an existing user.
    ///
    /// The password hash is never touched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist, either at
    /// lookup or by the time the write runs.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn update_user(&self, raw_id: &str, update: UpdateUser) -> Result<User, AppError> {
        let id = self.existing_id(raw_id).await?;

        let user = self
            .repository
            .update(id, update)
            .await?
            .ok_or_else(|| AppError::not_found(USER_NOT_FOUND))?;

        tracing::info!(user_id = id, "User updated");
        Ok(user)
    }

    /// Deletes an existing user and returns the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn delete_user(&self, raw_id: &str) -> Result<User, AppError> {
        let id = self.existing_id(raw_id).await?;

        let user = self
            .repository
            .destroy(id)
            .await?
            .ok_or_else(|| AppError::not_found(USER_NOT_FOUND))?;

        tracing::info!(user_id = id, "User deleted");
        Ok(user)
    }

    /// Checks that storage is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if it is not.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }

    /// Resolves `raw_id` to the id of a stored user, or fails with 404.
    async fn existing_id(&self, raw_id: &str) -> Result<i64, AppError> {
        let found = self.find_user(raw_id).await?;

        match found.first() {
            Some(user) => Ok(user.id),
            None => {
                tracing::debug!(raw_id, "User lookup found nothing");
                Err(AppError::not_found(USER_NOT_FOUND))
            }
        }
    }
}

fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}
