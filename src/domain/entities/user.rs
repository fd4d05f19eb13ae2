//! User entity.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A stored user.
///
/// `password` always holds a bcrypt hash. It is set once by
/// [`crate::domain::repositories::UserRepository::store`] and never changed by
/// updates.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        id: i64,
        name: String,
        email: String,
        phone: String,
        password: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            phone,
            password,
            created_at,
            updated_at,
        }
    }
}

/// Input data for creating a user.
///
/// `password_hash` must already be hashed; repositories store it as given.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password_hash: String,
}

/// Input data for updating a user. There is deliberately no password field.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateUser {
    pub name: String,
    pub email: String,
    pub phone: String,
}
