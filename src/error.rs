//! Request-level error type shared by services, repositories and handlers.
//!
//! Every variant maps onto exactly one envelope operation (see
//! [`crate::api::envelope::Respond::fail`]), so handlers never pick status
//! codes themselves.

use serde_json::{Value, json};
use thiserror::Error;

/// Generic message returned when an internal error carries no message.
pub const GENERIC_SERVER_ERROR: &str = "Server error";

#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or missing input. `details` is the validator's payload and is
    /// sent to the client verbatim.
    #[error("validation failed")]
    Validation { details: Value },

    #[error("{message}")]
    NotFound { message: String },

    /// Anything unexpected. Only `message` ever leaves the process.
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(details: Value) -> Self {
        Self::Validation { details }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Message suitable for a 500 body, or `None` when the error has nothing
    /// to say beyond "something broke".
    pub fn message(&self) -> Option<&str> {
        match self {
            AppError::Validation { .. } => None,
            AppError::NotFound { message } | AppError::Internal { message } => {
                Some(message.as_str()).filter(|m| !m.trim().is_empty())
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            tracing::warn!(constraint = ?db.constraint(), "Unique constraint violation");
            return AppError::internal("Unique constraint violation");
        }

        tracing::error!(error = %e, "Database error");
        AppError::internal("Database error")
    }
}

/// Renders validator errors as the per-field map sent in 400 replies.
pub fn validation_details(errors: &validator::ValidationErrors) -> Value {
    serde_json::to_value(errors).unwrap_or_else(|_| json!({}))
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::bad_request(validation_details(&errors))
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(e: bcrypt::BcryptError) -> Self {
        tracing::error!(error = %e, "Password hashing failed");
        AppError::internal("Failed to hash password")
    }
}
