//! bcrypt password hashing.
//!
//! Hashing is CPU-bound on purpose, so it runs on Tokio's blocking pool
//! instead of stalling a runtime worker.

use crate::error::AppError;

/// Work factor used when none is configured.
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Hashes `password` with a fresh random salt.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if `cost` is out of bcrypt's range or the
/// blocking task fails.
pub async fn hash_password(password: String, cost: u32) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Password hashing task failed");
            AppError::internal("Failed to hash password")
        })?
        .map_err(AppError::from)
}

/// Checks `password` against a stored bcrypt hash.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if `hash` is not a valid bcrypt hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    Ok(bcrypt::verify(password, hash)?)
}
