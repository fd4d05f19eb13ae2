//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::UserService;
use crate::config::StorageBackend;

/// Cloned per request by axum; everything inside is behind an `Arc` or `Copy`.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub storage_backend: StorageBackend,
}

impl AppState {
    pub fn new(user_service: Arc<UserService>, storage_backend: StorageBackend) -> Self {
        Self {
            user_service,
            storage_backend,
        }
    }
}
