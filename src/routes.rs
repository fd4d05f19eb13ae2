//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`  - Storage health check
//! - `/users/*`      - User resource (see [`crate::api::routes::user_routes`])
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling, so `/users/` and
//!   `/users` hit the same handler

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Path the user resource is mounted under.
pub const USERS_BASE_PATH: &str = "/users";

/// Builds the route table with its middleware, without path normalization.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest(USERS_BASE_PATH, api::routes::user_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Builds the complete route table. Called once at startup; the result is
/// handed to the listener in [`crate::server::run`].
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(api_router(state))
}
