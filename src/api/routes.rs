//! Route table for the user resource.

use crate::api::handlers::{
    create_user_handler, delete_user_handler, get_user_handler, list_users_handler,
    update_user_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, put},
};

/// User routes, relative to the mount point chosen by [`crate::routes::app_router`].
///
/// # Endpoints
///
/// - `GET    /`             - Paginated list
/// - `POST   /`             - Create a user
/// - `GET    /{id}`         - Fetch by id (array, possibly empty)
/// - `DELETE /{id}`         - Delete a user
/// - `PUT    /update/{id}`  - Update name, email and phone
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users_handler).post(create_user_handler))
        .route("/{id}", get(get_user_handler).delete(delete_user_handler))
        .route("/update/{id}", put(update_user_handler))
}
