#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::{Value, json};
use sqlx::PgPool;
use std::sync::Arc;
use user_api::application::services::{UserService, UserServiceSettings};
use user_api::config::StorageBackend;
use user_api::domain::repositories::UserRepository;
use user_api::infrastructure::persistence::{InMemoryUserRepository, PgUserRepository};
use user_api::routes::api_router;
use user_api::state::AppState;

/// Lowest bcrypt cost; keeps hashing in tests fast.
pub const TEST_BCRYPT_COST: u32 = 4;

pub fn test_settings() -> UserServiceSettings {
    UserServiceSettings {
        bcrypt_cost: TEST_BCRYPT_COST,
        ..Default::default()
    }
}

pub fn create_test_state(
    repository: Arc<dyn UserRepository>,
    storage_backend: StorageBackend,
) -> AppState {
    let user_service = Arc::new(UserService::new(repository, test_settings()));
    AppState::new(user_service, storage_backend)
}

pub fn make_memory_server() -> TestServer {
    let state = create_test_state(
        Arc::new(InMemoryUserRepository::new()),
        StorageBackend::Memory,
    );
    TestServer::new(api_router(state)).unwrap()
}

pub fn make_pg_server(pool: PgPool) -> TestServer {
    let state = create_test_state(
        Arc::new(PgUserRepository::new(Arc::new(pool))),
        StorageBackend::Postgres,
    );
    TestServer::new(api_router(state)).unwrap()
}

pub fn user_body(name: &str, email: &str) -> Value {
    json!({
        "name": name,
        "email": email,
        "phone": "1",
        "password": "secret"
    })
}

/// Creates a user through the API and returns the response body.
pub async fn create_user(server: &TestServer, name: &str, email: &str) -> Value {
    let response = server.post("/users").json(&user_body(name, email)).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()
}
