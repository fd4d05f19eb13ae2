//! Handlers for the user endpoints.
//!
//! Every handler takes an [`Envelope`] and returns the [`Reply`] produced by
//! its single terminal call. Failures short-circuit through
//! [`Respond::fail`].

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use serde_json::Value;

use crate::api::dto::pagination::PaginationParams;
use crate::api::dto::user::{CreateUserRequest, UpdateUserRequest};
use crate::api::envelope::{Envelope, Reply, Respond};
use crate::api::validation::{ValidationResult, validate_request};
use crate::state::AppState;

/// Lists users.
///
/// # Endpoint
///
/// `GET /users?page=&page_size=`
///
/// Both parameters are optional. An unparsable query is ignored and the
/// first page is served.
pub async fn list_users_handler(
    envelope: Envelope,
    State(state): State<AppState>,
    query: Result<Query<PaginationParams>, QueryRejection>,
) -> Reply {
    let params = match query {
        Ok(Query(params)) => params,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Ignoring unparsable pagination query");
            PaginationParams::default()
        }
    };

    let result = state
        .user_service
        .list_users(params.page, params.page_size)
        .await;

    envelope.finish(result, |env, page| env.content(page))
}

/// Fetches a user by id.
///
/// # Endpoint
///
/// `GET /users/{id}`
///
/// Replies 200 with an array holding the matching user, or an empty array
/// when there is none. This endpoint does not reply 404.
pub async fn get_user_handler(
    envelope: Envelope,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Reply {
    let result = state.user_service.find_user(&id).await;
    envelope.finish(result, |env, users| env.content(users))
}

/// Creates a user.
///
/// # Endpoint
///
/// `POST /users`
///
/// # Request Body
///
/// ```json
/// { "name": "A", "email": "a@x.com", "phone": "1", "password": "secret" }
/// ```
///
/// # Errors
///
/// Returns 400 with the validator payload if the body is invalid.
/// Returns 500 if hashing or storage fails.
pub async fn create_user_handler(
    envelope: Envelope,
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Reply {
    let data = match validate_request::<CreateUserRequest>(body) {
        ValidationResult::Data(data) => data,
        ValidationResult::Error(error) => return envelope.bad_request(error),
    };

    let result = state
        .user_service
        .create_user(data.name, data.email, data.phone, data.password)
        .await;

    envelope.finish(result, |env, user| env.created(user))
}

/// Updates name, email and phone of a user.
///
/// # Endpoint
///
/// `PUT /users/update/{id}`
///
/// # Errors
///
/// Returns 400 with the validator payload if the body is invalid.
/// Returns 404 `{"message": "user not found"}` if the user does not exist.
/// Returns 500 on storage errors.
pub async fn update_user_handler(
    envelope: Envelope,
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Reply {
    let data = match validate_request::<UpdateUserRequest>(body) {
        ValidationResult::Data(data) => data,
        ValidationResult::Error(error) => return envelope.bad_request(error),
    };

    let result = state.user_service.update_user(&id, data.into()).await;
    envelope.finish(result, |env, user| env.ok(user))
}

/// Deletes a user.
///
/// # Endpoint
///
/// `DELETE /users/{id}`
///
/// Replies 200 with the removed record.
///
/// # Errors
///
/// Returns 404 `{"message": "user not found"}` if the user does not exist.
/// Returns 500 on storage errors.
pub async fn delete_user_handler(
    envelope: Envelope,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Reply {
    let result = state.user_service.delete_user(&id).await;
    envelope.finish(result, |env, user| env.ok(user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::{UserService, UserServiceSettings};
    use crate::config::StorageBackend;
    use crate::domain::entities::{Page, User};
    use crate::domain::repositories::MockUserRepository;
    use crate::error::AppError;
    use crate::state::AppState;
    use axum::http::{Method, StatusCode};
    use chrono::Utc;
    use serde_json::json;
    use std::sync::Arc;

    fn state(mock_repo: MockUserRepository) -> State<AppState> {
        let service = UserService::new(
            Arc::new(mock_repo),
            UserServiceSettings {
                bcrypt_cost: 4,
                ..Default::default()
            },
        );
        State(AppState::new(Arc::new(service), StorageBackend::Memory))
    }

    fn envelope() -> Envelope {
        Envelope::new(Method::GET, "/users")
    }

    fn user(id: i64) -> User {
        User::new(
            id,
            "A".to_string(),
            "a@x.com".to_string(),
            "1".to_string(),
            "$2b$04$hash".to_string(),
            Utc::now(),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_list_storage_failure_is_500_with_message_only() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_paginate()
            .returning(|_| Err(AppError::internal("Database error")));

        let reply = list_users_handler(
            envelope(),
            state(mock_repo),
            Ok(Query(PaginationParams::default())),
        )
        .await;

        assert_eq!(reply.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(reply.into_body(), json!({"message": "Database error"}));
    }

    #[tokio::test]
    async fn test_list_returns_page() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_paginate()
            .returning(|req| Ok(Page::new(vec![user(1)], req, 1)));

        let reply = list_users_handler(
            envelope(),
            state(mock_repo),
            Ok(Query(PaginationParams::default())),
        )
        .await;

        assert_eq!(reply.status(), StatusCode::OK);
        let body = reply.into_body();
        assert_eq!(body["total"], 1);
        assert_eq!(body["data"][0]["id"], 1);
    }

    #[tokio::test]
    async fn test_get_missing_user_is_200_empty() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_find().returning(|_| Ok(vec![]));

        let reply = get_user_handler(envelope(), state(mock_repo), Path("12".to_string())).await;

        assert_eq!(reply.status(), StatusCode::OK);
        assert_eq!(reply.into_body(), json!([]));
    }

    #[tokio::test]
    async fn test_get_failure_without_message_is_generic() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_find()
            .returning(|_| Err(AppError::internal("")));

        let reply = get_user_handler(envelope(), state(mock_repo), Path("1".to_string())).await;

        assert_eq!(reply.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(reply.into_body(), json!({"message": "Server error"}));
    }

    #[tokio::test]
    async fn test_create_invalid_payload_never_stores() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_store().never();

        let reply = create_user_handler(
            envelope(),
            state(mock_repo),
            Ok(Json(json!({"name": "A", "email": "bad", "phone": "1", "password": "secret"}))),
        )
        .await;

        assert_eq!(reply.status(), StatusCode::BAD_REQUEST);
        assert!(reply.into_body().get("email").is_some());
    }

    #[tokio::test]
    async fn test_create_store_failure_is_500() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_store()
            .times(1)
            .returning(|_| Err(AppError::internal("Unique constraint violation")));

        let reply = create_user_handler(
            envelope(),
            state(mock_repo),
            Ok(Json(json!({"name": "A", "email": "a@x.com", "phone": "1", "password": "secret"}))),
        )
        .await;

        assert_eq!(reply.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = reply.into_body();
        assert!(body["message"].is_string());
        assert_eq!(body.as_object().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_invalid_payload_never_looks_up_or_writes() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_find().never();
        mock_repo.expect_update().never();

        let reply = update_user_handler(
            envelope(),
            state(mock_repo),
            Path("1".to_string()),
            Ok(Json(json!({"name": "A"}))),
        )
        .await;

        assert_eq!(reply.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_missing_user_is_404() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_find().returning(|_| Ok(vec![]));
        mock_repo.expect_update().never();

        let reply = update_user_handler(
            envelope(),
            state(mock_repo),
            Path("999".to_string()),
            Ok(Json(json!({"name": "A", "email": "a@x.com", "phone": "1"}))),
        )
        .await;

        assert_eq!(reply.status(), StatusCode::NOT_FOUND);
        assert_eq!(reply.into_body(), json!({"message": "user not found"}));
    }

    #[tokio::test]
    async fn test_delete_missing_user_is_404() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_find().returning(|_| Ok(vec![]));
        mock_repo.expect_destroy().never();

        let reply = delete_user_handler(envelope(), state(mock_repo), Path("5".to_string())).await;

        assert_eq!(reply.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_failure_is_500() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_find().returning(|id| Ok(vec![user(id)]));
        mock_repo
            .expect_destroy()
            .returning(|_| Err(AppError::internal("Database error")));

        let reply = delete_user_handler(envelope(), state(mock_repo), Path("5".to_string())).await;

        assert_eq!(reply.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(reply.into_body(), json!({"message": "Database error"}));
    }
}
