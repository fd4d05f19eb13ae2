//! PostgreSQL repository tests.
//!
//! Each test gets a fresh database from `#[sqlx::test]` with the migrations
//! applied. Run with `DATABASE_URL` set and `cargo test -- --ignored`.

mod common;

use serde_json::{Value, json};
use sqlx::PgPool;
use std::sync::Arc;
use user_api::domain::entities::{NewUser, PageRequest, UpdateUser};
use user_api::domain::repositories::UserRepository;
use user_api::infrastructure::persistence::PgUserRepository;

fn repository(pool: PgPool) -> PgUserRepository {
    PgUserRepository::new(Arc::new(pool))
}

fn new_user(email: &str) -> NewUser {
    NewUser {
        name: "Test".to_string(),
        email: email.to_string(),
        phone: "123".to_string(),
        password_hash: "$2b$04$hash".to_string(),
    }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_store_and_find(pool: PgPool) {
    let repo = repository(pool);

    let stored = repo.store(new_user("a@example.com")).await.unwrap();
    let found = repo.find(stored.id).await.unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, stored.id);
    assert_eq!(found[0].email, "a@example.com");
    assert_eq!(found[0].password, "$2b$04$hash");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_find_missing_is_empty(pool: PgPool) {
    let repo = repository(pool);

    assert!(repo.find(999).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_store_duplicate_email_is_unique_violation(pool: PgPool) {
    let repo = repository(pool);
    repo.store(new_user("dup@example.com")).await.unwrap();

    let err = repo.store(new_user("dup@example.com")).await.unwrap_err();

    assert_eq!(err.message(), Some("Unique constraint violation"));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_paginate(pool: PgPool) {
    let repo = repository(pool);
    for i in 0..5 {
        repo.store(new_user(&format!("u{i}@example.com"))).await.unwrap();
    }

    let page = repo.paginate(PageRequest::new(2, 2, 100)).await.unwrap();

    assert_eq!(page.total, 5);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.data[0].email, "u2@example.com");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_update_keeps_password(pool: PgPool) {
    let repo = repository(pool);
    let stored = repo.store(new_user("a@example.com")).await.unwrap();

    let updated = repo
        .update(
            stored.id,
            UpdateUser {
                name: "New".to_string(),
                email: "new@example.com".to_string(),
                phone: "999".to_string(),
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "New");
    assert_eq!(updated.email, "new@example.com");
    assert_eq!(updated.password, stored.password);
    assert!(updated.updated_at >= stored.updated_at);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_update_missing_is_none(pool: PgPool) {
    let repo = repository(pool);

    let result = repo
        .update(
            999,
            UpdateUser {
                name: "New".to_string(),
                email: "new@example.com".to_string(),
                phone: "999".to_string(),
            },
        )
        .await
        .unwrap();

    assert!(result.is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_destroy_twice(pool: PgPool) {
    let repo = repository(pool);
    let stored = repo.store(new_user("a@example.com")).await.unwrap();

    let removed = repo.destroy(stored.id).await.unwrap();
    assert_eq!(removed.map(|u| u.id), Some(stored.id));

    assert!(repo.destroy(stored.id).await.unwrap().is_none());
    assert!(repo.find(stored.id).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_ping(pool: PgPool) {
    let repo = repository(pool);

    assert!(repo.ping().await.is_ok());
}

// ─── HTTP OVER POSTGRES ──────────────────────────────────────────────────────

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_http_create_then_get(pool: PgPool) {
    let server = common::make_pg_server(pool);

    let created = common::create_user(&server, "A", "a@x.com").await;
    let id = created["id"].as_i64().unwrap();

    let response = server.get(&format!("/users/{id}")).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([created]));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_http_duplicate_email_is_500(pool: PgPool) {
    let server = common::make_pg_server(pool);
    common::create_user(&server, "A", "dup@x.com").await;

    let response = server
        .post("/users")
        .json(&common::user_body("B", "dup@x.com"))
        .await;

    response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "Unique constraint violation" })
    );
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_http_health_postgres(pool: PgPool) {
    let server = common::make_pg_server(pool);

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["checks"]["storage"]["message"],
        "postgres"
    );
}
