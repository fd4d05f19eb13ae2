//! In-memory implementation of the user repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::domain::entities::{NewUser, Page, PageRequest, UpdateUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

#[derive(Default)]
struct Store {
    next_id: i64,
    users: BTreeMap<i64, User>,
}

/// Process-local user storage.
///
/// Ids start at 1 and are never reused. Emails are unique, matching the
/// `users_email_key` constraint of the PostgreSQL schema.
#[derive(Default)]
pub struct InMemoryUserRepository {
    store: RwLock<Store>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn paginate(&self, request: PageRequest) -> Result<Page<User>, AppError> {
        let store = self.store.read().await;

        let skip = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let data = store
            .users
            .values()
            .skip(skip)
            .take(request.page_size as usize)
            .cloned()
            .collect();

        Ok(Page::new(data, request, store.users.len() as i64))
    }

    async fn find(&self, id: i64) -> Result<Vec<User>, AppError> {
        let store = self.store.read().await;
        Ok(store.users.get(&id).cloned().into_iter().collect())
    }

    async fn store(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut store = self.store.write().await;

        if store.users.values().any(|u| u.email == new_user.email) {
            return Err(AppError::internal("Unique constraint violation"));
        }

        store.next_id += 1;
        let now = Utc::now();
        let user = User::new(
            store.next_id,
            new_user.name,
            new_user.email,
            new_user.phone,
            new_user.password_hash,
            now,
            now,
        );
        store.users.insert(user.id, user.clone());

        Ok(user)
    }

    async fn update(&self, id: i64, update: UpdateUser) -> Result<Option<User>, AppError> {
        let mut store = self.store.write().await;

        if store
            .users
            .values()
            .any(|u| u.id != id && u.email == update.email)
        {
            return Err(AppError::internal("Unique constraint violation"));
        }

        let Some(user) = store.users.get_mut(&id) else {
            return Ok(None);
        };

        user.name = update.name;
        user.email = update.email;
        user.phone = update.phone;
        user.updated_at = Utc::now();

        Ok(Some(user.clone()))
    }

    async fn destroy(&self, id: i64) -> Result<Option<User>, AppError> {
        let mut store = self.store.write().await;
        Ok(store.users.remove(&id))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
