use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, UpdateUser, User, UserId};
use crate::store::UserStore;

/// Repository trait for User persistence
///
/// The only way handlers reach user records. Absence on reads is an
/// `Option`, not an error; callers decide whether it is one.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users in insertion order
    async fn list(&self) -> UserResult<Vec<User>>;

    /// Get a user by ID
    async fn get_by_id(&self, id: UserId) -> UserResult<Option<User>>;

    /// Users whose name contains `name`, ignoring case. An empty filter
    /// matches everyone.
    async fn search(&self, name: &str) -> UserResult<Vec<User>>;

    /// Create a new user with the next id
    async fn create(&self, input: CreateUser) -> UserResult<User>;

    /// Patch an existing user; `NotFound` when absent
    async fn update(&self, id: UserId, patch: UpdateUser) -> UserResult<User>;

    /// Delete a user by ID; `false` when there was nothing to delete
    async fn delete(&self, id: UserId) -> UserResult<bool>;

    /// Count total users
    async fn count(&self) -> UserResult<usize>;
}

/// In-memory implementation of UserRepository
///
/// Every operation holds the store lock for its whole duration and never
/// awaits while holding it, so multi-step mutations are atomic.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<UserStore>>,
}

impl InMemoryUserRepository {
    /// Empty repository
    pub fn new() -> Self {
        Self::with_store(UserStore::new())
    }

    /// Repository holding the startup records
    pub fn seeded() -> Self {
        Self::with_store(UserStore::seeded())
    }

    pub fn with_store(store: UserStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> UserResult<Vec<User>> {
        let store = self.store.read().await;
        Ok(store.iter().cloned().collect())
    }

    async fn get_by_id(&self, id: UserId) -> UserResult<Option<User>> {
        let store = self.store.read().await;
        Ok(store.get(id).cloned())
    }

    async fn search(&self, name: &str) -> UserResult<Vec<User>> {
        let needle = name.to_lowercase();
        let store = self.store.read().await;

        let result = store
            .iter()
            .filter(|u| u.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        Ok(result)
    }

    async fn create(&self, input: CreateUser) -> UserResult<User> {
        let mut store = self.store.write().await;
        let user = store.insert_new(input.name, input.is_admin);

        tracing::info!(user_id = user.id, name = %user.name, "Created user");
        Ok(user)
    }

    async fn update(&self, id: UserId, patch: UpdateUser) -> UserResult<User> {
        let mut store = self.store.write().await;
        let user = store.get_mut(id).ok_or(UserError::NotFound(id))?;

        user.apply_update(patch);

        tracing::info!(user_id = id, "Updated user");
        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> UserResult<bool> {
        let mut store = self.store.write().await;

        if store.remove(id).is_some() {
            tracing::info!(user_id = id, "Deleted user");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn count(&self) -> UserResult<usize> {
        let store = self.store.read().await;
        Ok(store.len())
    }
}
