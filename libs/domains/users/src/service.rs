use std::sync::Arc;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, ReplaceUser, User, UserFilter, UserId};
use crate::repository::UserRepository;

/// Service layer for User business logic
///
/// Turns repository absences into `UserError::NotFound` so every handler
/// reports missing users the same way.
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List users, narrowed by the name filter when one is given
    pub async fn list_users(&self, filter: UserFilter) -> UserResult<Vec<User>> {
        match filter.name.as_deref() {
            Some(name) if !name.is_empty() => self.repository.search(name).await,
            _ => self.repository.list().await,
        }
    }

    /// Get a user by ID
    pub async fn get_user(&self, id: UserId) -> UserResult<User> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    /// Create a new user
    pub async fn create_user(&self, input: CreateUser) -> UserResult<User> {
        self.repository.create(input).await
    }

    /// Replace a user from a full-shape body. Only the name is applied.
    ///
    /// The body id must match the path id; the check happens before the
    /// lookup so a mismatched request never mutates anything.
    pub async fn replace_user(&self, id: UserId, input: ReplaceUser) -> UserResult<User> {
        if input.id != id {
            return Err(UserError::IdMismatch {
                path: id,
                body: input.id,
            });
        }

        self.repository.update(id, input.into()).await
    }

    /// Delete a user
    pub async fn delete_user(&self, id: UserId) -> UserResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(UserError::NotFound(id));
        }

        Ok(())
    }
}
