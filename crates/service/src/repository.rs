use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Todo, User};
use crate::errors::ServiceError;

/// Persistence contract for users.
///
/// Each call is atomic for the single record it touches. Implementations must
/// reject a `put` that would give two users the same email with
/// [`ServiceError::Conflict`].
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get(&self, id: Uuid) -> Result<Option<User>, ServiceError>;
    /// Insert or replace by id.
    async fn put(&self, user: User) -> Result<User, ServiceError>;
    /// Fails with `NotFound` when nothing was removed.
    async fn delete(&self, id: Uuid) -> Result<(), ServiceError>;
    async fn find_all(&self) -> Result<Vec<User>, ServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ServiceError>;

    async fn exists(&self, id: Uuid) -> Result<bool, ServiceError> {
        Ok(self.get(id).await?.is_some())
    }
}

/// Persistence contract for todos.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    async fn get(&self, id: Uuid) -> Result<Option<Todo>, ServiceError>;
    /// Insert or replace by id.
    async fn put(&self, todo: Todo) -> Result<Todo, ServiceError>;
    /// Fails with `NotFound` when nothing was removed.
    async fn delete(&self, id: Uuid) -> Result<(), ServiceError>;
    async fn find_all(&self) -> Result<Vec<Todo>, ServiceError>;
    async fn find_by_assigned_user_id(&self, user_id: Uuid) -> Result<Vec<Todo>, ServiceError>;

    async fn exists(&self, id: Uuid) -> Result<bool, ServiceError> {
        Ok(self.get(id).await?.is_some())
    }
}
