use std::sync::Arc;

use tracing::{debug, info, instrument};
use uuid::Uuid;

use common::metrics::USERS_CREATED_TOTAL;
use models::user::{validate_email, validate_name};

use crate::domain::User;
use crate::errors::ServiceError;
use crate::repository::UserRepository;

/// Application service owning the user lifecycle.
///
/// Email uniqueness is checked here first and enforced again by the
/// repository, which closes the gap between the lookup and the write.
pub struct UserService<R: UserRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: UserRepository + ?Sized> UserService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn get_all(&self) -> Result<Vec<User>, ServiceError> {
        self.repo.find_all().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<User, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found(id))
    }

    pub async fn get_by_email(&self, email: &str) -> Result<User, ServiceError> {
        self.repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| ServiceError::not_found(email))
    }

    /// Create a user with a unique email.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::{storage::json_repo::JsonUserRepository, user_service::UserService};
    /// let users = UserService::new(Arc::new(JsonUserRepository::in_memory()));
    /// let alice = tokio_test::block_on(users.create("Alice", "alice@example.com")).unwrap();
    /// assert_eq!(alice.email, "alice@example.com");
    /// assert!(tokio_test::block_on(users.create("Again", "alice@example.com")).is_err());
    /// ```
    #[instrument(skip(self))]
    pub async fn create(&self, name: &str, email: &str) -> Result<User, ServiceError> {
        validate_name(name)?;
        validate_email(email)?;
        if let Some(existing) = self.repo.find_by_email(email).await? {
            debug!(user_id = %existing.id, "email already taken");
            return Err(ServiceError::Conflict(email.to_string()));
        }

        let user = self.repo.put(User::new(name, email)).await?;
        USERS_CREATED_TOTAL.inc();
        info!(user_id = %user.id, "user_created");
        Ok(user)
    }

    #[instrument(skip(self))]
    pub async fn rename(&self, id: Uuid, new_name: &str) -> Result<User, ServiceError> {
        validate_name(new_name)?;
        let existing = self.get_by_id(id).await?;
        let user = self.repo.put(existing.renamed(new_name)).await?;
        info!(user_id = %user.id, "user_renamed");
        Ok(user)
    }

    /// Remove a user. Todos still assigned to it are left in place.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        if !self.repo.exists(id).await? {
            return Err(ServiceError::not_found(id));
        }
        self.repo.delete(id).await?;
        info!(user_id = %id, "user_deleted");
        Ok(())
    }
}
