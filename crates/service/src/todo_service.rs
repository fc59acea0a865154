use std::sync::Arc;

use tracing::{info, instrument, warn};
use uuid::Uuid;

use common::metrics::TODOS_CREATED_TOTAL;
use models::todo::validate_description;
use models::user::validate_email;

use crate::domain::{Todo, TodoView};
use crate::errors::ServiceError;
use crate::repository::{TodoRepository, UserRepository};
use crate::user_service::UserService;

/// Application service owning the todo lifecycle.
///
/// Assignees are addressed by email and resolved through [`UserService`] before
/// any write; only the resolved user id is stored.
pub struct TodoService<T, U>
where
    T: TodoRepository + ?Sized,
    U: UserRepository + ?Sized,
{
    repo: Arc<T>,
    users: Arc<UserService<U>>,
}

impl<T, U> TodoService<T, U>
where
    T: TodoRepository + ?Sized,
    U: UserRepository + ?Sized,
{
    pub fn new(repo: Arc<T>, users: Arc<UserService<U>>) -> Self { Self { repo, users } }

    /// Todos currently assigned to the user with this email.
    pub async fn get_by_assignee_email(&self, email: &str) -> Result<Vec<Todo>, ServiceError> {
        let user = self.users.get_by_email(email).await?;
        self.repo.find_by_assigned_user_id(user.id).await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Todo, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found(id))
    }

    /// Create an open todo for an existing user.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::storage::json_repo::{JsonTodoRepository, JsonUserRepository};
    /// use service::{todo_service::TodoService, user_service::UserService};
    /// let users = Arc::new(UserService::new(Arc::new(JsonUserRepository::in_memory())));
    /// let todos = TodoService::new(Arc::new(JsonTodoRepository::in_memory()), users.clone());
    /// let alice = tokio_test::block_on(users.create("Alice", "alice@example.com")).unwrap();
    /// let todo = tokio_test::block_on(todos.create("Buy milk", "alice@example.com")).unwrap();
    /// assert!(!todo.done);
    /// assert_eq!(todo.assigned_user_id, alice.id);
    /// ```
    #[instrument(skip(self))]
    pub async fn create(&self, description: &str, assignee_email: &str) -> Result<Todo, ServiceError> {
        validate_description(description)?;
        validate_email(assignee_email)?;
        let assignee = self.users.get_by_email(assignee_email).await?;
        let todo = self.repo.put(Todo::new(description, assignee.id)).await?;
        TODOS_CREATED_TOTAL.inc();
        info!(todo_id = %todo.id, user_id = %assignee.id, "todo_created");
        Ok(todo)
    }

    /// Set the completion flag. Setting the current value again is harmless.
    #[instrument(skip(self))]
    pub async fn set_done(&self, id: Uuid, done: bool) -> Result<Todo, ServiceError> {
        let existing = self.get_by_id(id).await?;
        let todo = self.repo.put(existing.with_done(done)).await?;
        info!(todo_id = %todo.id, done, "todo_done_set");
        Ok(todo)
    }

    #[instrument(skip(self))]
    pub async fn assign(&self, id: Uuid, new_assignee_email: &str) -> Result<Todo, ServiceError> {
        validate_email(new_assignee_email)?;
        let existing = self.get_by_id(id).await?;
        let assignee = self.users.get_by_email(new_assignee_email).await?;
        let todo = self.repo.put(existing.assigned_to(assignee.id)).await?;
        info!(todo_id = %todo.id, user_id = %assignee.id, "todo_assigned");
        Ok(todo)
    }

    #[instrument(skip(self))]
    pub async fn edit(&self, id: Uuid, new_description: &str) -> Result<Todo, ServiceError> {
        validate_description(new_description)?;
        let existing = self.get_by_id(id).await?;
        let todo = self.repo.put(existing.with_description(new_description)).await?;
        info!(todo_id = %todo.id, "todo_edited");
        Ok(todo)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        if !self.repo.exists(id).await? {
            return Err(ServiceError::not_found(id));
        }
        self.repo.delete(id).await?;
        info!(todo_id = %id, "todo_deleted");
        Ok(())
    }

    /// Resolve the assignee for presentation.
    ///
    /// A dangling assignee yields empty assignee fields instead of an error.
    pub async fn view(&self, todo: Todo) -> Result<TodoView, ServiceError> {
        match self.users.get_by_id(todo.assigned_user_id).await {
            Ok(user) => Ok(TodoView::new(todo, Some(&user))),
            Err(ServiceError::NotFound(_)) => {
                warn!(todo_id = %todo.id, user_id = %todo.assigned_user_id, "todo assignee no longer exists");
                Ok(TodoView::new(todo, None))
            }
            Err(e) => Err(e),
        }
    }

    /// Views for all todos of one assignee; the user is resolved once.
    pub async fn views_by_assignee_email(&self, email: &str) -> Result<Vec<TodoView>, ServiceError> {
        let user = self.users.get_by_email(email).await?;
        let todos = self.repo.find_by_assigned_user_id(user.id).await?;
        Ok(todos.into_iter().map(|t| TodoView::new(t, Some(&user))).collect())
    }
}
