//! Startup seeding of the demo user and todo.

use tracing::{debug, info};

use crate::errors::ServiceError;
use crate::repository::{TodoRepository, UserRepository};
use crate::todo_service::TodoService;
use crate::user_service::UserService;

pub const SEED_USER_NAME: &str = "Frodo Baggins";
pub const SEED_USER_EMAIL: &str = "frodo@theshire.me";
pub const SEED_TODO_DESCRIPTION: &str = "Take the ring to Mordor";

/// Ensure the demo user exists and has at least one todo.
///
/// Safe to run on every start. An existing demo user is kept as is; the demo
/// todo is only added while that user has no todos, which also completes a
/// seed that stopped between the two writes.
pub async fn seed_defaults<T, U>(users: &UserService<U>, todos: &TodoService<T, U>) -> Result<(), ServiceError>
where
    T: TodoRepository + ?Sized,
    U: UserRepository + ?Sized,
{
    let user = match users.get_by_email(SEED_USER_EMAIL).await {
        Ok(user) => user,
        Err(ServiceError::NotFound(_)) => match users.create(SEED_USER_NAME, SEED_USER_EMAIL).await {
            Ok(user) => user,
            // Another instance seeded concurrently
            Err(ServiceError::Conflict(_)) => users.get_by_email(SEED_USER_EMAIL).await?,
            Err(e) => return Err(e),
        },
        Err(e) => return Err(e),
    };

    if !todos.get_by_assignee_email(&user.email).await?.is_empty() {
        debug!(user_id = %user.id, "seed data already present");
        return Ok(());
    }
    todos.create(SEED_TODO_DESCRIPTION, &user.email).await?;
    info!(user_id = %user.id, "seed data created");
    Ok(())
}
