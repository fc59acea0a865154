//! User and todo repositories on top of [`JsonMapStore`].
//!
//! Used for the `file` and `memory` storage backends.

use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Todo, User};
use crate::errors::ServiceError;
use crate::repository::{TodoRepository, UserRepository};
use crate::storage::json_map_store::JsonMapStore;

pub struct JsonUserRepository {
    store: Arc<JsonMapStore<Uuid, User>>,
}

impl JsonUserRepository {
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Self, ServiceError> {
        Ok(Self { store: JsonMapStore::open(path).await? })
    }

    pub fn in_memory() -> Self {
        Self { store: JsonMapStore::in_memory() }
    }
}

#[async_trait]
impl UserRepository for JsonUserRepository {
    async fn get(&self, id: Uuid) -> Result<Option<User>, ServiceError> {
        Ok(self.store.get(&id).await)
    }

    async fn put(&self, user: User) -> Result<User, ServiceError> {
        // Unique email index, checked under the write lock.
        self.store
            .update_map(|m| {
                if m.values().any(|u| u.email == user.email && u.id != user.id) {
                    return Err(ServiceError::Conflict(user.email.clone()));
                }
                m.insert(user.id, user.clone());
                Ok(())
            })
            .await?;
        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        self.store
            .update_map(|m| m.remove(&id).map(|_| ()).ok_or_else(|| ServiceError::not_found(id)))
            .await
    }

    async fn find_all(&self) -> Result<Vec<User>, ServiceError> {
        let mut users = self.store.values().await;
        users.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(users)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ServiceError> {
        Ok(self.store.find(|u| u.email == email).await)
    }
}

pub struct JsonTodoRepository {
    store: Arc<JsonMapStore<Uuid, Todo>>,
}

impl JsonTodoRepository {
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Self, ServiceError> {
        Ok(Self { store: JsonMapStore::open(path).await? })
    }

    pub fn in_memory() -> Self {
        Self { store: JsonMapStore::in_memory() }
    }
}

fn by_creation(todos: &mut [Todo]) {
    todos.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
}

#[async_trait]
impl TodoRepository for JsonTodoRepository {
    async fn get(&self, id: Uuid) -> Result<Option<Todo>, ServiceError> {
        Ok(self.store.get(&id).await)
    }

    async fn put(&self, todo: Todo) -> Result<Todo, ServiceError> {
        self.store
            .update_map(|m| {
                m.insert(todo.id, todo.clone());
                Ok(())
            })
            .await?;
        Ok(todo)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        self.store
            .update_map(|m| m.remove(&id).map(|_| ()).ok_or_else(|| ServiceError::not_found(id)))
            .await
    }

    async fn find_all(&self) -> Result<Vec<Todo>, ServiceError> {
        let mut todos = self.store.values().await;
        by_creation(&mut todos);
        Ok(todos)
    }

    async fn find_by_assigned_user_id(&self, user_id: Uuid) -> Result<Vec<Todo>, ServiceError> {
        let mut todos = self.store.filter(|t| t.assigned_user_id == user_id).await;
        by_creation(&mut todos);
        Ok(todos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn user_put_enforces_unique_email() -> Result<(), anyhow::Error> {
        let repo = JsonUserRepository::in_memory();
        let alice = repo.put(User::new("Alice", "alice@example.com")).await?;

        // replacing the same record keeps its email
        repo.put(alice.clone().renamed("Alicia")).await?;

        let dup = repo.put(User::new("Other Alice", "alice@example.com")).await;
        assert!(matches!(dup, Err(ServiceError::Conflict(ref e)) if e == "alice@example.com"));
        assert_eq!(repo.find_all().await?.len(), 1);
        assert_eq!(repo.find_by_email("alice@example.com").await?.map(|u| u.name), Some("Alicia".to_string()));
        Ok(())
    }

    #[tokio::test]
    async fn delete_of_absent_record_is_not_found() -> Result<(), anyhow::Error> {
        let users = JsonUserRepository::in_memory();
        assert!(matches!(users.delete(Uuid::new_v4()).await, Err(ServiceError::NotFound(_))));

        let todos = JsonTodoRepository::in_memory();
        let t = todos.put(Todo::new("Buy milk", Uuid::new_v4())).await?;
        assert!(todos.exists(t.id).await?);
        todos.delete(t.id).await?;
        assert!(!todos.exists(t.id).await?);
        assert!(matches!(todos.delete(t.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn file_backed_repositories_survive_reopen() -> Result<(), anyhow::Error> {
        let dir = std::env::temp_dir().join(format!("json_repo_{}", Uuid::new_v4()));
        let users = JsonUserRepository::open(dir.join("users.json")).await?;
        let todos = JsonTodoRepository::open(dir.join("todos.json")).await?;

        let frodo = users.put(User::new("Frodo Baggins", "frodo@theshire.me")).await?;
        todos.put(Todo::new("Take the ring to Mordor", frodo.id)).await?;
        todos.put(Todo::new("Leave the Shire", frodo.id)).await?;
        todos.put(Todo::new("Unrelated", Uuid::new_v4())).await?;

        let users = JsonUserRepository::open(dir.join("users.json")).await?;
        let todos = JsonTodoRepository::open(dir.join("todos.json")).await?;
        assert_eq!(users.get(frodo.id).await?, Some(frodo.clone()));
        let mine = todos.find_by_assigned_user_id(frodo.id).await?;
        assert_eq!(mine.len(), 2);
        assert_eq!(todos.find_all().await?.len(), 3);

        let _ = tokio::fs::remove_dir_all(&dir).await;
        Ok(())
    }

    #[tokio::test]
    async fn failed_write_leaves_no_record_behind() -> Result<(), anyhow::Error> {
        let dir = std::env::temp_dir().join(format!("json_repo_gone_{}", Uuid::new_v4()));
        let users = JsonUserRepository::open(dir.join("users.json")).await?;
        let todos = JsonTodoRepository::open(dir.join("todos.json")).await?;
        tokio::fs::remove_dir_all(&dir).await?;

        let alice = User::new("Alice", "alice@example.com");
        assert!(matches!(users.put(alice.clone()).await, Err(ServiceError::Storage(_))));
        assert!(users.get(alice.id).await?.is_none());
        assert!(users.find_by_email("alice@example.com").await?.is_none());

        let todo = Todo::new("Buy milk", alice.id);
        assert!(todos.put(todo.clone()).await.is_err());
        assert!(todos.get(todo.id).await?.is_none());
        Ok(())
    }
}
