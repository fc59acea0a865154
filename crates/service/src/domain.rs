//! Domain records.
//!
//! Records are values: a mutation consumes the old record and returns a new one,
//! which the caller then persists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Fresh record with a generated id.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self { id: Uuid::new_v4(), name: name.into(), email: email.into(), created_at: now, updated_at: now }
    }

    /// Same user under a new display name; id and email are preserved.
    pub fn renamed(self, name: impl Into<String>) -> Self {
        Self { name: name.into(), updated_at: Utc::now(), ..self }
    }
}

impl From<models::user::Model> for User {
    fn from(m: models::user::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
            created_at: m.created_at.with_timezone(&Utc),
            updated_at: m.updated_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: Uuid,
    pub description: String,
    pub done: bool,
    pub assigned_user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// Open todo with a generated id.
    pub fn new(description: impl Into<String>, assigned_user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            done: false,
            assigned_user_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_done(self, done: bool) -> Self {
        Self { done, updated_at: Utc::now(), ..self }
    }

    pub fn assigned_to(self, user_id: Uuid) -> Self {
        Self { assigned_user_id: user_id, updated_at: Utc::now(), ..self }
    }

    pub fn with_description(self, description: impl Into<String>) -> Self {
        Self { description: description.into(), updated_at: Utc::now(), ..self }
    }
}

impl From<models::todo::Model> for Todo {
    fn from(m: models::todo::Model) -> Self {
        Self {
            id: m.id,
            description: m.description,
            done: m.done,
            assigned_user_id: m.assigned_user_id,
            created_at: m.created_at.with_timezone(&Utc),
            updated_at: m.updated_at.with_timezone(&Utc),
        }
    }
}

/// Outward view of a todo with its assignee resolved.
///
/// The assignee fields are `None` when the referenced user no longer exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoView {
    pub id: Uuid,
    pub description: String,
    pub done: bool,
    pub assignee_name: Option<String>,
    pub assignee_email: Option<String>,
}

impl TodoView {
    pub fn new(todo: Todo, assignee: Option<&User>) -> Self {
        Self {
            id: todo.id,
            description: todo.description,
            done: todo.done,
            assignee_name: assignee.map(|u| u.name.clone()),
            assignee_email: assignee.map(|u| u.email.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rename_preserves_identity() {
        let user = User::new("Alice", "alice@example.com");
        let (id, created) = (user.id, user.created_at);
        let renamed = user.renamed("Alicia");
        assert_eq!(renamed.id, id);
        assert_eq!(renamed.email, "alice@example.com");
        assert_eq!(renamed.name, "Alicia");
        assert_eq!(renamed.created_at, created);
        assert!(renamed.updated_at >= created);
    }

    #[test]
    fn todo_transitions_touch_only_their_field() {
        let owner = Uuid::new_v4();
        let todo = Todo::new("Buy milk", owner);
        assert!(!todo.done);

        let done = todo.clone().with_done(true);
        assert!(done.done);
        assert_eq!(done.description, "Buy milk");
        assert_eq!(done.assigned_user_id, owner);

        let other = Uuid::new_v4();
        let moved = done.assigned_to(other).with_description("Buy oat milk");
        assert_eq!(moved.id, todo.id);
        assert!(moved.done);
        assert_eq!(moved.assigned_user_id, other);
        assert_eq!(moved.description, "Buy oat milk");
    }

    #[test]
    fn view_serializes_camel_case_with_null_assignee() -> anyhow::Result<()> {
        let todo = Todo::new("Take the ring to Mordor", Uuid::new_v4());
        let json = serde_json::to_value(TodoView::new(todo, None))?;
        assert_eq!(json["description"], "Take the ring to Mordor");
        assert_eq!(json["done"], false);
        assert!(json["assigneeName"].is_null());
        assert!(json["assigneeEmail"].is_null());
        Ok(())
    }
}
