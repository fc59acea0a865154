use async_trait::async_trait;
use sea_orm::{sea_query::OnConflict, DatabaseConnection, EntityTrait, QueryOrder};
use uuid::Uuid;

use models::errors::ModelError;
use models::{todo, user};

use crate::domain::{Todo, User};
use crate::errors::ServiceError;
use crate::repository::{TodoRepository, UserRepository};

/// SeaORM-backed user repository. Email uniqueness is enforced by the
/// `user.email` unique constraint.
pub struct SeaOrmUserRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn get(&self, id: Uuid) -> Result<Option<User>, ServiceError> {
        let found = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(ServiceError::storage)?;
        Ok(found.map(User::from))
    }

    async fn put(&self, u: User) -> Result<User, ServiceError> {
        let am = user::active_model(u.id, &u.name, &u.email, u.created_at, u.updated_at);
        let saved = user::Entity::insert(am)
            .on_conflict(
                OnConflict::column(user::Column::Id)
                    .update_columns([user::Column::Name, user::Column::Email, user::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| match ModelError::from_db(e) {
                ModelError::Duplicate(_) => ServiceError::Conflict(u.email.clone()),
                other => other.into(),
            })?;
        Ok(User::from(saved))
    }

    async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let res = user::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(ServiceError::storage)?;
        if res.rows_affected == 0 {
            return Err(ServiceError::not_found(id));
        }
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<User>, ServiceError> {
        let rows = user::Entity::find()
            .order_by_asc(user::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(ServiceError::storage)?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ServiceError> {
        Ok(user::find_by_email(&self.db, email).await?.map(User::from))
    }
}

/// SeaORM-backed todo repository.
pub struct SeaOrmTodoRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl TodoRepository for SeaOrmTodoRepository {
    async fn get(&self, id: Uuid) -> Result<Option<Todo>, ServiceError> {
        let found = todo::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(ServiceError::storage)?;
        Ok(found.map(Todo::from))
    }

    async fn put(&self, t: Todo) -> Result<Todo, ServiceError> {
        let am = todo::active_model(t.id, &t.description, t.done, t.assigned_user_id, t.created_at, t.updated_at);
        let saved = todo::Entity::insert(am)
            .on_conflict(
                OnConflict::column(todo::Column::Id)
                    .update_columns([
                        todo::Column::Description,
                        todo::Column::Done,
                        todo::Column::AssignedUserId,
                        todo::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| ServiceError::from(ModelError::from_db(e)))?;
        Ok(Todo::from(saved))
    }

    async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let res = todo::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(ServiceError::storage)?;
        if res.rows_affected == 0 {
            return Err(ServiceError::not_found(id));
        }
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Todo>, ServiceError> {
        let rows = todo::Entity::find()
            .order_by_asc(todo::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(ServiceError::storage)?;
        Ok(rows.into_iter().map(Todo::from).collect())
    }

    async fn find_by_assigned_user_id(&self, user_id: Uuid) -> Result<Vec<Todo>, ServiceError> {
        let rows = todo::find_by_assigned_user_id(&self.db, user_id).await?;
        Ok(rows.into_iter().map(Todo::from).collect())
    }
}
