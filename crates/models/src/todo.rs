use sea_orm::{entity::prelude::*, Set};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "todo")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub done: bool,
    pub assigned_user_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_description(description: &str) -> Result<(), ModelError> {
    if description.trim().is_empty() {
        return Err(ModelError::validation("description", "description is required"));
    }
    Ok(())
}

/// Active model carrying every column, used for upserts.
pub fn active_model(
    id: Uuid,
    description: &str,
    done: bool,
    assigned_user_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
) -> ActiveModel {
    ActiveModel {
        id: Set(id),
        description: Set(description.to_string()),
        done: Set(done),
        assigned_user_id: Set(assigned_user_id),
        created_at: Set(created_at.into()),
        updated_at: Set(updated_at.into()),
    }
}

pub async fn find_by_assigned_user_id<C: ConnectionTrait>(db: &C, user_id: Uuid) -> Result<Vec<Model>, ModelError> {
    Entity::find()
        .filter(Column::AssignedUserId.eq(user_id))
        .all(db)
        .await
        .map_err(ModelError::from_db)
}
