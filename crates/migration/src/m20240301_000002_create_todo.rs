//! Create `todo` table.
//!
//! `assigned_user_id` is a plain reference column without a foreign key:
//! deleting a user leaves its todos in place.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Todo::Table)
                    .if_not_exists()
                    .col(uuid(Todo::Id).primary_key())
                    .col(text(Todo::Description).not_null())
                    .col(boolean(Todo::Done).not_null().default(false))
                    .col(uuid(Todo::AssignedUserId).not_null())
                    .col(timestamp_with_time_zone(Todo::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Todo::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Todo::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Todo { Table, Id, Description, Done, AssignedUserId, CreatedAt, UpdatedAt }
