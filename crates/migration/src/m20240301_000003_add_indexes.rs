use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Todo: lookups by assignee
        manager
            .create_index(
                Index::create()
                    .name("idx_todo_assigned_user")
                    .table(Todo::Table)
                    .col(Todo::AssignedUserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_todo_assigned_user").table(Todo::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Todo { Table, AssignedUserId }
