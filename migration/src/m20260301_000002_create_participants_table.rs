use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_activities_table::Activities;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Participants::Table)
                    .if_not_exists()
                    .col(string(Participants::ActivityName))
                    .col(string(Participants::Email))
                    .primary_key(
                        Index::create()
                            .col(Participants::ActivityName)
                            .col(Participants::Email),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_participants_activity_name")
                            .from(Participants::Table, Participants::ActivityName)
                            .to(Activities::Table, Activities::Name)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Participants::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Participants {
    Table,
    ActivityName,
    Email,
}
