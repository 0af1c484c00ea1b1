use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260701_000001_create_user_table::User, m20260701_000002_create_event_table::Event,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Invitation::Table)
                    .if_not_exists()
                    .col(pk_auto(Invitation::Id))
                    .col(integer(Invitation::EventId))
                    .col(integer(Invitation::UserId))
                    .col(string(Invitation::Status))
                    .col(
                        timestamp(Invitation::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(Invitation::RespondedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invitation_event_id")
                            .from(Invitation::Table, Invitation::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invitation_user_id")
                            .from(Invitation::Table, Invitation::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One invitation per (event, user) pair.
        manager
            .create_index(
                Index::create()
                    .name("idx_invitation_event_user")
                    .table(Invitation::Table)
                    .col(Invitation::EventId)
                    .col(Invitation::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Invitation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Invitation {
    Table,
    Id,
    EventId,
    UserId,
    Status,
    CreatedAt,
    RespondedAt,
}
