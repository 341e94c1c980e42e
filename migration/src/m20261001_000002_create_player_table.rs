use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000001_create_syndicate_table::Syndicate;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(pk_auto(Player::Id))
                    .col(string(Player::Name))
                    .col(boolean(Player::Active).default(true))
                    .col(double(Player::Level).default(1.0))
                    .col(integer_null(Player::SyndicateId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_syndicate_id")
                            .from(Player::Table, Player::SyndicateId)
                            .to(Syndicate::Table, Syndicate::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Player {
    Table,
    Id,
    Name,
    Active,
    Level,
    SyndicateId,
}
