use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000001_create_syndicate_table::Syndicate,
    m20261001_000002_create_player_table::Player,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Campaign::Table)
                    .if_not_exists()
                    .col(pk_auto(Campaign::Id))
                    .col(string(Campaign::Station))
                    .col(string(Campaign::Name))
                    .col(text_null(Campaign::Comments))
                    .col(integer(Campaign::Difficulty))
                    .col(integer(Campaign::Tiers))
                    .col(integer_null(Campaign::SyndicateId))
                    .col(integer(Campaign::Status))
                    .col(timestamp_with_time_zone(Campaign::UtcDateTime))
                    .col(integer_null(Campaign::ManagerId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_campaign_syndicate_id")
                            .from(Campaign::Table, Campaign::SyndicateId)
                            .to(Syndicate::Table, Syndicate::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_campaign_manager_id")
                            .from(Campaign::Table, Campaign::ManagerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Campaign::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Campaign {
    Table,
    Id,
    Station,
    Name,
    Comments,
    Difficulty,
    Tiers,
    SyndicateId,
    Status,
    UtcDateTime,
    ManagerId,
}
