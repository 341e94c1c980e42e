use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000002_create_player_table::Player,
    m20261001_000006_create_loot_request_table::LootRequest,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerListPositionHistory::Table)
                    .if_not_exists()
                    .col(pk_auto(PlayerListPositionHistory::Id))
                    .col(integer(PlayerListPositionHistory::PlayerId))
                    .col(integer_null(PlayerListPositionHistory::LootRequestId))
                    .col(text_null(PlayerListPositionHistory::Comment))
                    .col(timestamp_with_time_zone(PlayerListPositionHistory::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_position_history_player_id")
                            .from(
                                PlayerListPositionHistory::Table,
                                PlayerListPositionHistory::PlayerId,
                            )
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_position_history_loot_request_id")
                            .from(
                                PlayerListPositionHistory::Table,
                                PlayerListPositionHistory::LootRequestId,
                            )
                            .to(LootRequest::Table, LootRequest::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(PlayerListPositionHistory::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlayerListPositionHistory {
    Table,
    Id,
    PlayerId,
    LootRequestId,
    Comment,
    CreatedAt,
}
