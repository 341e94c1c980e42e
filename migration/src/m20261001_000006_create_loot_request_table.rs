use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000002_create_player_table::Player,
    m20261001_000005_create_campaign_loot_table::CampaignLoot,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LootRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(LootRequest::Id))
                    .col(integer(LootRequest::LootId))
                    .col(integer(LootRequest::RequestedById))
                    .col(integer(LootRequest::RequestedForId))
                    .col(integer(LootRequest::Status))
                    .col(text_null(LootRequest::SpecialOfferDescription))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_loot_request_loot_id")
                            .from(LootRequest::Table, LootRequest::LootId)
                            .to(CampaignLoot::Table, CampaignLoot::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_loot_request_requested_by_id")
                            .from(LootRequest::Table, LootRequest::RequestedById)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_loot_request_requested_for_id")
                            .from(LootRequest::Table, LootRequest::RequestedForId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LootRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LootRequest {
    Table,
    Id,
    LootId,
    RequestedById,
    RequestedForId,
    Status,
    SpecialOfferDescription,
}
