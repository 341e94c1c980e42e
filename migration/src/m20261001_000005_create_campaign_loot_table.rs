use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000002_create_player_table::Player,
    m20261001_000003_create_campaign_table::Campaign, m20261001_000004_create_item_table::Item,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CampaignLoot::Table)
                    .if_not_exists()
                    .col(pk_auto(CampaignLoot::Id))
                    .col(integer(CampaignLoot::CampaignId))
                    .col(integer(CampaignLoot::ItemId))
                    .col(integer(CampaignLoot::Status))
                    .col(integer_null(CampaignLoot::HolderId))
                    .col(text_null(CampaignLoot::Comments))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_campaign_loot_campaign_id")
                            .from(CampaignLoot::Table, CampaignLoot::CampaignId)
                            .to(Campaign::Table, Campaign::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_campaign_loot_item_id")
                            .from(CampaignLoot::Table, CampaignLoot::ItemId)
                            .to(Item::Table, Item::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_campaign_loot_holder_id")
                            .from(CampaignLoot::Table, CampaignLoot::HolderId)
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
            .drop_table(Table::drop().table(CampaignLoot::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CampaignLoot {
    Table,
    Id,
    CampaignId,
    ItemId,
    Status,
    HolderId,
    Comments,
}
