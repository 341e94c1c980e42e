use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000002_create_player_table::Player,
    m20261001_000003_create_campaign_table::Campaign,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CampaignSignup::Table)
                    .if_not_exists()
                    .col(pk_auto(CampaignSignup::Id))
                    .col(integer(CampaignSignup::CampaignId))
                    .col(integer(CampaignSignup::PlayerId))
                    .col(boolean(CampaignSignup::Attending).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_campaign_signup_campaign_id")
                            .from(CampaignSignup::Table, CampaignSignup::CampaignId)
                            .to(Campaign::Table, Campaign::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_campaign_signup_player_id")
                            .from(CampaignSignup::Table, CampaignSignup::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_campaign_signup_campaign_player")
                    .table(CampaignSignup::Table)
                    .col(CampaignSignup::CampaignId)
                    .col(CampaignSignup::PlayerId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CampaignSignup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CampaignSignup {
    Table,
    Id,
    CampaignId,
    PlayerId,
    Attending,
}
