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
                    .table(CampaignAttendance::Table)
                    .if_not_exists()
                    .col(pk_auto(CampaignAttendance::Id))
                    .col(integer(CampaignAttendance::CampaignId))
                    .col(integer(CampaignAttendance::PlayerId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_campaign_attendance_campaign_id")
                            .from(CampaignAttendance::Table, CampaignAttendance::CampaignId)
                            .to(Campaign::Table, Campaign::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_campaign_attendance_player_id")
                            .from(CampaignAttendance::Table, CampaignAttendance::PlayerId)
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
                    .name("idx_campaign_attendance_campaign_player")
                    .table(CampaignAttendance::Table)
                    .col(CampaignAttendance::CampaignId)
                    .col(CampaignAttendance::PlayerId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CampaignAttendance::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CampaignAttendance {
    Table,
    Id,
    CampaignId,
    PlayerId,
}
