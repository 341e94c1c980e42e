use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DiscordOfficer::Table)
                    .if_not_exists()
                    .col(pk_auto(DiscordOfficer::Id))
                    .col(string_uniq(DiscordOfficer::LoginName))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DiscordOfficer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DiscordOfficer {
    Table,
    Id,
    LoginName,
}
