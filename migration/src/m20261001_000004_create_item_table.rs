use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Item::Table)
                    .if_not_exists()
                    .col(pk_auto(Item::Id))
                    .col(string_null(Item::Slug).unique_key())
                    .col(string(Item::Name))
                    .col(integer(Item::Tier))
                    .col(integer(Item::ItemType))
                    .col(integer(Item::Rarity))
                    .col(integer_null(Item::WeaponType))
                    .col(integer_null(Item::WeaponRange))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Item::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Item {
    Table,
    Id,
    Slug,
    Name,
    Tier,
    ItemType,
    Rarity,
    WeaponType,
    WeaponRange,
}
