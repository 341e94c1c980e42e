//! Item catalogue repository.

use entity::item::ItemRarity;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::item::{Item, ItemData};

/// Repository providing database operations for catalogue items.
pub struct ItemRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds an item by its TauHead slug.
    ///
    /// # Returns
    /// - `Ok(Some(Item))` - Item with that slug
    /// - `Ok(None)` - No item with that slug
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Item>, DbErr> {
        let entity = entity::prelude::Item::find()
            .filter(entity::item::Column::Slug.eq(slug))
            .one(self.db)
            .await?;

        Ok(entity.map(Item::from_entity))
    }

    /// Inserts a looked-up item into the catalogue.
    ///
    /// # Returns
    /// - `Ok(Item)` - The created item
    /// - `Err(DbErr)` - Database error during insert, including a duplicate slug
    pub async fn create(&self, data: ItemData) -> Result<Item, DbErr> {
        let entity = active_model(data).insert(self.db).await?;

        Ok(Item::from_entity(entity))
    }

    /// Inserts an item or overwrites the item with the same slug.
    ///
    /// Every field except the id is replaced on conflict, so the stored item mirrors the
    /// looked-up data afterwards.
    ///
    /// # Returns
    /// - `Ok(Item)` - The created or updated item
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(&self, data: ItemData) -> Result<Item, DbErr> {
        let entity = entity::prelude::Item::insert(active_model(data))
            .on_conflict(
                OnConflict::column(entity::item::Column::Slug)
                    .update_columns([
                        entity::item::Column::Name,
                        entity::item::Column::Tier,
                        entity::item::Column::ItemType,
                        entity::item::Column::Rarity,
                        entity::item::Column::WeaponType,
                        entity::item::Column::WeaponRange,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await?;

        Ok(Item::from_entity(entity))
    }

    /// Gets every item of a rarity ordered by tier and name.
    pub async fn get_by_rarity(&self, rarity: ItemRarity) -> Result<Vec<Item>, DbErr> {
        let entities = entity::prelude::Item::find()
            .filter(entity::item::Column::Rarity.eq(rarity))
            .order_by_asc(entity::item::Column::Tier)
            .order_by_asc(entity::item::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Item::from_entity).collect())
    }
}

fn active_model(data: ItemData) -> entity::item::ActiveModel {
    entity::item::ActiveModel {
        slug: ActiveValue::Set(Some(data.slug)),
        name: ActiveValue::Set(data.name),
        tier: ActiveValue::Set(data.tier),
        item_type: ActiveValue::Set(data.item_type),
        rarity: ActiveValue::Set(data.rarity),
        weapon_type: ActiveValue::Set(data.weapon_type),
        weapon_range: ActiveValue::Set(data.weapon_range),
        ..Default::default()
    }
}
