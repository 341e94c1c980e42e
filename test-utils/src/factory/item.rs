//! Item factory for creating test item entities.

use entity::item::{ItemRarity, ItemType, ItemWeaponRange, ItemWeaponType};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test items with customizable fields.
///
/// Defaults to a tier 1 common item with a unique slug and no weapon properties.
pub struct ItemFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::item::Model,
}

impl<'a> ItemFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();

        Self {
            db,
            entity: entity::item::Model {
                id: 0,
                slug: Some(format!("item-{}", id)),
                name: format!("Item {}", id),
                tier: 1,
                item_type: ItemType::Junk,
                rarity: ItemRarity::Common,
                weapon_type: None,
                weapon_range: None,
            },
        }
    }

    pub fn slug(mut self, slug: Option<String>) -> Self {
        self.entity.slug = slug;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn tier(mut self, tier: i32) -> Self {
        self.entity.tier = tier;
        self
    }

    pub fn item_type(mut self, item_type: ItemType) -> Self {
        self.entity.item_type = item_type;
        self
    }

    pub fn rarity(mut self, rarity: ItemRarity) -> Self {
        self.entity.rarity = rarity;
        self
    }

    /// Marks the item as a weapon with the given type and range.
    pub fn weapon(mut self, weapon_type: ItemWeaponType, weapon_range: ItemWeaponRange) -> Self {
        self.entity.item_type = ItemType::Weapon;
        self.entity.weapon_type = Some(weapon_type);
        self.entity.weapon_range = Some(weapon_range);
        self
    }

    /// Builds and inserts the item entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::item::Model)` - Created item entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::item::Model, DbErr> {
        entity::item::ActiveModel {
            id: ActiveValue::NotSet,
            slug: ActiveValue::Set(self.entity.slug),
            name: ActiveValue::Set(self.entity.name),
            tier: ActiveValue::Set(self.entity.tier),
            item_type: ActiveValue::Set(self.entity.item_type),
            rarity: ActiveValue::Set(self.entity.rarity),
            weapon_type: ActiveValue::Set(self.entity.weapon_type),
            weapon_range: ActiveValue::Set(self.entity.weapon_range),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a tier 1 common item with a unique slug.
pub async fn create_item(db: &DatabaseConnection) -> Result<entity::item::Model, DbErr> {
    ItemFactory::new(db).build().await
}
