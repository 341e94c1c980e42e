//! Item domain models.

use entity::item::{ItemRarity, ItemType, ItemWeaponRange, ItemWeaponType};

/// Item stored in the local catalogue.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: i32,
    /// TauHead slug, absent for items entered by hand.
    pub slug: Option<String>,
    pub name: String,
    pub tier: i32,
    pub item_type: ItemType,
    pub rarity: ItemRarity,
    pub weapon_type: Option<ItemWeaponType>,
    pub weapon_range: Option<ItemWeaponRange>,
}

impl Item {
    /// Converts an entity model to an item domain model at the repository boundary.
    pub fn from_entity(entity: entity::item::Model) -> Self {
        Self {
            id: entity.id,
            slug: entity.slug,
            name: entity.name,
            tier: entity.tier,
            item_type: entity.item_type,
            rarity: entity.rarity,
            weapon_type: entity.weapon_type,
            weapon_range: entity.weapon_range,
        }
    }
}

/// Item metadata returned by an item lookup, not yet stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemData {
    pub slug: String,
    pub name: String,
    pub tier: i32,
    pub item_type: ItemType,
    pub rarity: ItemRarity,
    pub weapon_type: Option<ItemWeaponType>,
    pub weapon_range: Option<ItemWeaponRange>,
}
