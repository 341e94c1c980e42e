use entity::item::{ItemRarity, ItemType, ItemWeaponRange, ItemWeaponType};
use serde::Deserialize;

use crate::{error::tauhead::TauheadError, model::item::ItemData, util::label};

/// Item as returned by the TauHead API. Enum fields arrive as display names.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemDto {
    pub name: String,
    pub tier: i32,
    #[serde(rename = "type")]
    pub item_type: String,
    pub rarity: String,
    #[serde(default)]
    pub weapon_type: Option<String>,
    #[serde(default)]
    pub weapon_range: Option<String>,
}

impl ItemDto {
    pub fn into_item_data(self, slug: String) -> Result<ItemData, TauheadError> {
        let item_type = parse_value::<ItemType>(&slug, "type", &self.item_type)?;
        let rarity = parse_value::<ItemRarity>(&slug, "rarity", &self.rarity)?;
        let weapon_type = self
            .weapon_type
            .as_deref()
            .map(|v| parse_value::<ItemWeaponType>(&slug, "weapon_type", v))
            .transpose()?;
        let weapon_range = self
            .weapon_range
            .as_deref()
            .map(|v| parse_value::<ItemWeaponRange>(&slug, "weapon_range", v))
            .transpose()?;

        Ok(ItemData {
            slug,
            name: self.name,
            tier: self.tier,
            item_type,
            rarity,
            weapon_type,
            weapon_range,
        })
    }
}

fn parse_value<E>(slug: &str, field: &'static str, value: &str) -> Result<E, TauheadError>
where
    E: sea_orm::Iterable + std::fmt::Debug,
{
    label::parse::<E>(value).ok_or_else(|| TauheadError::UnknownValue {
        slug: slug.to_string(),
        field,
        value: value.to_string(),
    })
}
