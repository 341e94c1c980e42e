use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum ItemType {
    #[sea_orm(num_value = 0)]
    Unknown,
    #[sea_orm(num_value = 1)]
    Weapon,
    #[sea_orm(num_value = 2)]
    Armor,
    #[sea_orm(num_value = 3)]
    Medical,
    #[sea_orm(num_value = 4)]
    Food,
    #[sea_orm(num_value = 5)]
    Junk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum ItemRarity {
    #[sea_orm(num_value = 0)]
    Common,
    #[sea_orm(num_value = 1)]
    Uncommon,
    #[sea_orm(num_value = 2)]
    Rare,
    #[sea_orm(num_value = 3)]
    Elite,
    #[sea_orm(num_value = 4)]
    Epic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum ItemWeaponType {
    #[sea_orm(num_value = 0)]
    Blade,
    #[sea_orm(num_value = 1)]
    Handgun,
    #[sea_orm(num_value = 2)]
    Rifle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum ItemWeaponRange {
    #[sea_orm(num_value = 0)]
    Short,
    #[sea_orm(num_value = 1)]
    Long,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub slug: Option<String>,
    pub name: String,
    pub tier: i32,
    pub item_type: ItemType,
    pub rarity: ItemRarity,
    pub weapon_type: Option<ItemWeaponType>,
    pub weapon_range: Option<ItemWeaponRange>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::campaign_loot::Entity")]
    CampaignLoot,
}

impl Related<super::campaign_loot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CampaignLoot.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
