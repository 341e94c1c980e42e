use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum LootRequestStatus {
    #[sea_orm(num_value = 0)]
    Interested,
    #[sea_orm(num_value = 1)]
    SpecialOffer,
    #[sea_orm(num_value = 2)]
    Awarded,
    #[sea_orm(num_value = 3)]
    Declined,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "loot_request")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub loot_id: i32,
    pub requested_by_id: i32,
    pub requested_for_id: i32,
    pub status: LootRequestStatus,
    #[sea_orm(column_type = "Text", nullable)]
    pub special_offer_description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::campaign_loot::Entity",
        from = "Column::LootId",
        to = "super::campaign_loot::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    CampaignLoot,
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::RequestedById",
        to = "super::player::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    RequestedBy,
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::RequestedForId",
        to = "super::player::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    RequestedFor,
}

impl Related<super::campaign_loot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CampaignLoot.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
