use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum CampaignLootStatus {
    #[sea_orm(num_value = 0)]
    Undistributed,
    #[sea_orm(num_value = 1)]
    PendingDistribution,
    #[sea_orm(num_value = 2)]
    Distributed,
    #[sea_orm(num_value = 3)]
    OnLoan,
    #[sea_orm(num_value = 4)]
    Sold,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "campaign_loot")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub campaign_id: i32,
    pub item_id: i32,
    pub status: CampaignLootStatus,
    pub holder_id: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub comments: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::campaign::Entity",
        from = "Column::CampaignId",
        to = "super::campaign::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Campaign,
    #[sea_orm(
        belongs_to = "super::item::Entity",
        from = "Column::ItemId",
        to = "super::item::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Item,
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::HolderId",
        to = "super::player::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Holder,
    #[sea_orm(has_many = "super::loot_request::Entity")]
    LootRequest,
}

impl Related<super::campaign::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Campaign.def()
    }
}

impl Related<super::item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Item.def()
    }
}

impl Related<super::loot_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LootRequest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
