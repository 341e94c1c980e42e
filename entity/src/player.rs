use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "player")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub active: bool,
    #[sea_orm(column_type = "Double")]
    pub level: f64,
    pub syndicate_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::syndicate::Entity",
        from = "Column::SyndicateId",
        to = "super::syndicate::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Syndicate,
    #[sea_orm(has_many = "super::campaign_attendance::Entity")]
    CampaignAttendance,
    #[sea_orm(has_many = "super::campaign_signup::Entity")]
    CampaignSignup,
    #[sea_orm(has_many = "super::player_list_position_history::Entity")]
    PlayerListPositionHistory,
}

impl Related<super::syndicate::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Syndicate.def()
    }
}

impl Related<super::campaign_attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CampaignAttendance.def()
    }
}

impl Related<super::campaign_signup::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CampaignSignup.def()
    }
}

impl Related<super::player_list_position_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerListPositionHistory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
