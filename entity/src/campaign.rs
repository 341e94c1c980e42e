use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum CampaignDifficulty {
    #[sea_orm(num_value = 0)]
    Easy,
    #[sea_orm(num_value = 1)]
    Normal,
    #[sea_orm(num_value = 2)]
    Hard,
    #[sea_orm(num_value = 3)]
    Extreme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum CampaignStatus {
    #[sea_orm(num_value = 0)]
    Unknown,
    #[sea_orm(num_value = 1)]
    Planned,
    #[sea_orm(num_value = 2)]
    InProgress,
    #[sea_orm(num_value = 3)]
    Completed,
    #[sea_orm(num_value = 4)]
    Failed,
    #[sea_orm(num_value = 5)]
    Skipped,
    #[sea_orm(num_value = 6)]
    Abandoned,
    #[sea_orm(num_value = 7)]
    Cancelled,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "campaign")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub station: String,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub comments: Option<String>,
    pub difficulty: CampaignDifficulty,
    pub tiers: i32,
    pub syndicate_id: Option<i32>,
    pub status: CampaignStatus,
    pub utc_date_time: DateTimeUtc,
    pub manager_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::syndicate::Entity",
        from = "Column::SyndicateId",
        to = "super::syndicate::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Syndicate,
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::ManagerId",
        to = "super::player::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Manager,
    #[sea_orm(has_many = "super::campaign_loot::Entity")]
    CampaignLoot,
    #[sea_orm(has_many = "super::campaign_signup::Entity")]
    CampaignSignup,
    #[sea_orm(has_many = "super::campaign_attendance::Entity")]
    CampaignAttendance,
}

impl Related<super::syndicate::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Syndicate.def()
    }
}

impl Related<super::campaign_loot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CampaignLoot.def()
    }
}

impl Related<super::campaign_signup::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CampaignSignup.def()
    }
}

impl Related<super::campaign_attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CampaignAttendance.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
