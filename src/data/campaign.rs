//! Campaign data repository.
//!
//! Provides `CampaignRepository` for creating, editing and querying campaigns, including
//! the bulk status change used when a campaign page import closes stale campaigns.

use chrono::{DateTime, Utc};
use entity::campaign::CampaignStatus;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::campaign::{Campaign, CampaignParams};

/// Statuses of campaigns that have not been concluded yet.
const OPEN_STATUSES: [CampaignStatus; 3] = [
    CampaignStatus::Unknown,
    CampaignStatus::Planned,
    CampaignStatus::InProgress,
];

/// Repository providing database operations for campaigns.
pub struct CampaignRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CampaignRepository<'a> {
    /// Creates a new CampaignRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CampaignRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a campaign by id.
    ///
    /// # Arguments
    /// - `id` - Campaign id
    ///
    /// # Returns
    /// - `Ok(Some(Campaign))` - Campaign found
    /// - `Ok(None)` - No campaign with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Campaign>, DbErr> {
        let entity = entity::prelude::Campaign::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Campaign::from_entity))
    }

    /// Gets every campaign of a syndicate, most recent first.
    ///
    /// # Arguments
    /// - `syndicate_id` - Owning syndicate
    ///
    /// # Returns
    /// - `Ok(Vec<Campaign>)` - Campaigns ordered by scheduled time descending
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_syndicate(&self, syndicate_id: i32) -> Result<Vec<Campaign>, DbErr> {
        let entities = entity::prelude::Campaign::find()
            .filter(entity::campaign::Column::SyndicateId.eq(syndicate_id))
            .order_by_desc(entity::campaign::Column::UtcDateTime)
            .order_by_desc(entity::campaign::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Campaign::from_entity).collect())
    }

    /// Creates a campaign from parameters.
    ///
    /// The `id` of the parameters is ignored. A manager id of `0` is stored as no manager.
    ///
    /// # Arguments
    /// - `params` - Campaign fields
    ///
    /// # Returns
    /// - `Ok(Campaign)` - The created campaign
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CampaignParams) -> Result<Campaign, DbErr> {
        let manager_id = params.manager();

        let entity = entity::campaign::ActiveModel {
            station: ActiveValue::Set(params.station),
            name: ActiveValue::Set(params.name),
            comments: ActiveValue::Set(params.comments),
            difficulty: ActiveValue::Set(params.difficulty),
            tiers: ActiveValue::Set(params.tiers),
            syndicate_id: ActiveValue::Set(params.syndicate_id),
            status: ActiveValue::Set(params.status),
            utc_date_time: ActiveValue::Set(params.utc_date_time),
            manager_id: ActiveValue::Set(manager_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Campaign::from_entity(entity))
    }

    /// Overwrites every editable field of an existing campaign.
    ///
    /// # Arguments
    /// - `id` - Campaign to update
    /// - `params` - New campaign fields, the `id` of the parameters is ignored
    ///
    /// # Returns
    /// - `Ok(Some(Campaign))` - The updated campaign
    /// - `Ok(None)` - No campaign with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, params: CampaignParams) -> Result<Option<Campaign>, DbErr> {
        let Some(entity) = entity::prelude::Campaign::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let manager_id = params.manager();
        let mut active = entity.into_active_model();
        active.station = ActiveValue::Set(params.station);
        active.name = ActiveValue::Set(params.name);
        active.comments = ActiveValue::Set(params.comments);
        active.difficulty = ActiveValue::Set(params.difficulty);
        active.tiers = ActiveValue::Set(params.tiers);
        active.syndicate_id = ActiveValue::Set(params.syndicate_id);
        active.status = ActiveValue::Set(params.status);
        active.utc_date_time = ActiveValue::Set(params.utc_date_time);
        active.manager_id = ActiveValue::Set(manager_id);

        let entity = active.update(self.db).await?;

        Ok(Some(Campaign::from_entity(entity)))
    }

    /// Sets the manager of a campaign.
    ///
    /// # Returns
    /// - `Ok(true)` - Campaign updated
    /// - `Ok(false)` - No campaign with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_manager(&self, id: i32, manager_id: Option<i32>) -> Result<bool, DbErr> {
        let result = entity::prelude::Campaign::update_many()
            .filter(entity::campaign::Column::Id.eq(id))
            .col_expr(entity::campaign::Column::ManagerId, Expr::value(manager_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Sets the status of a campaign.
    ///
    /// # Returns
    /// - `Ok(true)` - Campaign updated
    /// - `Ok(false)` - No campaign with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_status(&self, id: i32, status: CampaignStatus) -> Result<bool, DbErr> {
        let result = entity::prelude::Campaign::update_many()
            .filter(entity::campaign::Column::Id.eq(id))
            .col_expr(entity::campaign::Column::Status, Expr::value(status))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Finds the campaign of a syndicate scheduled at a station at an exact time.
    ///
    /// # Arguments
    /// - `syndicate_id` - Owning syndicate
    /// - `utc_date_time` - Scheduled time
    /// - `station` - Station name, compared exactly
    ///
    /// # Returns
    /// - `Ok(Some(Campaign))` - Matching campaign, the lowest id when several match
    /// - `Ok(None)` - No matching campaign
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_schedule(
        &self,
        syndicate_id: i32,
        utc_date_time: DateTime<Utc>,
        station: &str,
    ) -> Result<Option<Campaign>, DbErr> {
        let entity = entity::prelude::Campaign::find()
            .filter(entity::campaign::Column::SyndicateId.eq(syndicate_id))
            .filter(entity::campaign::Column::UtcDateTime.eq(utc_date_time))
            .filter(entity::campaign::Column::Station.eq(station))
            .order_by_asc(entity::campaign::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(Campaign::from_entity))
    }

    /// Marks every open campaign of a syndicate scheduled before `now` as completed.
    ///
    /// Open campaigns are those with status Unknown, Planned or InProgress.
    ///
    /// # Arguments
    /// - `syndicate_id` - Owning syndicate
    /// - `now` - Cut-off time, campaigns scheduled strictly before it are closed
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of campaigns closed
    /// - `Err(DbErr)` - Database error during update
    pub async fn close_past_open(&self, syndicate_id: i32, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::Campaign::update_many()
            .filter(entity::campaign::Column::SyndicateId.eq(syndicate_id))
            .filter(entity::campaign::Column::Status.is_in(OPEN_STATUSES))
            .filter(entity::campaign::Column::UtcDateTime.lt(now))
            .col_expr(
                entity::campaign::Column::Status,
                Expr::value(CampaignStatus::Completed),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
