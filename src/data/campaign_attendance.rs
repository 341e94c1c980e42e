//! Campaign attendance repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::attendance::CampaignAttendance;

/// Repository providing database operations for attendance records.
pub struct CampaignAttendanceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CampaignAttendanceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every attendance record of a player ordered by campaign.
    pub async fn get_by_player(&self, player_id: i32) -> Result<Vec<CampaignAttendance>, DbErr> {
        let entities = entity::prelude::CampaignAttendance::find()
            .filter(entity::campaign_attendance::Column::PlayerId.eq(player_id))
            .order_by_asc(entity::campaign_attendance::Column::CampaignId)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(CampaignAttendance::from_entity)
            .collect())
    }

    /// Gets every attendance record of the given campaigns.
    ///
    /// # Returns
    /// - `Ok(Vec<CampaignAttendance>)` - Records ordered by id, empty for no campaign ids
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_campaigns(
        &self,
        campaign_ids: &[i32],
    ) -> Result<Vec<CampaignAttendance>, DbErr> {
        if campaign_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::CampaignAttendance::find()
            .filter(entity::campaign_attendance::Column::CampaignId.is_in(campaign_ids.to_vec()))
            .order_by_asc(entity::campaign_attendance::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(CampaignAttendance::from_entity)
            .collect())
    }

    /// Records a player's attendance unless it was already recorded.
    ///
    /// # Arguments
    /// - `campaign_id` - Attended campaign
    /// - `player_id` - Attending player
    ///
    /// # Returns
    /// - `Ok(true)` - Attendance recorded
    /// - `Ok(false)` - Attendance already existed
    /// - `Err(DbErr)` - Database error during query or insert
    pub async fn create_if_missing(&self, campaign_id: i32, player_id: i32) -> Result<bool, DbErr> {
        let existing = entity::prelude::CampaignAttendance::find()
            .filter(entity::campaign_attendance::Column::CampaignId.eq(campaign_id))
            .filter(entity::campaign_attendance::Column::PlayerId.eq(player_id))
            .count(self.db)
            .await?;

        if existing > 0 {
            return Ok(false);
        }

        entity::campaign_attendance::ActiveModel {
            campaign_id: ActiveValue::Set(campaign_id),
            player_id: ActiveValue::Set(player_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(true)
    }
}
