//! Campaign signup repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::attendance::CampaignSignup;

pub struct CampaignSignupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CampaignSignupRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a player's signup for a campaign.
    pub async fn find(
        &self,
        campaign_id: i32,
        player_id: i32,
    ) -> Result<Option<CampaignSignup>, DbErr> {
        let entity = entity::prelude::CampaignSignup::find()
            .filter(entity::campaign_signup::Column::CampaignId.eq(campaign_id))
            .filter(entity::campaign_signup::Column::PlayerId.eq(player_id))
            .one(self.db)
            .await?;

        Ok(entity.map(CampaignSignup::from_entity))
    }

    /// Signs a player up for a campaign.
    ///
    /// # Returns
    /// - `Ok(CampaignSignup)` - The created signup
    /// - `Err(DbErr)` - Database error during insert, including a duplicate signup
    pub async fn create(
        &self,
        campaign_id: i32,
        player_id: i32,
        attending: bool,
    ) -> Result<CampaignSignup, DbErr> {
        let entity = entity::campaign_signup::ActiveModel {
            campaign_id: ActiveValue::Set(campaign_id),
            player_id: ActiveValue::Set(player_id),
            attending: ActiveValue::Set(attending),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(CampaignSignup::from_entity(entity))
    }

    /// Removes a player's signup for a campaign.
    ///
    /// # Returns
    /// - `Ok(true)` - Signup removed
    /// - `Ok(false)` - The player was not signed up
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, campaign_id: i32, player_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::CampaignSignup::delete_many()
            .filter(entity::campaign_signup::Column::CampaignId.eq(campaign_id))
            .filter(entity::campaign_signup::Column::PlayerId.eq(player_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets every signup of a player ordered by campaign.
    pub async fn get_by_player(&self, player_id: i32) -> Result<Vec<CampaignSignup>, DbErr> {
        let entities = entity::prelude::CampaignSignup::find()
            .filter(entity::campaign_signup::Column::PlayerId.eq(player_id))
            .order_by_asc(entity::campaign_signup::Column::CampaignId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(CampaignSignup::from_entity).collect())
    }
}
