//! Campaign loot repository.
//!
//! Loot rows are always loaded together with their item, so every method returns `Loot`
//! domain models carrying the item.

use entity::campaign_loot::CampaignLootStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::loot::Loot;

/// Repository providing database operations for loot dropped in campaigns.
pub struct CampaignLootRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CampaignLootRepository<'a> {
    /// Creates a new CampaignLootRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CampaignLootRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records an item as undistributed loot of a campaign.
    ///
    /// # Arguments
    /// - `campaign_id` - Campaign the item dropped in
    /// - `item_id` - Dropped item
    ///
    /// # Returns
    /// - `Ok(Loot)` - The created loot with its item
    /// - `Err(DbErr)` - Database error during insert or when the item cannot be loaded
    pub async fn create(&self, campaign_id: i32, item_id: i32) -> Result<Loot, DbErr> {
        let loot = entity::campaign_loot::ActiveModel {
            campaign_id: ActiveValue::Set(campaign_id),
            item_id: ActiveValue::Set(item_id),
            status: ActiveValue::Set(CampaignLootStatus::Undistributed),
            holder_id: ActiveValue::Set(None),
            comments: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.find_by_id(loot.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Loot with id {} not found after creation",
                loot.id
            )))
    }

    /// Finds loot by id together with its item.
    ///
    /// # Returns
    /// - `Ok(Some(Loot))` - Loot found
    /// - `Ok(None)` - No loot with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Loot>, DbErr> {
        let result = entity::prelude::CampaignLoot::find_by_id(id)
            .find_also_related(entity::prelude::Item)
            .one(self.db)
            .await?;

        result
            .map(|(loot, item)| Loot::from_entity(loot, item))
            .transpose()
    }

    /// Gets the loot of a campaign, lowest item tier first.
    pub async fn get_by_campaign(&self, campaign_id: i32) -> Result<Vec<Loot>, DbErr> {
        self.get_by_campaigns(&[campaign_id], false).await
    }

    /// Gets the loot of several campaigns, lowest item tier first.
    ///
    /// # Arguments
    /// - `campaign_ids` - Campaigns to load loot for
    /// - `undistributed_only` - Only return loot with status Undistributed
    ///
    /// # Returns
    /// - `Ok(Vec<Loot>)` - Loot ordered by item tier then id, empty for no campaign ids
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_campaigns(
        &self,
        campaign_ids: &[i32],
        undistributed_only: bool,
    ) -> Result<Vec<Loot>, DbErr> {
        if campaign_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut query = entity::prelude::CampaignLoot::find()
            .filter(entity::campaign_loot::Column::CampaignId.is_in(campaign_ids.to_vec()));

        if undistributed_only {
            query = query.filter(
                entity::campaign_loot::Column::Status.eq(CampaignLootStatus::Undistributed),
            );
        }

        let results = query
            .find_also_related(entity::prelude::Item)
            .order_by_asc(entity::item::Column::Tier)
            .order_by_asc(entity::campaign_loot::Column::Id)
            .all(self.db)
            .await?;

        results
            .into_iter()
            .map(|(loot, item)| Loot::from_entity(loot, item))
            .collect()
    }

    /// Sets the status and holder of loot.
    ///
    /// # Arguments
    /// - `id` - Loot to update
    /// - `status` - New status
    /// - `holder_id` - Player holding the loot afterwards, `None` clears the holder
    ///
    /// # Returns
    /// - `Ok(Some(Loot))` - The updated loot
    /// - `Ok(None)` - No loot with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_status(
        &self,
        id: i32,
        status: CampaignLootStatus,
        holder_id: Option<i32>,
    ) -> Result<Option<Loot>, DbErr> {
        let Some(loot) = entity::prelude::CampaignLoot::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = loot.into_active_model();
        active.status = ActiveValue::Set(status);
        active.holder_id = ActiveValue::Set(holder_id);
        active.update(self.db).await?;

        self.find_by_id(id).await
    }
}
