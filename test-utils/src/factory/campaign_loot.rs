//! Campaign loot factory for creating test loot entities.

use entity::campaign_loot::CampaignLootStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test campaign loot with customizable fields.
///
/// Defaults to undistributed loot without a holder.
pub struct CampaignLootFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::campaign_loot::Model,
}

impl<'a> CampaignLootFactory<'a> {
    /// Creates a new CampaignLootFactory for the given campaign and item.
    pub fn new(db: &'a DatabaseConnection, campaign_id: i32, item_id: i32) -> Self {
        Self {
            db,
            entity: entity::campaign_loot::Model {
                id: 0,
                campaign_id,
                item_id,
                status: CampaignLootStatus::Undistributed,
                holder_id: None,
                comments: None,
            },
        }
    }

    pub fn status(mut self, status: CampaignLootStatus) -> Self {
        self.entity.status = status;
        self
    }

    pub fn holder_id(mut self, holder_id: Option<i32>) -> Self {
        self.entity.holder_id = holder_id;
        self
    }

    pub fn comments(mut self, comments: Option<String>) -> Self {
        self.entity.comments = comments;
        self
    }

    /// Builds and inserts the loot entity into the database.
    pub async fn build(self) -> Result<entity::campaign_loot::Model, DbErr> {
        entity::campaign_loot::ActiveModel {
            id: ActiveValue::NotSet,
            campaign_id: ActiveValue::Set(self.entity.campaign_id),
            item_id: ActiveValue::Set(self.entity.item_id),
            status: ActiveValue::Set(self.entity.status),
            holder_id: ActiveValue::Set(self.entity.holder_id),
            comments: ActiveValue::Set(self.entity.comments),
        }
        .insert(self.db)
        .await
    }
}

/// Creates undistributed loot for the given campaign and item.
pub async fn create_loot(
    db: &DatabaseConnection,
    campaign_id: i32,
    item_id: i32,
) -> Result<entity::campaign_loot::Model, DbErr> {
    CampaignLootFactory::new(db, campaign_id, item_id)
        .build()
        .await
}
