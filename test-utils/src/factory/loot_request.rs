//! Loot request factory for creating test loot request entities.

use entity::loot_request::LootRequestStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test loot requests with customizable fields.
///
/// Defaults to an `Interested` request a player made for themselves.
pub struct LootRequestFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::loot_request::Model,
}

impl<'a> LootRequestFactory<'a> {
    /// Creates a new LootRequestFactory.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `loot_id` - Loot the request is for
    /// - `player_id` - Player making the request, and receiving the loot
    pub fn new(db: &'a DatabaseConnection, loot_id: i32, player_id: i32) -> Self {
        Self {
            db,
            entity: entity::loot_request::Model {
                id: 0,
                loot_id,
                requested_by_id: player_id,
                requested_for_id: player_id,
                status: LootRequestStatus::Interested,
                special_offer_description: None,
            },
        }
    }

    /// Sets the player the request was made on behalf of.
    pub fn requested_for(mut self, player_id: i32) -> Self {
        self.entity.requested_for_id = player_id;
        self
    }

    pub fn status(mut self, status: LootRequestStatus) -> Self {
        self.entity.status = status;
        self
    }

    pub fn special_offer_description(mut self, description: Option<String>) -> Self {
        self.entity.special_offer_description = description;
        self
    }

    /// Builds and inserts the loot request entity into the database.
    pub async fn build(self) -> Result<entity::loot_request::Model, DbErr> {
        entity::loot_request::ActiveModel {
            id: ActiveValue::NotSet,
            loot_id: ActiveValue::Set(self.entity.loot_id),
            requested_by_id: ActiveValue::Set(self.entity.requested_by_id),
            requested_for_id: ActiveValue::Set(self.entity.requested_for_id),
            status: ActiveValue::Set(self.entity.status),
            special_offer_description: ActiveValue::Set(self.entity.special_offer_description),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an `Interested` request by the player for themselves.
pub async fn create_loot_request(
    db: &DatabaseConnection,
    loot_id: i32,
    player_id: i32,
) -> Result<entity::loot_request::Model, DbErr> {
    LootRequestFactory::new(db, loot_id, player_id).build().await
}
