//! Player list position history factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating position history entries with customizable fields.
pub struct PositionHistoryFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::player_list_position_history::Model,
}

impl<'a> PositionHistoryFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, player_id: i32) -> Self {
        Self {
            db,
            entity: entity::player_list_position_history::Model {
                id: 0,
                player_id,
                loot_request_id: None,
                comment: Some("Moved to bottom".to_string()),
                created_at: Utc::now(),
            },
        }
    }

    pub fn loot_request_id(mut self, loot_request_id: Option<i32>) -> Self {
        self.entity.loot_request_id = loot_request_id;
        self
    }

    pub fn comment(mut self, comment: Option<String>) -> Self {
        self.entity.comment = comment;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.entity.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::player_list_position_history::Model, DbErr> {
        entity::player_list_position_history::ActiveModel {
            id: ActiveValue::NotSet,
            player_id: ActiveValue::Set(self.entity.player_id),
            loot_request_id: ActiveValue::Set(self.entity.loot_request_id),
            comment: ActiveValue::Set(self.entity.comment),
            created_at: ActiveValue::Set(self.entity.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a history entry for the player at the given time.
pub async fn create_position_history(
    db: &DatabaseConnection,
    player_id: i32,
    created_at: DateTime<Utc>,
) -> Result<entity::player_list_position_history::Model, DbErr> {
    PositionHistoryFactory::new(db, player_id)
        .created_at(created_at)
        .build()
        .await
}
