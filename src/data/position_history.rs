//! Player list position history repository.
//!
//! Every row records a player being moved to the bottom of the loot distribution order.
//! A player's position is decided by their most recent row.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::loot::PositionHistoryEntry;

/// Repository providing database operations for position history.
pub struct PositionHistoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PositionHistoryRepository<'a> {
    /// Creates a new PositionHistoryRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PositionHistoryRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a history row for a player, timestamped now.
    ///
    /// # Arguments
    /// - `player_id` - Player moved to the bottom
    /// - `loot_request_id` - Request whose award caused the move
    /// - `comment` - Free text reason
    ///
    /// # Returns
    /// - `Ok(PositionHistoryEntry)` - The created entry
    /// - `Err(DbErr)` - Database error during insert
    pub async fn append(
        &self,
        player_id: i32,
        loot_request_id: Option<i32>,
        comment: Option<String>,
    ) -> Result<PositionHistoryEntry, DbErr> {
        let entity = entity::player_list_position_history::ActiveModel {
            player_id: ActiveValue::Set(player_id),
            loot_request_id: ActiveValue::Set(loot_request_id),
            comment: ActiveValue::Set(comment),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(PositionHistoryEntry::from_entity(entity))
    }

    /// Gets the most recent entry of each given player.
    ///
    /// Entries are compared by timestamp, then by id, so the later insert wins ties.
    ///
    /// # Arguments
    /// - `player_ids` - Players to look up
    ///
    /// # Returns
    /// - `Ok(HashMap<i32, PositionHistoryEntry>)` - Latest entry keyed by player id,
    ///   players without history have no entry
    /// - `Err(DbErr)` - Database error during query
    pub async fn latest_by_players(
        &self,
        player_ids: &[i32],
    ) -> Result<HashMap<i32, PositionHistoryEntry>, DbErr> {
        if player_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let entities = entity::prelude::PlayerListPositionHistory::find()
            .filter(
                entity::player_list_position_history::Column::PlayerId.is_in(player_ids.to_vec()),
            )
            .order_by_asc(entity::player_list_position_history::Column::CreatedAt)
            .order_by_asc(entity::player_list_position_history::Column::Id)
            .all(self.db)
            .await?;

        // Ascending order, so later entries overwrite earlier ones
        let mut latest = HashMap::new();
        for entity in entities {
            latest.insert(entity.player_id, PositionHistoryEntry::from_entity(entity));
        }

        Ok(latest)
    }
}
