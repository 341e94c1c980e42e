//! Player factory for creating test player entities.
//!
//! Players default to active, level 1 members of the given syndicate.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test players with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let player = PlayerFactory::new(&db, syndicate.id)
///     .name("Veteran")
///     .level(24.5)
///     .build()
///     .await?;
/// ```
pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::player::Model,
}

impl<'a> PlayerFactory<'a> {
    /// Creates a new PlayerFactory with default values.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `syndicate_id` - Syndicate the player belongs to
    pub fn new(db: &'a DatabaseConnection, syndicate_id: i32) -> Self {
        let id = next_id();

        Self {
            db,
            entity: entity::player::Model {
                id: 0,
                name: format!("Player {}", id),
                active: true,
                level: 1.0,
                syndicate_id: Some(syndicate_id),
            },
        }
    }

    /// Sets the player name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets whether the player is active.
    pub fn active(mut self, active: bool) -> Self {
        self.entity.active = active;
        self
    }

    /// Sets the player level.
    pub fn level(mut self, level: f64) -> Self {
        self.entity.level = level;
        self
    }

    /// Sets the player's syndicate, `None` for a player without one.
    pub fn syndicate_id(mut self, syndicate_id: Option<i32>) -> Self {
        self.entity.syndicate_id = syndicate_id;
        self
    }

    /// Builds and inserts the player entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::player::Model)` - Created player entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::player::Model, DbErr> {
        entity::player::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            active: ActiveValue::Set(self.entity.active),
            level: ActiveValue::Set(self.entity.level),
            syndicate_id: ActiveValue::Set(self.entity.syndicate_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active level 1 player in the given syndicate.
///
/// Shorthand for `PlayerFactory::new(db, syndicate_id).build().await`.
pub async fn create_player(
    db: &DatabaseConnection,
    syndicate_id: i32,
) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db, syndicate_id).build().await
}
