//! Player data repository.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::model::player::Player;

/// Repository providing read access to syndicate players.
pub struct PlayerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a player by id.
    ///
    /// # Arguments
    /// - `id` - Player id
    ///
    /// # Returns
    /// - `Ok(Some(Player))` - Player found
    /// - `Ok(None)` - No player with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Player>, DbErr> {
        let entity = entity::prelude::Player::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Player::from_entity))
    }

    /// Gets the players of a syndicate ordered by name.
    ///
    /// # Arguments
    /// - `syndicate_id` - Syndicate to list players of
    /// - `include_inactive` - Also return players marked inactive
    ///
    /// # Returns
    /// - `Ok(Vec<Player>)` - Players of the syndicate, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_syndicate(
        &self,
        syndicate_id: i32,
        include_inactive: bool,
    ) -> Result<Vec<Player>, DbErr> {
        let mut query = entity::prelude::Player::find()
            .filter(entity::player::Column::SyndicateId.eq(syndicate_id));

        if !include_inactive {
            query = query.filter(entity::player::Column::Active.eq(true));
        }

        let entities = query
            .order_by_asc(entity::player::Column::Name)
            .order_by_asc(entity::player::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Player::from_entity).collect())
    }
}
