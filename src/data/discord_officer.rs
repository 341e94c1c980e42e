//! Discord officer list repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::officer::DiscordOfficer;

/// Repository providing database operations for the Discord officer list.
pub struct DiscordOfficerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiscordOfficerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds an officer by Discord login, compared exactly.
    pub async fn find_by_login(&self, login_name: &str) -> Result<Option<DiscordOfficer>, DbErr> {
        let entity = entity::prelude::DiscordOfficer::find()
            .filter(entity::discord_officer::Column::LoginName.eq(login_name))
            .one(self.db)
            .await?;

        Ok(entity.map(DiscordOfficer::from_entity))
    }

    /// Gets every officer in the order they were added.
    pub async fn get_all(&self) -> Result<Vec<DiscordOfficer>, DbErr> {
        let entities = entity::prelude::DiscordOfficer::find()
            .order_by_asc(entity::discord_officer::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(DiscordOfficer::from_entity).collect())
    }

    /// Adds a login to the officer list.
    ///
    /// # Returns
    /// - `Ok(DiscordOfficer)` - The created officer
    /// - `Err(DbErr)` - Database error during insert, including a duplicate login
    pub async fn create(&self, login_name: String) -> Result<DiscordOfficer, DbErr> {
        let entity = entity::discord_officer::ActiveModel {
            login_name: ActiveValue::Set(login_name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(DiscordOfficer::from_entity(entity))
    }

    /// Removes a login from the officer list.
    ///
    /// # Returns
    /// - `Ok(true)` - Officer removed
    /// - `Ok(false)` - The login was not on the list
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_login(&self, login_name: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::DiscordOfficer::delete_many()
            .filter(entity::discord_officer::Column::LoginName.eq(login_name))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
