//! Discord officer list service.
//!
//! Officers are identified by their Discord tag. Only listed officers may change the list
//! through the bot.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    data::discord_officer::DiscordOfficerRepository, error::AppError,
    model::officer::DiscordOfficer,
};

pub struct DiscordOfficerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiscordOfficerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a login to the officer list.
    ///
    /// # Returns
    /// - `Ok(true)` - Officer added
    /// - `Ok(false)` - Login blank or already listed
    /// - `Err(AppError)` - Database error
    pub async fn add_discord_officer(&self, login_name: &str) -> Result<bool, AppError> {
        let login_name = login_name.trim();
        if login_name.is_empty() {
            return Ok(false);
        }

        let repo = DiscordOfficerRepository::new(self.db);
        if repo.find_by_login(login_name).await?.is_some() {
            return Ok(false);
        }

        repo.create(login_name.to_string()).await?;
        tracing::info!("Added Discord officer {}", login_name);

        Ok(true)
    }

    /// Gets every officer in the order they were added.
    pub async fn get_discord_officer_list(&self) -> Result<Vec<DiscordOfficer>, AppError> {
        Ok(DiscordOfficerRepository::new(self.db).get_all().await?)
    }

    /// Removes a login from the officer list.
    ///
    /// # Returns
    /// - `Ok(true)` - Officer removed
    /// - `Ok(false)` - Login was not listed
    /// - `Err(AppError)` - Database error
    pub async fn remove_discord_officer(&self, login_name: &str) -> Result<bool, AppError> {
        let login_name = login_name.trim();

        let removed = DiscordOfficerRepository::new(self.db)
            .delete_by_login(login_name)
            .await?;
        if removed {
            tracing::info!("Removed Discord officer {}", login_name);
        }

        Ok(removed)
    }

    /// Whether the login is on the officer list.
    pub async fn is_discord_officer(&self, login_name: &str) -> Result<bool, AppError> {
        let officer = DiscordOfficerRepository::new(self.db)
            .find_by_login(login_name.trim())
            .await?;

        Ok(officer.is_some())
    }
}
