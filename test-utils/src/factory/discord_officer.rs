//! Discord officer factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a Discord officer with the given login name.
///
/// # Arguments
/// - `db` - Database connection
/// - `login_name` - Discord tag of the officer, e.g. `name#1234`
///
/// # Returns
/// - `Ok(entity::discord_officer::Model)` - Created officer entity
/// - `Err(DbErr)` - Database error during insert, including duplicate login names
pub async fn create_discord_officer(
    db: &DatabaseConnection,
    login_name: impl Into<String>,
) -> Result<entity::discord_officer::Model, DbErr> {
    entity::discord_officer::ActiveModel {
        id: ActiveValue::NotSet,
        login_name: ActiveValue::Set(login_name.into()),
    }
    .insert(db)
    .await
}
