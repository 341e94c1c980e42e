//! Campaign signup factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a signup of the player for the campaign.
///
/// # Arguments
/// - `db` - Database connection
/// - `campaign_id` - Campaign being signed up for
/// - `player_id` - Player signing up
/// - `attending` - Whether the player intends to attend
///
/// # Returns
/// - `Ok(entity::campaign_signup::Model)` - Created signup entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_signup(
    db: &DatabaseConnection,
    campaign_id: i32,
    player_id: i32,
    attending: bool,
) -> Result<entity::campaign_signup::Model, DbErr> {
    entity::campaign_signup::ActiveModel {
        id: ActiveValue::NotSet,
        campaign_id: ActiveValue::Set(campaign_id),
        player_id: ActiveValue::Set(player_id),
        attending: ActiveValue::Set(attending),
    }
    .insert(db)
    .await
}
