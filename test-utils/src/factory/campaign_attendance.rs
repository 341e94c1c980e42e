//! Campaign attendance factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Records that the player attended the campaign.
///
/// # Returns
/// - `Ok(entity::campaign_attendance::Model)` - Created attendance entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_attendance(
    db: &DatabaseConnection,
    campaign_id: i32,
    player_id: i32,
) -> Result<entity::campaign_attendance::Model, DbErr> {
    entity::campaign_attendance::ActiveModel {
        id: ActiveValue::NotSet,
        campaign_id: ActiveValue::Set(campaign_id),
        player_id: ActiveValue::Set(player_id),
    }
    .insert(db)
    .await
}
