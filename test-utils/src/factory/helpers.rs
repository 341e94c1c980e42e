//! Shared helper utilities for factory methods.
//!
//! Provides ID generation used across all factory modules and convenience methods for
//! creating entities together with the records they depend on.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a campaign together with its syndicate and one member.
///
/// This is a convenience method that creates:
/// 1. Syndicate
/// 2. Player belonging to the syndicate
/// 3. Campaign owned by the syndicate, without a manager
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((syndicate, player, campaign))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_campaign_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::syndicate::Model,
        entity::player::Model,
        entity::campaign::Model,
    ),
    DbErr,
> {
    let syndicate = crate::factory::syndicate::create_syndicate(db).await?;
    let player = crate::factory::player::create_player(db, syndicate.id).await?;
    let campaign = crate::factory::campaign::create_campaign(db, syndicate.id).await?;

    Ok((syndicate, player, campaign))
}

/// Creates a loot entry on a new campaign together with all its dependencies.
///
/// Creates a syndicate, one member, a campaign of that syndicate, an item and an
/// undistributed loot row linking the item to the campaign.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((syndicate, player, campaign, item, loot))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_loot_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::syndicate::Model,
        entity::player::Model,
        entity::campaign::Model,
        entity::item::Model,
        entity::campaign_loot::Model,
    ),
    DbErr,
> {
    let (syndicate, player, campaign) = create_campaign_with_dependencies(db).await?;
    let item = crate::factory::item::create_item(db).await?;
    let loot = crate::factory::campaign_loot::create_loot(db, campaign.id, item.id).await?;

    Ok((syndicate, player, campaign, item, loot))
}
