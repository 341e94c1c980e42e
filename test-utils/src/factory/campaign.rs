//! Campaign factory for creating test campaign entities.
//!
//! Campaigns default to a planned, normal difficulty run of all five tiers scheduled one
//! day in the future, without a manager.

use chrono::{DateTime, Duration, Utc};
use entity::campaign::{CampaignDifficulty, CampaignStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test campaigns with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let campaign = CampaignFactory::new(&db, syndicate.id)
///     .status(CampaignStatus::Completed)
///     .difficulty(CampaignDifficulty::Hard)
///     .tiers(16)
///     .build()
///     .await?;
/// ```
pub struct CampaignFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::campaign::Model,
}

impl<'a> CampaignFactory<'a> {
    /// Creates a new CampaignFactory with default values.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `syndicate_id` - Syndicate that owns the campaign
    pub fn new(db: &'a DatabaseConnection, syndicate_id: i32) -> Self {
        let id = next_id();

        Self {
            db,
            entity: entity::campaign::Model {
                id: 0,
                station: format!("Station {}", id),
                name: format!("Campaign {}", id),
                comments: None,
                difficulty: CampaignDifficulty::Normal,
                tiers: 31,
                syndicate_id: Some(syndicate_id),
                status: CampaignStatus::Planned,
                utc_date_time: Utc::now() + Duration::days(1),
                manager_id: None,
            },
        }
    }

    pub fn station(mut self, station: impl Into<String>) -> Self {
        self.entity.station = station.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn comments(mut self, comments: Option<String>) -> Self {
        self.entity.comments = comments;
        self
    }

    pub fn difficulty(mut self, difficulty: CampaignDifficulty) -> Self {
        self.entity.difficulty = difficulty;
        self
    }

    /// Sets the tier bitmask, bit `n - 1` standing for tier `n`.
    pub fn tiers(mut self, tiers: i32) -> Self {
        self.entity.tiers = tiers;
        self
    }

    pub fn status(mut self, status: CampaignStatus) -> Self {
        self.entity.status = status;
        self
    }

    pub fn utc_date_time(mut self, utc_date_time: DateTime<Utc>) -> Self {
        self.entity.utc_date_time = utc_date_time;
        self
    }

    pub fn manager_id(mut self, manager_id: Option<i32>) -> Self {
        self.entity.manager_id = manager_id;
        self
    }

    pub fn syndicate_id(mut self, syndicate_id: Option<i32>) -> Self {
        self.entity.syndicate_id = syndicate_id;
        self
    }

    /// Builds and inserts the campaign entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::campaign::Model)` - Created campaign entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::campaign::Model, DbErr> {
        entity::campaign::ActiveModel {
            id: ActiveValue::NotSet,
            station: ActiveValue::Set(self.entity.station),
            name: ActiveValue::Set(self.entity.name),
            comments: ActiveValue::Set(self.entity.comments),
            difficulty: ActiveValue::Set(self.entity.difficulty),
            tiers: ActiveValue::Set(self.entity.tiers),
            syndicate_id: ActiveValue::Set(self.entity.syndicate_id),
            status: ActiveValue::Set(self.entity.status),
            utc_date_time: ActiveValue::Set(self.entity.utc_date_time),
            manager_id: ActiveValue::Set(self.entity.manager_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a planned campaign for the given syndicate.
///
/// Shorthand for `CampaignFactory::new(db, syndicate_id).build().await`.
pub async fn create_campaign(
    db: &DatabaseConnection,
    syndicate_id: i32,
) -> Result<entity::campaign::Model, DbErr> {
    CampaignFactory::new(db, syndicate_id).build().await
}
