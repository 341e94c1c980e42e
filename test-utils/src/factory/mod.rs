//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` builder for customization
//! and a `create_*` convenience function for quick default creation. Factories take the
//! ids of the records they reference, so callers create parents first.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let syndicate = factory::create_syndicate(&db).await?;
//!     let player = factory::create_player(&db, syndicate.id).await?;
//!     let campaign = factory::create_campaign(&db, syndicate.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let campaign = factory::campaign::CampaignFactory::new(&db, syndicate.id)
//!     .status(CampaignStatus::Completed)
//!     .difficulty(CampaignDifficulty::Hard)
//!     .tiers(16)
//!     .build()
//!     .await?;
//! ```

pub mod campaign;
pub mod campaign_attendance;
pub mod campaign_loot;
pub mod campaign_signup;
pub mod discord_officer;
pub mod helpers;
pub mod item;
pub mod loot_request;
pub mod player;
pub mod position_history;
pub mod syndicate;

// Re-export commonly used factory functions for concise usage
pub use campaign::create_campaign;
pub use campaign_attendance::create_attendance;
pub use campaign_loot::create_loot;
pub use campaign_signup::create_signup;
pub use discord_officer::create_discord_officer;
pub use item::create_item;
pub use loot_request::create_loot_request;
pub use player::create_player;
pub use position_history::create_position_history;
pub use syndicate::create_syndicate;
