//! Domain models and operation parameters.
//!
//! Repositories convert SeaORM entity models into these types at the data layer boundary
//! with `from_entity`. Services accept the `*Params` types and return the view types
//! (`CampaignOverview`, `DistributionOrder`, ...) assembled from domain models.

pub mod attendance;
pub mod campaign;
pub mod import;
pub mod item;
pub mod loot;
pub mod officer;
pub mod player;
