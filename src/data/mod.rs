//! Database repository layer for all domain entities.
//!
//! Repositories wrap a borrowed `DatabaseConnection`, run queries through SeaORM entities
//! and return domain models from `crate::model`, so entity types never leak past this
//! layer. Repositories do not enforce business rules; services decide what is allowed.

pub mod campaign;
pub mod campaign_attendance;
pub mod campaign_loot;
pub mod campaign_signup;
pub mod discord_officer;
pub mod item;
pub mod loot_request;
pub mod player;
pub mod position_history;
