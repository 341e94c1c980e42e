//! SeaORM entity models for the syndicate manager.
//!
//! Each module maps one table. Status and type columns are stored as integers and
//! exposed as `DeriveActiveEnum` enums living next to the entity that owns them.

pub mod prelude;

pub mod campaign;
pub mod campaign_attendance;
pub mod campaign_loot;
pub mod campaign_signup;
pub mod discord_officer;
pub mod item;
pub mod loot_request;
pub mod player;
pub mod player_list_position_history;
pub mod syndicate;
