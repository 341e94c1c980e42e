//! Service layer for business logic and orchestration.
//!
//! Services sit between the callers (bot, scheduler) and the data layer. They:
//!
//! - **Enforce Business Rules**: syndicate membership, campaign lifecycle, loot workflow
//! - **Orchestrate**: combine several repositories and external lookups per operation
//! - **Report Rejections**: operations that are not allowed return `Ok(None)` or
//!   `Ok(false)` and leave the database unchanged; `Err` is reserved for failures

pub mod campaign;
pub mod item_import;
pub mod loot;
pub mod officer;
