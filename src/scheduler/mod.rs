//! Background jobs run on cron schedules.

pub mod item_import;
