pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_syndicate_table;
mod m20261001_000002_create_player_table;
mod m20261001_000003_create_campaign_table;
mod m20261001_000004_create_item_table;
mod m20261001_000005_create_campaign_loot_table;
mod m20261001_000006_create_loot_request_table;
mod m20261001_000007_create_campaign_signup_table;
mod m20261001_000008_create_campaign_attendance_table;
mod m20261001_000009_create_player_list_position_history_table;
mod m20261001_000010_create_discord_officer_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_syndicate_table::Migration),
            Box::new(m20261001_000002_create_player_table::Migration),
            Box::new(m20261001_000003_create_campaign_table::Migration),
            Box::new(m20261001_000004_create_item_table::Migration),
            Box::new(m20261001_000005_create_campaign_loot_table::Migration),
            Box::new(m20261001_000006_create_loot_request_table::Migration),
            Box::new(m20261001_000007_create_campaign_signup_table::Migration),
            Box::new(m20261001_000008_create_campaign_attendance_table::Migration),
            Box::new(m20261001_000009_create_player_list_position_history_table::Migration),
            Box::new(m20261001_000010_create_discord_officer_table::Migration),
        ]
    }
}
