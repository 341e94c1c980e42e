pub use super::campaign::Entity as Campaign;
pub use super::campaign_attendance::Entity as CampaignAttendance;
pub use super::campaign_loot::Entity as CampaignLoot;
pub use super::campaign_signup::Entity as CampaignSignup;
pub use super::discord_officer::Entity as DiscordOfficer;
pub use super::item::Entity as Item;
pub use super::loot_request::Entity as LootRequest;
pub use super::player::Entity as Player;
pub use super::player_list_position_history::Entity as PlayerListPositionHistory;
pub use super::syndicate::Entity as Syndicate;
