/// Discord account allowed to manage the officer list through the bot.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscordOfficer {
    pub id: i32,
    /// Discord tag, `name#discriminator` or the bare username for migrated accounts.
    pub login_name: String,
}

impl DiscordOfficer {
    pub fn from_entity(entity: entity::discord_officer::Model) -> Self {
        Self {
            id: entity.id,
            login_name: entity.login_name,
        }
    }
}
