//! Player domain model.

/// Highest tier a player or item can have.
pub const MAX_TIER: i32 = 5;

/// Levels covered by a single tier.
const LEVELS_PER_TIER: i32 = 5;

/// Syndicate member.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i32,
    pub name: String,
    /// Inactive players are hidden from rosters and the distribution order by default.
    pub active: bool,
    /// In-game level, fractional part is progress towards the next level.
    pub level: f64,
    pub syndicate_id: Option<i32>,
}

impl Player {
    /// Converts an entity model to a player domain model at the repository boundary.
    pub fn from_entity(entity: entity::player::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            active: entity.active,
            level: entity.level,
            syndicate_id: entity.syndicate_id,
        }
    }

    /// Tier the player's level falls into.
    pub fn tier(&self) -> i32 {
        tier_for_level(self.level)
    }

    /// Whether the player belongs to the given syndicate.
    pub fn is_member_of(&self, syndicate_id: i32) -> bool {
        self.syndicate_id == Some(syndicate_id)
    }
}

/// Tier for a player level: levels 1-5 are tier 1, 6-10 tier 2 and so on up to tier 5.
pub fn tier_for_level(level: f64) -> i32 {
    let level = level.floor() as i32;

    ((level - 1) / LEVELS_PER_TIER + 1).clamp(1, MAX_TIER)
}
