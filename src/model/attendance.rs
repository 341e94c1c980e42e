//! Signup and attendance models.

use std::collections::HashMap;

/// A player's signup for an upcoming campaign.
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignSignup {
    pub id: i32,
    pub campaign_id: i32,
    pub player_id: i32,
    pub attending: bool,
}

impl CampaignSignup {
    pub fn from_entity(entity: entity::campaign_signup::Model) -> Self {
        Self {
            id: entity.id,
            campaign_id: entity.campaign_id,
            player_id: entity.player_id,
            attending: entity.attending,
        }
    }
}

/// Record of a player having attended a campaign.
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignAttendance {
    pub id: i32,
    pub campaign_id: i32,
    pub player_id: i32,
}

impl CampaignAttendance {
    pub fn from_entity(entity: entity::campaign_attendance::Model) -> Self {
        Self {
            id: entity.id,
            campaign_id: entity.campaign_id,
            player_id: entity.player_id,
        }
    }
}

/// Attendance percentages keyed by player id.
///
/// Players without any attendance in a category have no entry in that category's map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttendanceRates {
    /// Share of all qualifying campaigns attended.
    pub total: HashMap<i32, i32>,
    /// Share of qualifying hard or extreme campaigns including tier 5.
    pub t5_hard: HashMap<i32, i32>,
    /// Share of the ten most recent qualifying tier 5 hard campaigns.
    pub last10_t5_hard: HashMap<i32, i32>,
}
