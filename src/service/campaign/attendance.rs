//! Attendance rate computation.
//!
//! A campaign qualifies for attendance statistics once anyone's attendance was recorded
//! for it. Rates are the rounded share of qualifying campaigns a player attended.

use std::collections::{HashMap, HashSet};

use crate::model::{
    attendance::{AttendanceRates, CampaignAttendance},
    campaign::Campaign,
};

/// Number of recent tier 5 hard campaigns in the short term rate.
pub const RECENT_T5_HARD_CAMPAIGNS: usize = 10;

/// Computes attendance rates from a syndicate's campaigns and their attendance.
///
/// # Arguments
/// - `campaigns` - Campaigns of the syndicate, most recent first
/// - `attendance` - Attendance records of those campaigns
/// - `player_id` - Restrict the result to one player, `None` for every player
///
/// # Returns
/// - `AttendanceRates` - Percentages keyed by player id, players without attendance in a
///   category have no entry in it
pub fn compute_rates(
    campaigns: &[Campaign],
    attendance: &[CampaignAttendance],
    player_id: Option<i32>,
) -> AttendanceRates {
    let mut attendees: HashMap<i32, HashSet<i32>> = HashMap::new();
    for record in attendance {
        attendees
            .entry(record.campaign_id)
            .or_default()
            .insert(record.player_id);
    }

    let qualifying: Vec<&Campaign> = campaigns
        .iter()
        .filter(|c| attendees.contains_key(&c.id))
        .collect();
    let t5_hard: Vec<&Campaign> = qualifying
        .iter()
        .copied()
        .filter(|c| c.is_t5_hard())
        .collect();
    let recent_t5_hard: Vec<&Campaign> = t5_hard
        .iter()
        .copied()
        .take(RECENT_T5_HARD_CAMPAIGNS)
        .collect();

    AttendanceRates {
        total: rates(&qualifying, &attendees, player_id),
        t5_hard: rates(&t5_hard, &attendees, player_id),
        last10_t5_hard: rates(&recent_t5_hard, &attendees, player_id),
    }
}

fn rates(
    campaigns: &[&Campaign],
    attendees: &HashMap<i32, HashSet<i32>>,
    player_id: Option<i32>,
) -> HashMap<i32, i32> {
    let mut counts: HashMap<i32, usize> = HashMap::new();
    for campaign in campaigns {
        for player in attendees.get(&campaign.id).into_iter().flatten() {
            if player_id.map_or(true, |id| id == *player) {
                *counts.entry(*player).or_default() += 1;
            }
        }
    }

    counts
        .into_iter()
        .map(|(player, count)| (player, percent(count, campaigns.len())))
        .collect()
}

fn percent(count: usize, total: usize) -> i32 {
    (count as f64 * 100.0 / total as f64).round() as i32
}
