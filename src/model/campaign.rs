//! Campaign domain models and parameters.
//!
//! Campaigns are scheduled syndicate raids on a station. A campaign is current while in
//! progress, upcoming while unknown or planned, and past in every other status.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use entity::campaign::{CampaignDifficulty, CampaignStatus};

use crate::model::{
    attendance::{CampaignAttendance, CampaignSignup},
    item::Item,
    loot::{Loot, LootToDistribute},
    player::{Player, MAX_TIER},
};

/// Where a campaign sits in its lifecycle, derived from its status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampaignPhase {
    Current,
    Future,
    Past,
}

impl CampaignPhase {
    pub fn of(status: CampaignStatus) -> Self {
        match status {
            CampaignStatus::InProgress => Self::Current,
            CampaignStatus::Unknown | CampaignStatus::Planned => Self::Future,
            CampaignStatus::Completed
            | CampaignStatus::Failed
            | CampaignStatus::Skipped
            | CampaignStatus::Abandoned
            | CampaignStatus::Cancelled => Self::Past,
        }
    }
}

/// Scheduled syndicate raid.
#[derive(Debug, Clone, PartialEq)]
pub struct Campaign {
    pub id: i32,
    pub station: String,
    pub name: String,
    pub comments: Option<String>,
    pub difficulty: CampaignDifficulty,
    /// Bitmask of tiers taking part, bit `n - 1` standing for tier `n`.
    pub tiers: i32,
    pub syndicate_id: Option<i32>,
    pub status: CampaignStatus,
    pub utc_date_time: DateTime<Utc>,
    pub manager_id: Option<i32>,
}

impl Campaign {
    /// Converts an entity model to a campaign domain model at the repository boundary.
    pub fn from_entity(entity: entity::campaign::Model) -> Self {
        Self {
            id: entity.id,
            station: entity.station,
            name: entity.name,
            comments: entity.comments,
            difficulty: entity.difficulty,
            tiers: entity.tiers,
            syndicate_id: entity.syndicate_id,
            status: entity.status,
            utc_date_time: entity.utc_date_time,
            manager_id: entity.manager_id,
        }
    }

    pub fn phase(&self) -> CampaignPhase {
        CampaignPhase::of(self.status)
    }

    /// Whether the given tier takes part in the campaign.
    pub fn includes_tier(&self, tier: i32) -> bool {
        (1..=MAX_TIER).contains(&tier) && self.tiers & tier_bit(tier) != 0
    }

    /// Hard or extreme campaign with tier 5 taking part.
    pub fn is_t5_hard(&self) -> bool {
        self.includes_tier(MAX_TIER)
            && matches!(
                self.difficulty,
                CampaignDifficulty::Hard | CampaignDifficulty::Extreme
            )
    }

    pub fn belongs_to(&self, syndicate_id: i32) -> bool {
        self.syndicate_id == Some(syndicate_id)
    }
}

/// Bit representing a tier in a campaign's tier mask.
pub fn tier_bit(tier: i32) -> i32 {
    1 << (tier - 1)
}

/// Campaign fields submitted for creation or editing.
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignParams {
    /// Campaign to edit, `None` to create a new one.
    pub id: Option<i32>,
    pub station: String,
    pub name: String,
    pub comments: Option<String>,
    pub difficulty: CampaignDifficulty,
    pub tiers: i32,
    /// Owning syndicate, `None` to use the caller's syndicate.
    pub syndicate_id: Option<i32>,
    pub status: CampaignStatus,
    pub utc_date_time: DateTime<Utc>,
    /// Manager player id, `Some(0)` is treated the same as `None`.
    pub manager_id: Option<i32>,
}

impl CampaignParams {
    /// Manager id with the `0` placeholder mapped to no manager.
    pub fn manager(&self) -> Option<i32> {
        self.manager_id.filter(|id| *id != 0)
    }
}

/// Parameters for building the campaign overview.
#[derive(Debug, Clone, Copy)]
pub struct CampaignOverviewParams {
    pub syndicate_id: i32,
    /// Player viewing the overview, used for tier restrictions, requests and signups.
    pub player_id: Option<i32>,
    /// List every past campaign instead of the most recent ones.
    pub all_past_campaigns: bool,
    /// Include loot that has already been handed out.
    pub include_distributed_loot: bool,
}

/// Campaigns of a syndicate split by phase, with the loot awaiting distribution.
#[derive(Debug, Clone, Default)]
pub struct CampaignOverview {
    /// In-progress campaigns, earliest first.
    pub current_campaigns: Vec<Campaign>,
    /// Upcoming campaigns, earliest first.
    pub future_campaigns: Vec<Campaign>,
    /// Finished campaigns, most recent first.
    pub past_campaigns: Vec<Campaign>,
    pub loot_statuses: BTreeMap<i32, String>,
    pub loot_to_distribute: Vec<LootToDistribute>,
    /// The viewing player's signups keyed by campaign id.
    pub my_signups: HashMap<i32, CampaignSignup>,
    /// The viewing player's attendance keyed by campaign id.
    pub my_attendance: HashMap<i32, CampaignAttendance>,
}

/// Parameters for loading a single campaign.
#[derive(Debug, Clone, Copy)]
pub struct GetCampaignParams {
    pub campaign_id: i32,
    pub syndicate_id: i32,
    pub include_inactive_players: bool,
    /// Admins may load campaigns of any syndicate.
    pub is_admin: bool,
}

/// Campaign with everything needed to display and edit it.
#[derive(Debug, Clone)]
pub struct CampaignDetails {
    pub campaign: Campaign,
    pub players: Vec<Player>,
    pub loot: Vec<Loot>,
    pub difficulty_levels: BTreeMap<i32, String>,
    pub statuses: BTreeMap<i32, String>,
    /// Every epic item in the catalogue, offered when recording loot.
    pub known_epics: Vec<Item>,
}

/// Draft campaign with the choices offered when creating one.
#[derive(Debug, Clone)]
pub struct CampaignForm {
    pub campaign: CampaignParams,
    pub players: Vec<Player>,
    pub difficulty_levels: BTreeMap<i32, String>,
    pub statuses: BTreeMap<i32, String>,
}
