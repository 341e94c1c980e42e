//! Loot and loot request domain models and parameters.
//!
//! Loot is an item dropped during a campaign. Players register interest in loot through
//! requests; the distribution order decides who receives it, and whoever receives loot
//! moves to the bottom of the order.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use entity::{campaign_loot::CampaignLootStatus, loot_request::LootRequestStatus};
use sea_orm::DbErr;

use crate::model::{campaign::Campaign, item::Item, player::Player};

/// Campaign loot together with its item.
#[derive(Debug, Clone, PartialEq)]
pub struct Loot {
    pub id: i32,
    pub campaign_id: i32,
    pub item: Item,
    pub status: CampaignLootStatus,
    /// Player currently holding the loot.
    pub holder_id: Option<i32>,
    pub comments: Option<String>,
}

impl Loot {
    /// Converts a loot entity and its related item at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Loot)` - The converted loot domain model
    /// - `Err(DbErr::RecordNotFound)` - The loot's item was not loaded
    pub fn from_entity(
        entity: entity::campaign_loot::Model,
        item: Option<entity::item::Model>,
    ) -> Result<Self, DbErr> {
        let item = item.ok_or_else(|| {
            DbErr::RecordNotFound(format!(
                "Item {} of loot {} not found",
                entity.item_id, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            campaign_id: entity.campaign_id,
            item: Item::from_entity(item),
            status: entity.status,
            holder_id: entity.holder_id,
            comments: entity.comments,
        })
    }
}

/// A player's claim on a piece of loot.
#[derive(Debug, Clone, PartialEq)]
pub struct LootRequest {
    pub id: i32,
    pub loot_id: i32,
    /// Player who filed the request.
    pub requested_by_id: i32,
    /// Player who would receive the loot.
    pub requested_for_id: i32,
    pub status: LootRequestStatus,
    pub special_offer_description: Option<String>,
}

impl LootRequest {
    pub fn from_entity(entity: entity::loot_request::Model) -> Self {
        Self {
            id: entity.id,
            loot_id: entity.loot_id,
            requested_by_id: entity.requested_by_id,
            requested_for_id: entity.requested_for_id,
            status: entity.status,
            special_offer_description: entity.special_offer_description,
        }
    }

    /// Request that has not been awarded or declined yet.
    pub fn is_open(&self) -> bool {
        matches!(
            self.status,
            LootRequestStatus::Interested | LootRequestStatus::SpecialOffer
        )
    }
}

/// Loot awaiting distribution as seen by one player.
#[derive(Debug, Clone, PartialEq)]
pub struct LootToDistribute {
    pub loot: Loot,
    /// The item's tier is above the viewing player's tier.
    pub tier_restriction: bool,
    /// The viewing player has a request on this loot.
    pub request_exists: bool,
    /// The viewing player's request.
    pub request: Option<LootRequest>,
    /// Requests of every player on this loot.
    pub all_requests: Vec<LootRequest>,
}

/// Entry in a player's position history. The latest entry decides list position.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionHistoryEntry {
    pub id: i32,
    pub player_id: i32,
    /// Request whose award moved the player, if any.
    pub loot_request_id: Option<i32>,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PositionHistoryEntry {
    pub fn from_entity(entity: entity::player_list_position_history::Model) -> Self {
        Self {
            id: entity.id,
            player_id: entity.player_id,
            loot_request_id: entity.loot_request_id,
            comment: entity.comment,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for building the loot distribution order.
#[derive(Debug, Clone, Copy)]
pub struct DistributionOrderParams {
    pub syndicate_id: i32,
    /// Limit loot to a single campaign.
    pub campaign_id: Option<i32>,
    pub undistributed_loot_only: bool,
    /// Include inactive players in the order.
    pub include_inactive: bool,
    /// Player viewing the order.
    pub player_id: Option<i32>,
}

/// Rotating list deciding who receives loot next, with the loot and requests it applies to.
#[derive(Debug, Clone, Default)]
pub struct DistributionOrder {
    /// Players ordered by when they last received loot, never first.
    pub current_order: Vec<Player>,
    pub current_player: Option<Player>,
    /// Every syndicate player regardless of activity.
    pub all_players: Vec<Player>,
    /// Loot keyed by campaign id, each list sorted by item tier ascending.
    pub all_campaign_loot: BTreeMap<i32, Vec<Loot>>,
    /// Requests keyed by the id of the player they were made for.
    pub all_loot_requests: HashMap<i32, Vec<LootRequest>>,
    /// Syndicate campaigns, most recent first.
    pub all_campaigns: Vec<Campaign>,
    pub loot_statuses: BTreeMap<i32, String>,
    pub campaign_id: Option<i32>,
    pub undistributed_loot_only: bool,
    pub include_inactive: bool,
    pub total_attendance_rate: HashMap<i32, i32>,
    pub hard_t5_attendance_rate: HashMap<i32, i32>,
}

/// Parameters for requesting loot.
#[derive(Debug, Clone)]
pub struct LootRequestParams {
    pub loot_id: i32,
    pub requested_by_id: i32,
    /// Player the loot is for, usually the requester.
    pub requested_for_id: i32,
    pub syndicate_id: i32,
    /// Offer made in exchange for the loot, turns the request into a special offer.
    pub special_offer_description: Option<String>,
}

impl LootRequestParams {
    /// Status a request made with these parameters gets.
    pub fn status(&self) -> LootRequestStatus {
        match self.special_offer() {
            Some(_) => LootRequestStatus::SpecialOffer,
            None => LootRequestStatus::Interested,
        }
    }

    /// Special offer description with blank text treated as no offer.
    pub fn special_offer(&self) -> Option<&str> {
        self.special_offer_description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}
