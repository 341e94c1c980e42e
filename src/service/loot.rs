//! Loot distribution service.
//!
//! Loot is handed out along a rotating list of syndicate players. A player's position is
//! decided by their latest position history entry: players who never received loot are
//! first, and whoever receives loot is appended to the bottom.

use std::collections::{BTreeMap, HashMap};

use dioxus_logger::tracing;
use entity::{campaign_loot::CampaignLootStatus, loot_request::LootRequestStatus};
use sea_orm::DatabaseConnection;

use crate::{
    data::{
        campaign::CampaignRepository,
        campaign_loot::CampaignLootRepository,
        loot_request::{LootRequestFields, LootRequestRepository},
        player::PlayerRepository,
        position_history::PositionHistoryRepository,
    },
    error::AppError,
    model::{
        loot::{DistributionOrder, DistributionOrderParams, Loot, LootRequest, LootRequestParams},
        player::Player,
    },
    service::campaign::CampaignService,
    util::label,
};

pub struct LootService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LootService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the current loot distribution order of a syndicate.
    ///
    /// # Arguments
    /// - `params` - Syndicate, optional campaign filter and listing options
    ///
    /// # Returns
    /// - `Ok(DistributionOrder)` - Order with loot, requests and attendance rates
    /// - `Err(AppError)` - Database error
    pub async fn get_current_distribution_order(
        &self,
        params: DistributionOrderParams,
    ) -> Result<DistributionOrder, AppError> {
        let all_players = PlayerRepository::new(self.db)
            .get_by_syndicate(params.syndicate_id, true)
            .await?;

        let mut current_order: Vec<Player> = all_players
            .iter()
            .filter(|p| params.include_inactive || p.active)
            .cloned()
            .collect();
        let player_ids: Vec<i32> = current_order.iter().map(|p| p.id).collect();
        let latest = PositionHistoryRepository::new(self.db)
            .latest_by_players(&player_ids)
            .await?;
        // Players without history sort first as `None` orders before `Some`
        current_order.sort_by_key(|p| (latest.get(&p.id).map(|e| (e.created_at, e.id)), p.id));

        let current_player = params
            .player_id
            .and_then(|id| all_players.iter().find(|p| p.id == id).cloned());

        let all_campaigns = CampaignRepository::new(self.db)
            .get_by_syndicate(params.syndicate_id)
            .await?;
        let campaign_ids: Vec<i32> = all_campaigns
            .iter()
            .map(|c| c.id)
            .filter(|id| params.campaign_id.map_or(true, |wanted| wanted == *id))
            .collect();

        let loot = CampaignLootRepository::new(self.db)
            .get_by_campaigns(&campaign_ids, params.undistributed_loot_only)
            .await?;
        let loot_ids: Vec<i32> = loot.iter().map(|l| l.id).collect();

        let mut all_campaign_loot: BTreeMap<i32, Vec<Loot>> = BTreeMap::new();
        for item in loot {
            all_campaign_loot.entry(item.campaign_id).or_default().push(item);
        }

        let mut all_loot_requests: HashMap<i32, Vec<LootRequest>> = HashMap::new();
        for request in LootRequestRepository::new(self.db)
            .get_by_loot_ids(&loot_ids)
            .await?
        {
            all_loot_requests
                .entry(request.requested_for_id)
                .or_default()
                .push(request);
        }

        let rates = CampaignService::new(self.db)
            .get_campaign_attendance(None, params.syndicate_id)
            .await?;

        Ok(DistributionOrder {
            current_order,
            current_player,
            all_players,
            all_campaign_loot,
            all_loot_requests,
            all_campaigns,
            loot_statuses: label::to_dictionary::<CampaignLootStatus>(),
            campaign_id: params.campaign_id,
            undistributed_loot_only: params.undistributed_loot_only,
            include_inactive: params.include_inactive,
            total_attendance_rate: rates.total,
            hard_t5_attendance_rate: rates.last10_t5_hard,
        })
    }

    /// Moves a player to the bottom of the distribution order.
    ///
    /// The move references the awarded loot request, a comment, or both.
    ///
    /// # Arguments
    /// - `player_id` - Player to move
    /// - `loot_request_id` - Awarded request made for the player
    /// - `comment` - Reason for a manual move
    ///
    /// # Returns
    /// - `Ok(true)` - History entry appended
    /// - `Ok(false)` - Neither request nor comment given, unknown player, unknown request,
    ///   or the request was made for another player
    /// - `Err(AppError)` - Database error
    pub async fn append_player_to_bottom(
        &self,
        player_id: i32,
        loot_request_id: Option<i32>,
        comment: Option<String>,
    ) -> Result<bool, AppError> {
        let comment = comment.filter(|c| !c.trim().is_empty());
        if loot_request_id.is_none() && comment.is_none() {
            return Ok(false);
        }

        if PlayerRepository::new(self.db)
            .find_by_id(player_id)
            .await?
            .is_none()
        {
            return Ok(false);
        }

        if let Some(request_id) = loot_request_id {
            let request = LootRequestRepository::new(self.db)
                .find_by_id(request_id)
                .await?;
            if !request.is_some_and(|r| r.requested_for_id == player_id) {
                return Ok(false);
            }
        }

        PositionHistoryRepository::new(self.db)
            .append(player_id, loot_request_id, comment)
            .await?;

        Ok(true)
    }

    /// Requests undistributed loot for a player.
    ///
    /// An open request already made for the same player is replaced; a decided one blocks
    /// new requests. A non-blank special offer description turns the request into a
    /// special offer.
    ///
    /// # Returns
    /// - `Ok(Some(LootRequest))` - The created or updated request
    /// - `Ok(None)` - Loot missing, already handed out or of another syndicate, a player
    ///   outside the syndicate, or the request was already decided
    /// - `Err(AppError)` - Database error
    pub async fn request_loot(
        &self,
        params: LootRequestParams,
    ) -> Result<Option<LootRequest>, AppError> {
        let Some(loot) = self
            .find_syndicate_loot(params.loot_id, params.syndicate_id)
            .await?
        else {
            return Ok(None);
        };
        if loot.status != CampaignLootStatus::Undistributed {
            return Ok(None);
        }

        if !self
            .is_member(params.requested_by_id, params.syndicate_id)
            .await?
            || !self
                .is_member(params.requested_for_id, params.syndicate_id)
                .await?
        {
            return Ok(None);
        }

        let repo = LootRequestRepository::new(self.db);
        let fields = LootRequestFields {
            requested_by_id: params.requested_by_id,
            requested_for_id: params.requested_for_id,
            status: params.status(),
            special_offer_description: params.special_offer().map(str::to_string),
        };

        match repo
            .find_for_player(params.loot_id, params.requested_for_id)
            .await?
        {
            Some(existing) if existing.is_open() => Ok(repo.update(existing.id, fields).await?),
            Some(_) => Ok(None),
            None => Ok(Some(repo.create(params.loot_id, fields).await?)),
        }
    }

    /// Withdraws an open loot request.
    ///
    /// # Returns
    /// - `Ok(true)` - Request deleted
    /// - `Ok(false)` - Request missing or decided, or the player neither made it nor
    ///   benefits from it
    /// - `Err(AppError)` - Database error
    pub async fn withdraw_loot_request(
        &self,
        request_id: i32,
        player_id: i32,
    ) -> Result<bool, AppError> {
        let repo = LootRequestRepository::new(self.db);

        let Some(request) = repo.find_by_id(request_id).await? else {
            return Ok(false);
        };
        if request.requested_by_id != player_id && request.requested_for_id != player_id {
            return Ok(false);
        }
        if !request.is_open() {
            return Ok(false);
        }

        Ok(repo.delete(request_id).await?)
    }

    /// Awards loot to a player.
    ///
    /// The loot becomes distributed with the player as holder, the player's request is
    /// awarded, every other open request on the loot is declined and the player moves to
    /// the bottom of the distribution order.
    ///
    /// # Arguments
    /// - `loot_id` - Loot to award
    /// - `player_id` - Receiving player
    /// - `syndicate_id` - Syndicate of the caller
    ///
    /// # Returns
    /// - `Ok(true)` - Loot awarded
    /// - `Ok(false)` - Loot missing, already handed out or of another syndicate, or the
    ///   player is not a member of the syndicate
    /// - `Err(AppError)` - Database error
    pub async fn award_loot(
        &self,
        loot_id: i32,
        player_id: i32,
        syndicate_id: i32,
    ) -> Result<bool, AppError> {
        let Some(loot) = self.find_syndicate_loot(loot_id, syndicate_id).await? else {
            return Ok(false);
        };
        if !matches!(
            loot.status,
            CampaignLootStatus::Undistributed | CampaignLootStatus::PendingDistribution
        ) {
            return Ok(false);
        }
        if !self.is_member(player_id, syndicate_id).await? {
            return Ok(false);
        }

        CampaignLootRepository::new(self.db)
            .update_status(loot_id, CampaignLootStatus::Distributed, Some(player_id))
            .await?;

        let request_repo = LootRequestRepository::new(self.db);
        let request = request_repo.find_for_player(loot_id, player_id).await?;
        if let Some(request) = &request {
            request_repo
                .set_status(request.id, LootRequestStatus::Awarded)
                .await?;
        }
        let declined = request_repo
            .decline_open(loot_id, request.as_ref().map(|r| r.id))
            .await?;

        let comment = match request {
            Some(_) => None,
            None => Some(format!("Awarded {}", loot.item.name)),
        };
        PositionHistoryRepository::new(self.db)
            .append(player_id, request.as_ref().map(|r| r.id), comment)
            .await?;

        tracing::info!(
            "Awarded loot {} to player {}, declined {} other requests",
            loot_id,
            player_id,
            declined
        );

        Ok(true)
    }

    /// Changes the status and holder of loot.
    ///
    /// # Arguments
    /// - `loot_id` - Loot to change
    /// - `status` - New status, OnLoan and Distributed require a holder
    /// - `holder_id` - Player holding the loot afterwards
    /// - `syndicate_id` - Syndicate of the caller
    ///
    /// # Returns
    /// - `Ok(Some(Loot))` - The updated loot
    /// - `Ok(None)` - Loot missing or of another syndicate, holder outside the syndicate,
    ///   or a holder is required but missing
    /// - `Err(AppError)` - Database error
    pub async fn set_loot_status(
        &self,
        loot_id: i32,
        status: CampaignLootStatus,
        holder_id: Option<i32>,
        syndicate_id: i32,
    ) -> Result<Option<Loot>, AppError> {
        if self
            .find_syndicate_loot(loot_id, syndicate_id)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        match holder_id {
            Some(holder_id) => {
                if !self.is_member(holder_id, syndicate_id).await? {
                    return Ok(None);
                }
            }
            None => {
                if matches!(
                    status,
                    CampaignLootStatus::OnLoan | CampaignLootStatus::Distributed
                ) {
                    return Ok(None);
                }
            }
        }

        Ok(CampaignLootRepository::new(self.db)
            .update_status(loot_id, status, holder_id)
            .await?)
    }

    /// Loads loot when its campaign belongs to the syndicate.
    async fn find_syndicate_loot(
        &self,
        loot_id: i32,
        syndicate_id: i32,
    ) -> Result<Option<Loot>, AppError> {
        let Some(loot) = CampaignLootRepository::new(self.db)
            .find_by_id(loot_id)
            .await?
        else {
            return Ok(None);
        };

        let campaign = CampaignRepository::new(self.db)
            .find_by_id(loot.campaign_id)
            .await?;

        Ok(campaign
            .is_some_and(|c| c.belongs_to(syndicate_id))
            .then_some(loot))
    }

    async fn is_member(&self, player_id: i32, syndicate_id: i32) -> Result<bool, AppError> {
        let player = PlayerRepository::new(self.db).find_by_id(player_id).await?;

        Ok(player.is_some_and(|p| p.is_member_of(syndicate_id)))
    }
}
