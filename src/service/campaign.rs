//! Campaign service.
//!
//! Campaign scheduling, signups, attendance statistics, the campaign overview and adding
//! looted items to campaigns.

mod attendance;
pub mod page;

use std::collections::HashMap;

use chrono::Utc;
use dioxus_logger::tracing;
use entity::{
    campaign::{CampaignDifficulty, CampaignStatus},
    campaign_loot::CampaignLootStatus,
    item::ItemRarity,
};
use sea_orm::DatabaseConnection;

use crate::{
    data::{
        campaign::CampaignRepository, campaign_attendance::CampaignAttendanceRepository,
        campaign_loot::CampaignLootRepository, campaign_signup::CampaignSignupRepository,
        item::ItemRepository, loot_request::LootRequestRepository, player::PlayerRepository,
    },
    error::{tauhead::TauheadError, AppError},
    model::{
        attendance::AttendanceRates,
        campaign::{
            Campaign, CampaignDetails, CampaignForm, CampaignOverview, CampaignOverviewParams,
            CampaignParams, CampaignPhase, GetCampaignParams,
        },
        import::CampaignPageSummary,
        loot::{Loot, LootRequest, LootToDistribute},
        player::Player,
    },
    tauhead::ItemLookup,
    util::label,
};

/// Past campaigns listed in the overview unless all are requested.
pub const PAST_CAMPAIGN_LIMIT: usize = 10;

pub struct CampaignService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CampaignService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the campaign overview of a syndicate.
    ///
    /// Campaigns are split into current, future and past by status. Loot of every past
    /// campaign is listed for distribution, annotated for the viewing player.
    ///
    /// # Arguments
    /// - `params` - Syndicate, viewing player and listing options
    ///
    /// # Returns
    /// - `Ok(CampaignOverview)` - The overview, empty lists for a syndicate without campaigns
    /// - `Err(AppError)` - Database error
    pub async fn get_campaign_overview(
        &self,
        params: CampaignOverviewParams,
    ) -> Result<CampaignOverview, AppError> {
        let campaigns = CampaignRepository::new(self.db)
            .get_by_syndicate(params.syndicate_id)
            .await?;

        let mut current_campaigns = Vec::new();
        let mut future_campaigns = Vec::new();
        let mut past_campaigns = Vec::new();
        for campaign in campaigns {
            match campaign.phase() {
                CampaignPhase::Current => current_campaigns.push(campaign),
                CampaignPhase::Future => future_campaigns.push(campaign),
                CampaignPhase::Past => past_campaigns.push(campaign),
            }
        }
        // Campaigns arrive newest first, upcoming ones are listed soonest first
        current_campaigns.reverse();
        future_campaigns.reverse();

        let past_ids: Vec<i32> = past_campaigns.iter().map(|c| c.id).collect();
        if !params.all_past_campaigns {
            past_campaigns.truncate(PAST_CAMPAIGN_LIMIT);
        }

        let player = match params.player_id {
            Some(player_id) => PlayerRepository::new(self.db).find_by_id(player_id).await?,
            None => None,
        };

        let loot = CampaignLootRepository::new(self.db)
            .get_by_campaigns(&past_ids, !params.include_distributed_loot)
            .await?;
        let loot_to_distribute = self.annotate_loot(loot, player.as_ref()).await?;

        let mut my_signups = HashMap::new();
        let mut my_attendance = HashMap::new();
        if let Some(player) = &player {
            for signup in CampaignSignupRepository::new(self.db)
                .get_by_player(player.id)
                .await?
            {
                my_signups.insert(signup.campaign_id, signup);
            }
            for record in CampaignAttendanceRepository::new(self.db)
                .get_by_player(player.id)
                .await?
            {
                my_attendance.insert(record.campaign_id, record);
            }
        }

        Ok(CampaignOverview {
            current_campaigns,
            future_campaigns,
            past_campaigns,
            loot_statuses: label::to_dictionary::<CampaignLootStatus>(),
            loot_to_distribute,
            my_signups,
            my_attendance,
        })
    }

    /// Attaches requests and the viewing player's restrictions to loot.
    async fn annotate_loot(
        &self,
        loot: Vec<Loot>,
        player: Option<&Player>,
    ) -> Result<Vec<LootToDistribute>, AppError> {
        let loot_ids: Vec<i32> = loot.iter().map(|l| l.id).collect();
        let mut requests_by_loot: HashMap<i32, Vec<LootRequest>> = HashMap::new();
        for request in LootRequestRepository::new(self.db)
            .get_by_loot_ids(&loot_ids)
            .await?
        {
            requests_by_loot
                .entry(request.loot_id)
                .or_default()
                .push(request);
        }

        let annotated = loot
            .into_iter()
            .map(|loot| {
                let all_requests = requests_by_loot.remove(&loot.id).unwrap_or_default();
                let request = player.and_then(|p| {
                    all_requests
                        .iter()
                        .find(|r| r.requested_for_id == p.id)
                        .cloned()
                });
                let tier_restriction = player.is_some_and(|p| loot.item.tier > p.tier());

                LootToDistribute {
                    loot,
                    tier_restriction,
                    request_exists: request.is_some(),
                    request,
                    all_requests,
                }
            })
            .collect();

        Ok(annotated)
    }

    /// Loads a campaign with its players, loot and the edit choices.
    ///
    /// # Arguments
    /// - `params` - Campaign id, caller syndicate and options
    ///
    /// # Returns
    /// - `Ok(Some(CampaignDetails))` - The campaign and everything shown with it
    /// - `Ok(None)` - Campaign missing, or owned by another syndicate and the caller is
    ///   not an admin
    /// - `Err(AppError)` - Database error
    pub async fn get_campaign_by_id(
        &self,
        params: GetCampaignParams,
    ) -> Result<Option<CampaignDetails>, AppError> {
        let Some(campaign) = CampaignRepository::new(self.db)
            .find_by_id(params.campaign_id)
            .await?
        else {
            return Ok(None);
        };

        if !params.is_admin && !campaign.belongs_to(params.syndicate_id) {
            return Ok(None);
        }

        let syndicate_id = campaign.syndicate_id.unwrap_or(params.syndicate_id);
        let players = PlayerRepository::new(self.db)
            .get_by_syndicate(syndicate_id, params.include_inactive_players)
            .await?;
        let loot = CampaignLootRepository::new(self.db)
            .get_by_campaign(campaign.id)
            .await?;
        let known_epics = ItemRepository::new(self.db)
            .get_by_rarity(ItemRarity::Epic)
            .await?;

        Ok(Some(CampaignDetails {
            campaign,
            players,
            loot,
            difficulty_levels: label::to_dictionary::<CampaignDifficulty>(),
            statuses: label::to_dictionary::<CampaignStatus>(),
            known_epics,
        }))
    }

    /// Creates a campaign, or edits one when `params.id` is set.
    ///
    /// Parameters without a syndicate are assigned to the caller's syndicate. A manager id
    /// of `0` means no manager.
    ///
    /// # Arguments
    /// - `params` - Campaign fields
    /// - `syndicate_id` - Syndicate of the caller
    ///
    /// # Returns
    /// - `Ok(Some(Campaign))` - The created or edited campaign
    /// - `Ok(None)` - Rejected: foreign syndicate, manager outside the syndicate, or the
    ///   edited campaign is missing or foreign
    /// - `Err(AppError)` - Database error
    pub async fn create_or_edit_campaign(
        &self,
        mut params: CampaignParams,
        syndicate_id: i32,
    ) -> Result<Option<Campaign>, AppError> {
        match params.syndicate_id {
            None => params.syndicate_id = Some(syndicate_id),
            Some(id) if id != syndicate_id => return Ok(None),
            Some(_) => {}
        }

        params.manager_id = params.manager();
        if let Some(manager_id) = params.manager_id {
            let manager = PlayerRepository::new(self.db).find_by_id(manager_id).await?;
            if !manager.is_some_and(|m| m.is_member_of(syndicate_id)) {
                return Ok(None);
            }
        }

        let repo = CampaignRepository::new(self.db);

        let Some(id) = params.id else {
            let campaign = repo.create(params).await?;
            tracing::info!(
                "Created campaign {} for syndicate {}",
                campaign.id,
                syndicate_id
            );
            return Ok(Some(campaign));
        };

        match repo.find_by_id(id).await? {
            Some(existing) if existing.belongs_to(syndicate_id) => {
                Ok(repo.update(id, params).await?)
            }
            _ => Ok(None),
        }
    }

    /// Adds the item behind a TauHead URL to a campaign's loot.
    ///
    /// An item already catalogued under the same slug is reused as is; otherwise the
    /// looked-up item is added to the catalogue first.
    ///
    /// # Arguments
    /// - `lookup` - Item lookup resolving the URL
    /// - `campaign_id` - Campaign the item dropped in
    /// - `url` - TauHead item page URL
    ///
    /// # Returns
    /// - `Ok(Some(Loot))` - The created loot with its item
    /// - `Ok(None)` - Campaign missing, URL invalid, or the lookup found no item
    /// - `Err(AppError)` - Database or lookup failure
    pub async fn add_loot_by_tauhead_url<L: ItemLookup>(
        &self,
        lookup: &L,
        campaign_id: i32,
        url: &str,
    ) -> Result<Option<Loot>, AppError> {
        if CampaignRepository::new(self.db)
            .find_by_id(campaign_id)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        let data = match lookup.get_item_data(url).await {
            Ok(Some(data)) => data,
            Ok(None) => return Ok(None),
            Err(AppError::TauheadErr(TauheadError::InvalidItemUrl(url))) => {
                tracing::debug!("Ignoring invalid TauHead item URL {}", url);
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let item_repo = ItemRepository::new(self.db);
        let item = match item_repo.find_by_slug(&data.slug).await? {
            Some(item) => item,
            None => item_repo.create(data).await?,
        };

        let loot = CampaignLootRepository::new(self.db)
            .create(campaign_id, item.id)
            .await?;

        Ok(Some(loot))
    }

    /// Prepares the form for a new campaign of a syndicate.
    pub async fn get_new_campaign(&self, syndicate_id: i32) -> Result<CampaignForm, AppError> {
        let players = PlayerRepository::new(self.db)
            .get_by_syndicate(syndicate_id, false)
            .await?;

        Ok(CampaignForm {
            campaign: CampaignParams {
                id: None,
                station: String::new(),
                name: String::new(),
                comments: None,
                difficulty: CampaignDifficulty::Easy,
                tiers: 0,
                syndicate_id: Some(syndicate_id),
                status: CampaignStatus::Planned,
                utc_date_time: Utc::now(),
                manager_id: None,
            },
            players,
            difficulty_levels: label::to_dictionary::<CampaignDifficulty>(),
            statuses: label::to_dictionary::<CampaignStatus>(),
        })
    }

    /// Imports a campaign history page.
    ///
    /// Each line marks the matching scheduled campaign (same syndicate, time and station)
    /// completed, or records a new completed campaign, and adds attendance for attendees
    /// whose names match a syndicate player case-insensitively. Afterwards every open
    /// campaign of the syndicate scheduled in the past is marked completed.
    ///
    /// # Arguments
    /// - `page` - Page text, see [`page`] for the line format
    /// - `syndicate_id` - Syndicate the page belongs to
    ///
    /// # Returns
    /// - `Ok(CampaignPageSummary)` - Counts of the changes made
    /// - `Err(AppError)` - Database error
    pub async fn parse_campaign_page(
        &self,
        page: &str,
        syndicate_id: i32,
    ) -> Result<CampaignPageSummary, AppError> {
        let (entries, skipped) = page::parse_page(page);
        let mut summary = CampaignPageSummary {
            skipped,
            ..Default::default()
        };

        let campaign_repo = CampaignRepository::new(self.db);
        let attendance_repo = CampaignAttendanceRepository::new(self.db);

        let roster: HashMap<String, i32> = PlayerRepository::new(self.db)
            .get_by_syndicate(syndicate_id, true)
            .await?
            .into_iter()
            .map(|p| (p.name.to_lowercase(), p.id))
            .collect();

        for entry in entries {
            let scheduled = campaign_repo
                .find_by_schedule(syndicate_id, entry.utc_date_time, &entry.station)
                .await?;

            let campaign_id = match scheduled {
                Some(campaign) => {
                    campaign_repo
                        .set_status(campaign.id, CampaignStatus::Completed)
                        .await?;
                    summary.updated += 1;
                    campaign.id
                }
                None => {
                    let campaign = campaign_repo
                        .create(CampaignParams {
                            id: None,
                            name: entry.station.clone(),
                            station: entry.station,
                            comments: None,
                            difficulty: entry.difficulty,
                            tiers: entry.tiers,
                            syndicate_id: Some(syndicate_id),
                            status: CampaignStatus::Completed,
                            utc_date_time: entry.utc_date_time,
                            manager_id: None,
                        })
                        .await?;
                    summary.created += 1;
                    campaign.id
                }
            };

            for name in &entry.attendees {
                let Some(player_id) = roster.get(&name.to_lowercase()) else {
                    tracing::debug!("Skipping unknown attendee {}", name);
                    continue;
                };

                if attendance_repo
                    .create_if_missing(campaign_id, *player_id)
                    .await?
                {
                    summary.attendance_added += 1;
                }
            }
        }

        summary.closed = campaign_repo
            .close_past_open(syndicate_id, Utc::now())
            .await?;

        tracing::info!(
            "Imported campaign page for syndicate {}: {} created, {} updated, {} skipped, {} closed",
            syndicate_id,
            summary.created,
            summary.updated,
            summary.skipped,
            summary.closed
        );

        Ok(summary)
    }

    /// Signs a player up for a campaign or removes their signup.
    ///
    /// # Arguments
    /// - `player_id` - Player changing their signup
    /// - `campaign_id` - Campaign of the same syndicate
    /// - `attending` - `true` to sign up, `false` to remove the signup
    ///
    /// # Returns
    /// - `Ok(true)` - Signup added or removed
    /// - `Ok(false)` - Unknown player or campaign, foreign campaign, already signed up
    ///   when adding, or not signed up when removing
    /// - `Err(AppError)` - Database error
    pub async fn set_signup_status(
        &self,
        player_id: i32,
        campaign_id: i32,
        attending: bool,
    ) -> Result<bool, AppError> {
        let Some(player) = PlayerRepository::new(self.db).find_by_id(player_id).await? else {
            return Ok(false);
        };
        let Some(campaign) = CampaignRepository::new(self.db)
            .find_by_id(campaign_id)
            .await?
        else {
            return Ok(false);
        };
        if !player.syndicate_id.is_some_and(|id| campaign.belongs_to(id)) {
            return Ok(false);
        }

        let repo = CampaignSignupRepository::new(self.db);

        if !attending {
            return Ok(repo.delete(campaign_id, player_id).await?);
        }

        if repo.find(campaign_id, player_id).await?.is_some() {
            return Ok(false);
        }
        repo.create(campaign_id, player_id, true).await?;

        Ok(true)
    }

    /// Computes attendance rates of a syndicate's players.
    ///
    /// # Arguments
    /// - `player_id` - Restrict the rates to one player, `None` for every player
    /// - `syndicate_id` - Syndicate whose campaigns are counted
    ///
    /// # Returns
    /// - `Ok(AttendanceRates)` - Rates keyed by player id, empty maps for an unknown player
    /// - `Err(AppError)` - Database error
    pub async fn get_campaign_attendance(
        &self,
        player_id: Option<i32>,
        syndicate_id: i32,
    ) -> Result<AttendanceRates, AppError> {
        if let Some(player_id) = player_id {
            if PlayerRepository::new(self.db)
                .find_by_id(player_id)
                .await?
                .is_none()
            {
                return Ok(AttendanceRates::default());
            }
        }

        let campaigns = CampaignRepository::new(self.db)
            .get_by_syndicate(syndicate_id)
            .await?;
        let campaign_ids: Vec<i32> = campaigns.iter().map(|c| c.id).collect();
        let records = CampaignAttendanceRepository::new(self.db)
            .get_by_campaigns(&campaign_ids)
            .await?;

        Ok(attendance::compute_rates(&campaigns, &records, player_id))
    }

    /// Whether the player manages the campaign.
    pub async fn player_can_edit_campaign(
        &self,
        player_id: Option<i32>,
        campaign_id: i32,
    ) -> Result<bool, AppError> {
        let Some(player_id) = player_id else {
            return Ok(false);
        };
        if PlayerRepository::new(self.db)
            .find_by_id(player_id)
            .await?
            .is_none()
        {
            return Ok(false);
        }

        let campaign = CampaignRepository::new(self.db)
            .find_by_id(campaign_id)
            .await?;

        Ok(campaign.is_some_and(|c| c.manager_id == Some(player_id)))
    }

    /// Whether the player may become the manager of the campaign.
    ///
    /// Requires a campaign of the player's syndicate that has no manager yet and has not
    /// started.
    pub async fn player_can_volunteer_for_campaign(
        &self,
        player_id: Option<i32>,
        campaign_id: i32,
    ) -> Result<bool, AppError> {
        let Some(player_id) = player_id else {
            return Ok(false);
        };
        let Some(player) = PlayerRepository::new(self.db).find_by_id(player_id).await? else {
            return Ok(false);
        };
        let Some(campaign) = CampaignRepository::new(self.db)
            .find_by_id(campaign_id)
            .await?
        else {
            return Ok(false);
        };

        Ok(player.syndicate_id.is_some_and(|id| campaign.belongs_to(id))
            && campaign.manager_id.is_none()
            && matches!(
                campaign.status,
                CampaignStatus::Unknown | CampaignStatus::Planned
            ))
    }

    /// Makes the player manager of the campaign when they may volunteer.
    ///
    /// # Returns
    /// - `Ok(true)` - The player now manages the campaign
    /// - `Ok(false)` - Volunteering not allowed, campaign unchanged
    /// - `Err(AppError)` - Database error
    pub async fn volunteer_for_campaign(
        &self,
        player_id: i32,
        campaign_id: i32,
    ) -> Result<bool, AppError> {
        if !self
            .player_can_volunteer_for_campaign(Some(player_id), campaign_id)
            .await?
        {
            return Ok(false);
        }

        let updated = CampaignRepository::new(self.db)
            .set_manager(campaign_id, Some(player_id))
            .await?;

        if updated {
            tracing::info!(
                "Player {} volunteered to manage campaign {}",
                player_id,
                campaign_id
            );
        }

        Ok(updated)
    }
}
