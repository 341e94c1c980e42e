use super::*;
use crate::data::campaign::CampaignRepository;
use entity::{
    campaign_loot::CampaignLootStatus, item::ItemRarity, loot_request::LootRequestStatus,
};

fn overview_params(seed: &Seed) -> CampaignOverviewParams {
    CampaignOverviewParams {
        syndicate_id: seed.syndicate.id,
        player_id: Some(seed.leader.id),
        all_past_campaigns: false,
        include_distributed_loot: false,
    }
}

/// Tests the overview of a syndicate with one planned campaign.
///
/// Expected: Ok with one future campaign, no past campaigns and no loot
#[tokio::test]
async fn lists_planned_campaign_as_future() -> Result<(), AppError> {
    let test = TestBuilder::new().with_campaign_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let seed = seed(db).await?;

    let service = CampaignService::new(db);
    let overview = service.get_campaign_overview(overview_params(&seed)).await?;

    assert!(overview.current_campaigns.is_empty());
    assert_eq!(overview.future_campaigns.len(), 1);
    assert!(overview.past_campaigns.is_empty());
    assert_eq!(overview.loot_statuses.len(), 5);
    assert!(overview.loot_to_distribute.is_empty());

    Ok(())
}

/// Tests the loot annotations of the overview.
///
/// Seeds a completed campaign with a tier 1 and a tier 2 epic, and two requests on the
/// tier 2 loot by the viewing leader and another player. Also signs the leader up for,
/// and records their attendance of, a campaign of another syndicate.
///
/// Expected: Ok with both loot entries; the tier 2 entry restricted for the tier 1
/// leader and carrying the leader's request among two requests
#[tokio::test]
async fn annotates_loot_for_viewing_player() -> Result<(), AppError> {
    let test = TestBuilder::new().with_campaign_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let seed = seed(db).await?;

    CampaignRepository::new(db)
        .set_status(seed.campaign.id, CampaignStatus::Completed)
        .await?;

    let tier1 = factory::item::ItemFactory::new(db)
        .tier(1)
        .rarity(ItemRarity::Epic)
        .build()
        .await?;
    let tier2 = factory::item::ItemFactory::new(db)
        .tier(2)
        .rarity(ItemRarity::Epic)
        .build()
        .await?;
    let tier1_loot = factory::create_loot(db, seed.campaign.id, tier1.id).await?;
    let tier2_loot = factory::create_loot(db, seed.campaign.id, tier2.id).await?;
    factory::create_loot_request(db, tier2_loot.id, seed.leader.id).await?;
    factory::loot_request::LootRequestFactory::new(db, tier2_loot.id, seed.player1.id)
        .status(LootRequestStatus::SpecialOffer)
        .special_offer_description(Some("Spare armor".to_string()))
        .build()
        .await?;

    let other_syndicate = factory::create_syndicate(db).await?;
    let other_campaign = factory::create_campaign(db, other_syndicate.id).await?;
    factory::create_signup(db, other_campaign.id, seed.leader.id, true).await?;
    factory::create_attendance(db, other_campaign.id, seed.leader.id).await?;

    let service = CampaignService::new(db);
    let overview = service.get_campaign_overview(overview_params(&seed)).await?;

    assert!(overview.future_campaigns.is_empty());
    assert_eq!(overview.past_campaigns.len(), 1);
    assert_eq!(overview.loot_to_distribute.len(), 2);

    let first = &overview.loot_to_distribute[0];
    assert_eq!(first.loot.id, tier1_loot.id);
    assert_eq!(first.loot.status, CampaignLootStatus::Undistributed);
    assert!(!first.tier_restriction);
    assert!(!first.request_exists);
    assert!(first.request.is_none());

    let second = &overview.loot_to_distribute[1];
    assert_eq!(second.loot.id, tier2_loot.id);
    assert!(second.tier_restriction);
    assert!(second.request_exists);
    assert_eq!(
        second.request.as_ref().map(|r| r.requested_for_id),
        Some(seed.leader.id)
    );
    assert_eq!(second.all_requests.len(), 2);

    assert_eq!(overview.my_signups.len(), 1);
    assert!(overview.my_signups.contains_key(&other_campaign.id));
    assert_eq!(overview.my_attendance.len(), 1);
    assert!(overview.my_attendance.contains_key(&other_campaign.id));

    Ok(())
}

/// Tests hiding loot that was already handed out.
///
/// Expected: Ok with distributed loot listed only when requested
#[tokio::test]
async fn hides_distributed_loot_by_default() -> Result<(), AppError> {
    let test = TestBuilder::new().with_campaign_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let seed = seed(db).await?;

    let past = CampaignFactory::new(db, seed.syndicate.id)
        .status(CampaignStatus::Completed)
        .build()
        .await?;
    let item = factory::create_item(db).await?;
    factory::campaign_loot::CampaignLootFactory::new(db, past.id, item.id)
        .status(CampaignLootStatus::Distributed)
        .holder_id(Some(seed.player1.id))
        .build()
        .await?;

    let service = CampaignService::new(db);

    let hidden = service.get_campaign_overview(overview_params(&seed)).await?;
    assert!(hidden.loot_to_distribute.is_empty());

    let shown = service
        .get_campaign_overview(CampaignOverviewParams {
            include_distributed_loot: true,
            ..overview_params(&seed)
        })
        .await?;
    assert_eq!(shown.loot_to_distribute.len(), 1);

    Ok(())
}

/// Tests capping the past campaign list.
///
/// Expected: Ok with ten past campaigns by default and all twelve when requested
#[tokio::test]
async fn caps_past_campaigns_unless_all_requested() -> Result<(), AppError> {
    let test = TestBuilder::new().with_campaign_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let seed = seed(db).await?;

    for _ in 0..12 {
        CampaignFactory::new(db, seed.syndicate.id)
            .status(CampaignStatus::Completed)
            .build()
            .await?;
    }

    let service = CampaignService::new(db);

    let capped = service.get_campaign_overview(overview_params(&seed)).await?;
    assert_eq!(capped.past_campaigns.len(), 10);

    let all = service
        .get_campaign_overview(CampaignOverviewParams {
            all_past_campaigns: true,
            ..overview_params(&seed)
        })
        .await?;
    assert_eq!(all.past_campaigns.len(), 12);

    Ok(())
}
