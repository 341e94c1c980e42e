use super::*;

/// Tests loading the loot of several campaigns.
///
/// Verifies that loot is ordered by item tier and that loot of campaigns not asked for
/// is excluded.
///
/// Expected: Ok with the loot of both campaigns, lowest tier first
#[tokio::test]
async fn returns_loot_sorted_by_tier() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_campaign_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let syndicate = factory::create_syndicate(db).await?;
    let first = factory::create_campaign(db, syndicate.id).await?;
    let second = factory::create_campaign(db, syndicate.id).await?;
    let ignored = factory::create_campaign(db, syndicate.id).await?;
    let tier3 = factory::item::ItemFactory::new(db).tier(3).build().await?;
    let tier1 = factory::item::ItemFactory::new(db).tier(1).build().await?;

    factory::create_loot(db, first.id, tier3.id).await?;
    factory::create_loot(db, second.id, tier1.id).await?;
    factory::create_loot(db, ignored.id, tier1.id).await?;

    let repo = CampaignLootRepository::new(db);
    let loot = repo.get_by_campaigns(&[first.id, second.id], false).await?;

    let tiers: Vec<i32> = loot.iter().map(|l| l.item.tier).collect();
    assert_eq!(tiers, vec![1, 3]);

    Ok(())
}

/// Tests restricting loot to undistributed entries.
///
/// Expected: Ok with only the undistributed loot
#[tokio::test]
async fn filters_undistributed_loot() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_campaign_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, player, campaign, item, loot) =
        factory::helpers::create_loot_with_dependencies(db).await?;
    factory::campaign_loot::CampaignLootFactory::new(db, campaign.id, item.id)
        .status(CampaignLootStatus::Distributed)
        .holder_id(Some(player.id))
        .build()
        .await?;

    let repo = CampaignLootRepository::new(db);

    let undistributed = repo.get_by_campaigns(&[campaign.id], true).await?;
    assert_eq!(undistributed.len(), 1);
    assert_eq!(undistributed[0].id, loot.id);

    let all = repo.get_by_campaign(campaign.id).await?;
    assert_eq!(all.len(), 2);

    Ok(())
}

/// Tests loading loot for no campaigns.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_no_campaigns() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_campaign_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CampaignLootRepository::new(db);
    let loot = repo.get_by_campaigns(&[], false).await?;

    assert!(loot.is_empty());

    Ok(())
}
