use super::*;

/// Tests awarding loot to a player with an open request.
///
/// Expected: Ok(true) with the loot distributed, the request awarded, the other request
/// declined and the player moved to the bottom
#[tokio::test]
async fn awards_requested_loot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_campaign_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let seed = seed(db).await?;

    let service = LootService::new(db);
    let result = service
        .award_loot(seed.loot2.id, seed.player1.id, seed.syndicate.id)
        .await?;

    assert!(result);

    let loot = entity::prelude::CampaignLoot::find_by_id(seed.loot2.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(loot.status, CampaignLootStatus::Distributed);
    assert_eq!(loot.holder_id, Some(seed.player1.id));

    let awarded = entity::prelude::LootRequest::find_by_id(seed.request1.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(awarded.status, LootRequestStatus::Awarded);
    let declined = entity::prelude::LootRequest::find_by_id(seed.request2.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(declined.status, LootRequestStatus::Declined);

    let last = last_history_entry(db).await?;
    assert_eq!(last.player_id, seed.player1.id);
    assert_eq!(last.loot_request_id, Some(seed.request1.id));
    assert_eq!(last.comment, None);

    Ok(())
}

/// Tests awarding loot to a player without a request.
///
/// Expected: Ok(true) with open requests declined and a history comment naming the item
#[tokio::test]
async fn awards_unrequested_loot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_campaign_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let seed = seed(db).await?;

    let service = LootService::new(db);
    let result = service
        .award_loot(seed.loot2.id, seed.player3.id, seed.syndicate.id)
        .await?;

    assert!(result);

    let requests = entity::prelude::LootRequest::find().all(db).await?;
    assert!(requests
        .iter()
        .all(|r| r.status == LootRequestStatus::Declined));

    let last = last_history_entry(db).await?;
    assert_eq!(last.player_id, seed.player3.id);
    assert_eq!(last.loot_request_id, None);
    assert_eq!(last.comment.as_deref(), Some("Awarded Tier 1 Blade"));

    Ok(())
}

/// Tests awards that are not allowed.
///
/// Verifies loot already distributed, unknown loot, another syndicate and an unknown
/// player.
///
/// Expected: Ok(false) with nothing changed
#[tokio::test]
async fn rejects_invalid_awards() -> Result<(), AppError> {
    let test = TestBuilder::new().with_campaign_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let seed = seed(db).await?;
    let item = factory::create_item(db).await?;
    let sold = CampaignLootFactory::new(db, seed.campaign2.id, item.id)
        .status(CampaignLootStatus::Sold)
        .build()
        .await?;
    let other = factory::create_syndicate(db).await?;

    let service = LootService::new(db);

    assert!(
        !service
            .award_loot(sold.id, seed.player1.id, seed.syndicate.id)
            .await?
    );
    assert!(
        !service
            .award_loot(sold.id + 10, seed.player1.id, seed.syndicate.id)
            .await?
    );
    assert!(
        !service
            .award_loot(seed.loot2.id, seed.player1.id, other.id)
            .await?
    );
    assert!(
        !service
            .award_loot(seed.loot2.id, seed.player3.id + 10, seed.syndicate.id)
            .await?
    );

    let loot = entity::prelude::CampaignLoot::find_by_id(seed.loot2.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(loot.status, CampaignLootStatus::Undistributed);
    assert_eq!(
        entity::prelude::PlayerListPositionHistory::find()
            .count(db)
            .await?,
        3
    );

    Ok(())
}
