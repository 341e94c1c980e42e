use super::*;

fn order_params(syndicate_id: i32) -> DistributionOrderParams {
    DistributionOrderParams {
        syndicate_id,
        campaign_id: None,
        undistributed_loot_only: false,
        include_inactive: false,
        player_id: None,
    }
}

/// Tests the distribution order of a syndicate without data.
///
/// Expected: Ok with empty collections and the loot status labels
#[tokio::test]
async fn returns_empty_order_for_empty_syndicate() -> Result<(), AppError> {
    let test = TestBuilder::new().with_campaign_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let syndicate = factory::create_syndicate(db).await?;

    let service = LootService::new(db);
    let order = service
        .get_current_distribution_order(order_params(syndicate.id))
        .await?;

    assert!(order.current_order.is_empty());
    assert!(order.all_players.is_empty());
    assert!(order.all_campaign_loot.is_empty());
    assert!(order.all_loot_requests.is_empty());
    assert!(order.all_campaigns.is_empty());
    assert!(order.total_attendance_rate.is_empty());
    assert!(order.hard_t5_attendance_rate.is_empty());
    assert_eq!(order.loot_statuses.len(), 5);
    assert_eq!(order.loot_statuses[&3], "OnLoan");

    Ok(())
}

/// Tests the full distribution order of the seeded syndicate.
///
/// Expected: Ok with players in history order, loot grouped per campaign and sorted by
/// tier, requests grouped per beneficiary and attendance rates
#[tokio::test]
async fn builds_full_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_campaign_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let seed = seed(db).await?;

    let service = LootService::new(db);
    let order = service
        .get_current_distribution_order(DistributionOrderParams {
            player_id: Some(seed.player2.id),
            ..order_params(seed.syndicate.id)
        })
        .await?;

    let ids: Vec<i32> = order.current_order.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![seed.player1.id, seed.player2.id, seed.player3.id]);
    assert_eq!(order.all_players.len(), 3);
    assert_eq!(order.current_player.map(|p| p.id), Some(seed.player2.id));
    assert_eq!(order.all_campaigns.len(), 2);

    assert_eq!(order.all_campaign_loot.len(), 2);
    let campaign1_loot: Vec<i32> = order.all_campaign_loot[&seed.campaign1.id]
        .iter()
        .map(|l| l.id)
        .collect();
    assert_eq!(campaign1_loot, vec![seed.loot2.id, seed.loot1.id]);
    assert_eq!(order.all_campaign_loot[&seed.campaign2.id].len(), 2);

    assert_eq!(order.all_loot_requests.len(), 2);
    assert_eq!(order.all_loot_requests[&seed.player1.id][0].id, seed.request1.id);
    assert_eq!(order.all_loot_requests[&seed.player2.id][0].id, seed.request2.id);

    assert_eq!(order.total_attendance_rate[&seed.player1.id], 100);
    assert_eq!(order.total_attendance_rate[&seed.player2.id], 50);
    assert_eq!(order.total_attendance_rate[&seed.player3.id], 50);
    assert_eq!(order.hard_t5_attendance_rate.len(), 2);
    assert_eq!(order.hard_t5_attendance_rate[&seed.player1.id], 100);
    assert_eq!(order.hard_t5_attendance_rate[&seed.player3.id], 100);

    Ok(())
}

/// Tests that players without history come first and recent recipients come last.
///
/// Expected: Ok with the new player first and the latest recipient last
#[tokio::test]
async fn orders_players_by_latest_history() -> Result<(), AppError> {
    let test = TestBuilder::new().with_campaign_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let seed = seed(db).await?;
    let newcomer = factory::create_player(db, seed.syndicate.id).await?;
    PositionHistoryFactory::new(db, seed.player1.id)
        .created_at(Utc.with_ymd_and_hms(2020, 6, 1, 0, 0, 0).unwrap())
        .build()
        .await?;

    let service = LootService::new(db);
    let order = service
        .get_current_distribution_order(order_params(seed.syndicate.id))
        .await?;

    let ids: Vec<i32> = order.current_order.iter().map(|p| p.id).collect();
    assert_eq!(
        ids,
        vec![newcomer.id, seed.player2.id, seed.player3.id, seed.player1.id]
    );

    Ok(())
}

/// Tests restricting the order to one campaign's undistributed loot.
///
/// Expected: Ok with loot of that campaign only, distributed loot left out
#[tokio::test]
async fn filters_loot_by_campaign_and_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_campaign_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let seed = seed(db).await?;
    let item = factory::create_item(db).await?;
    CampaignLootFactory::new(db, seed.campaign2.id, item.id)
        .status(CampaignLootStatus::Distributed)
        .holder_id(Some(seed.player3.id))
        .build()
        .await?;

    let service = LootService::new(db);
    let order = service
        .get_current_distribution_order(DistributionOrderParams {
            campaign_id: Some(seed.campaign2.id),
            undistributed_loot_only: true,
            ..order_params(seed.syndicate.id)
        })
        .await?;

    assert_eq!(order.all_campaign_loot.len(), 1);
    let loot_ids: Vec<i32> = order.all_campaign_loot[&seed.campaign2.id]
        .iter()
        .map(|l| l.id)
        .collect();
    assert_eq!(loot_ids, vec![seed.loot3.id, seed.loot4.id]);
    assert!(order.all_loot_requests.is_empty());
    assert_eq!(order.campaign_id, Some(seed.campaign2.id));

    Ok(())
}

/// Tests that inactive players only join the order when asked for.
///
/// Expected: Ok with the inactive player listed in `all_players` both times and in
/// `current_order` only with `include_inactive`
#[tokio::test]
async fn includes_inactive_players_only_on_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_campaign_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let seed = seed(db).await?;
    let retired = PlayerFactory::new(db, seed.syndicate.id)
        .name("Retired")
        .active(false)
        .build()
        .await?;

    let service = LootService::new(db);

    let order = service
        .get_current_distribution_order(order_params(seed.syndicate.id))
        .await?;
    assert_eq!(order.current_order.len(), 3);
    assert!(order.current_order.iter().all(|p| p.id != retired.id));
    assert_eq!(order.all_players.len(), 4);

    let order = service
        .get_current_distribution_order(DistributionOrderParams {
            include_inactive: true,
            ..order_params(seed.syndicate.id)
        })
        .await?;
    assert_eq!(order.current_order.len(), 4);
    assert!(order.current_order.iter().any(|p| p.id == retired.id));
    assert_eq!(order.all_players.len(), 4);

    Ok(())
}
