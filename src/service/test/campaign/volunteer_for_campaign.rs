use super::*;

/// Tests volunteering for an unmanaged campaign.
///
/// Expected: Ok(true) with the player stored as manager
#[tokio::test]
async fn assigns_volunteer_as_manager() -> Result<(), AppError> {
    let test = TestBuilder::new().with_campaign_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let seed = seed(db).await?;
    let campaign = factory::create_campaign(db, seed.syndicate.id).await?;

    let service = CampaignService::new(db);
    let result = service
        .volunteer_for_campaign(seed.player1.id, campaign.id)
        .await?;

    assert!(result);
    let stored = entity::prelude::Campaign::find_by_id(campaign.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.manager_id, Some(seed.player1.id));

    Ok(())
}

/// Tests volunteering for a campaign that already has a manager.
///
/// Expected: Ok(false) with the manager unchanged
#[tokio::test]
async fn keeps_existing_manager() -> Result<(), AppError> {
    let test = TestBuilder::new().with_campaign_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let seed = seed(db).await?;

    let service = CampaignService::new(db);
    let result = service
        .volunteer_for_campaign(seed.player1.id, seed.campaign.id)
        .await?;

    assert!(!result);
    let stored = entity::prelude::Campaign::find_by_id(seed.campaign.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.manager_id, Some(seed.leader.id));

    Ok(())
}
