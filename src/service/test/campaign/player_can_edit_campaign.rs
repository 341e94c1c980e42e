use super::*;

/// Tests the campaign manager's edit permission.
///
/// Expected: Ok(true)
#[tokio::test]
async fn allows_manager() -> Result<(), AppError> {
    let test = TestBuilder::new().with_campaign_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let seed = seed(db).await?;

    let service = CampaignService::new(db);
    let result = service
        .player_can_edit_campaign(Some(seed.leader.id), seed.campaign.id)
        .await?;

    assert!(result);

    Ok(())
}

/// Tests edit permission for callers that do not manage the campaign.
///
/// Verifies anonymous, unknown and non-manager players as well as a missing campaign.
///
/// Expected: Ok(false) in every case
#[tokio::test]
async fn denies_everyone_else() -> Result<(), AppError> {
    let test = TestBuilder::new().with_campaign_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let seed = seed(db).await?;

    let service = CampaignService::new(db);

    assert!(
        !service
            .player_can_edit_campaign(None, seed.campaign.id)
            .await?
    );
    assert!(
        !service
            .player_can_edit_campaign(Some(seed.player2.id + 10), seed.campaign.id)
            .await?
    );
    assert!(
        !service
            .player_can_edit_campaign(Some(seed.leader.id), seed.campaign.id + 1)
            .await?
    );
    assert!(
        !service
            .player_can_edit_campaign(Some(seed.player1.id), seed.campaign.id)
            .await?
    );

    Ok(())
}
