use super::*;

/// Tests signing a player up for a campaign.
///
/// Expected: Ok with the signup findable afterwards
#[tokio::test]
async fn creates_signup() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_campaign_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, player, campaign) = factory::helpers::create_campaign_with_dependencies(db).await?;

    let repo = CampaignSignupRepository::new(db);
    let signup = repo.create(campaign.id, player.id, true).await?;

    assert!(signup.attending);
    let found = repo.find(campaign.id, player.id).await?;
    assert_eq!(found, Some(signup));

    Ok(())
}

/// Tests signing a player up twice.
///
/// Expected: Err from the unique campaign and player index
#[tokio::test]
async fn fails_for_duplicate_signup() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_campaign_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, player, campaign) = factory::helpers::create_campaign_with_dependencies(db).await?;

    let repo = CampaignSignupRepository::new(db);
    repo.create(campaign.id, player.id, true).await?;
    let result = repo.create(campaign.id, player.id, true).await;

    assert!(result.is_err());

    Ok(())
}
