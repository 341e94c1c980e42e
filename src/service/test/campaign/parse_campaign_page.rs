use super::*;

/// Tests importing an empty page.
///
/// Verifies that the stale planned campaign is still closed.
///
/// Expected: Ok with the seeded campaign marked completed
#[tokio::test]
async fn closes_stale_campaigns_for_empty_page() -> Result<(), AppError> {
    let test = TestBuilder::new().with_campaign_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let seed = seed(db).await?;

    let service = CampaignService::new(db);
    let summary = service.parse_campaign_page("", seed.syndicate.id).await?;

    assert_eq!(summary.created, 0);
    assert_eq!(summary.closed, 1);
    let stored = entity::prelude::Campaign::find_by_id(seed.campaign.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, CampaignStatus::Completed);

    Ok(())
}

/// Tests importing a page line matching the scheduled campaign.
///
/// Expected: Ok with the campaign completed and attendance added for known names only
#[tokio::test]
async fn completes_matching_campaign_with_attendance() -> Result<(), AppError> {
    let test = TestBuilder::new().with_campaign_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let seed = seed(db).await?;

    let page = "2020-12-31 00:00 | Yards of Gadani | Normal | 1,2,3,4,5 | leader, Player1, Stranger";

    let service = CampaignService::new(db);
    let summary = service.parse_campaign_page(page, seed.syndicate.id).await?;

    assert_eq!(summary.updated, 1);
    assert_eq!(summary.created, 0);
    assert_eq!(summary.attendance_added, 2);
    assert_eq!(entity::prelude::Campaign::find().count(db).await?, 1);
    assert_eq!(
        entity::prelude::CampaignAttendance::find().count(db).await?,
        2
    );

    Ok(())
}

/// Tests importing lines without a scheduled campaign.
///
/// Expected: Ok with a completed campaign created and the malformed line skipped
#[tokio::test]
async fn creates_unscheduled_campaign_and_skips_malformed_lines() -> Result<(), AppError> {
    let test = TestBuilder::new().with_campaign_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let seed = seed(db).await?;

    let page = "2021-01-02 18:00 | Nouveau Limoges | Hard | 5 | Player2\n\
                2021-01-03 | broken line";

    let service = CampaignService::new(db);
    let summary = service.parse_campaign_page(page, seed.syndicate.id).await?;

    assert_eq!(summary.created, 1);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.attendance_added, 1);

    let created = entity::prelude::Campaign::find()
        .all(db)
        .await?
        .into_iter()
        .find(|c| c.station == "Nouveau Limoges")
        .unwrap();
    assert_eq!(created.status, CampaignStatus::Completed);
    assert_eq!(created.difficulty, CampaignDifficulty::Hard);
    assert_eq!(created.tiers, 16);
    assert_eq!(created.syndicate_id, Some(seed.syndicate.id));

    Ok(())
}
