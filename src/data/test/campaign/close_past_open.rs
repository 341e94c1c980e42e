use super::*;

/// Tests closing open campaigns scheduled in the past.
///
/// Verifies that only open campaigns of the syndicate scheduled before the cut-off are
/// marked completed, leaving future, concluded and foreign campaigns unchanged.
///
/// Expected: Ok(2) with the two stale campaigns completed
#[tokio::test]
async fn completes_stale_open_campaigns() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_campaign_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let syndicate = factory::create_syndicate(db).await?;
    let other = factory::create_syndicate(db).await?;
    let now = Utc::now();

    let planned = factory::campaign::CampaignFactory::new(db, syndicate.id)
        .status(CampaignStatus::Planned)
        .utc_date_time(now - Duration::days(2))
        .build()
        .await?;
    let in_progress = factory::campaign::CampaignFactory::new(db, syndicate.id)
        .status(CampaignStatus::InProgress)
        .utc_date_time(now - Duration::hours(1))
        .build()
        .await?;
    let cancelled = factory::campaign::CampaignFactory::new(db, syndicate.id)
        .status(CampaignStatus::Cancelled)
        .utc_date_time(now - Duration::days(2))
        .build()
        .await?;
    let upcoming = factory::campaign::CampaignFactory::new(db, syndicate.id)
        .status(CampaignStatus::Planned)
        .utc_date_time(now + Duration::days(2))
        .build()
        .await?;
    let foreign = factory::campaign::CampaignFactory::new(db, other.id)
        .status(CampaignStatus::Planned)
        .utc_date_time(now - Duration::days(2))
        .build()
        .await?;

    let repo = CampaignRepository::new(db);
    let closed = repo.close_past_open(syndicate.id, now).await?;

    assert_eq!(closed, 2);
    let expected = [
        (planned.id, CampaignStatus::Completed),
        (in_progress.id, CampaignStatus::Completed),
        (cancelled.id, CampaignStatus::Cancelled),
        (upcoming.id, CampaignStatus::Planned),
        (foreign.id, CampaignStatus::Planned),
    ];
    for (id, status) in expected {
        let campaign = repo.find_by_id(id).await?.unwrap();
        assert_eq!(campaign.status, status);
    }

    Ok(())
}
