use super::*;

/// Tests declining the competing requests after loot is awarded.
///
/// Verifies that the kept request and already decided requests are left untouched.
///
/// Expected: Ok(1) with only the other open request declined
#[tokio::test]
async fn declines_other_open_requests() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_campaign_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (syndicate, winner, _, _, loot) =
        factory::helpers::create_loot_with_dependencies(db).await?;
    let rival = factory::create_player(db, syndicate.id).await?;
    let earlier = factory::create_player(db, syndicate.id).await?;

    let kept = factory::create_loot_request(db, loot.id, winner.id).await?;
    let open = factory::loot_request::LootRequestFactory::new(db, loot.id, rival.id)
        .status(LootRequestStatus::SpecialOffer)
        .build()
        .await?;
    let awarded = factory::loot_request::LootRequestFactory::new(db, loot.id, earlier.id)
        .status(LootRequestStatus::Awarded)
        .build()
        .await?;

    let repo = LootRequestRepository::new(db);
    let declined = repo.decline_open(loot.id, Some(kept.id)).await?;

    assert_eq!(declined, 1);
    let status = |id: i32| entity::prelude::LootRequest::find_by_id(id).one(db);
    assert_eq!(
        status(kept.id).await?.unwrap().status,
        LootRequestStatus::Interested
    );
    assert_eq!(
        status(open.id).await?.unwrap().status,
        LootRequestStatus::Declined
    );
    assert_eq!(
        status(awarded.id).await?.unwrap().status,
        LootRequestStatus::Awarded
    );

    Ok(())
}
