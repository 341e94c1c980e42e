use super::*;

/// Tests withdrawing one's own open request.
///
/// Expected: Ok(true) with the request deleted
#[tokio::test]
async fn deletes_own_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_campaign_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let seed = seed(db).await?;

    let service = LootService::new(db);
    let result = service
        .withdraw_loot_request(seed.request1.id, seed.player1.id)
        .await?;

    assert!(result);
    assert_eq!(entity::prelude::LootRequest::find().count(db).await?, 1);

    Ok(())
}

/// Tests withdrawing a request made on the player's behalf.
///
/// Expected: Ok(true) for the beneficiary
#[tokio::test]
async fn deletes_request_for_beneficiary() -> Result<(), AppError> {
    let test = TestBuilder::new().with_campaign_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let seed = seed(db).await?;
    let request = LootRequestFactory::new(db, seed.loot3.id, seed.player1.id)
        .requested_for(seed.player3.id)
        .build()
        .await?;

    let service = LootService::new(db);
    let result = service
        .withdraw_loot_request(request.id, seed.player3.id)
        .await?;

    assert!(result);

    Ok(())
}

/// Tests withdrawals that are not allowed.
///
/// Verifies an unrelated player, an unknown request and a decided request.
///
/// Expected: Ok(false) with the requests kept
#[tokio::test]
async fn rejects_invalid_withdrawals() -> Result<(), AppError> {
    let test = TestBuilder::new().with_campaign_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let seed = seed(db).await?;
    let awarded = LootRequestFactory::new(db, seed.loot4.id, seed.player3.id)
        .status(LootRequestStatus::Awarded)
        .build()
        .await?;

    let service = LootService::new(db);

    assert!(
        !service
            .withdraw_loot_request(seed.request1.id, seed.player3.id)
            .await?
    );
    assert!(
        !service
            .withdraw_loot_request(awarded.id + 10, seed.player3.id)
            .await?
    );
    assert!(
        !service
            .withdraw_loot_request(awarded.id, seed.player3.id)
            .await?
    );

    assert_eq!(entity::prelude::LootRequest::find().count(db).await?, 3);

    Ok(())
}
