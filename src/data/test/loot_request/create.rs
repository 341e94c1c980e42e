use super::*;

/// Tests creating a special offer request on behalf of another player.
///
/// Expected: Ok with requester, beneficiary and offer stored
#[tokio::test]
async fn creates_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_campaign_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (syndicate, player, _, _, loot) =
        factory::helpers::create_loot_with_dependencies(db).await?;
    let beneficiary = factory::create_player(db, syndicate.id).await?;

    let repo = LootRequestRepository::new(db);
    let request = repo
        .create(
            loot.id,
            LootRequestFields {
                requested_by_id: player.id,
                requested_for_id: beneficiary.id,
                status: LootRequestStatus::SpecialOffer,
                special_offer_description: Some("Two T4 rifles".to_string()),
            },
        )
        .await?;

    assert_eq!(request.loot_id, loot.id);
    assert_eq!(request.requested_by_id, player.id);
    assert_eq!(request.requested_for_id, beneficiary.id);
    assert_eq!(request.status, LootRequestStatus::SpecialOffer);
    assert!(request.is_open());

    Ok(())
}
