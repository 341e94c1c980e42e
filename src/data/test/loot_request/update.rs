use super::*;

/// Tests turning an interested request into a special offer.
///
/// Expected: Ok(Some) with status and description replaced
#[tokio::test]
async fn updates_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_campaign_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, player, _, _, loot) = factory::helpers::create_loot_with_dependencies(db).await?;
    let request = factory::create_loot_request(db, loot.id, player.id).await?;

    let repo = LootRequestRepository::new(db);
    let updated = repo
        .update(
            request.id,
            LootRequestFields {
                requested_by_id: player.id,
                requested_for_id: player.id,
                status: LootRequestStatus::SpecialOffer,
                special_offer_description: Some("Loan of my T5 armor".to_string()),
            },
        )
        .await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.id, request.id);
    assert_eq!(updated.status, LootRequestStatus::SpecialOffer);
    assert_eq!(
        updated.special_offer_description.as_deref(),
        Some("Loan of my T5 armor")
    );

    Ok(())
}
