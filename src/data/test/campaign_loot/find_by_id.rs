use super::*;

/// Tests finding loot by id.
///
/// Expected: Ok(Some) with the item attached, Ok(None) for unknown ids
#[tokio::test]
async fn finds_loot_with_item() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_campaign_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, item, loot) = factory::helpers::create_loot_with_dependencies(db).await?;

    let repo = CampaignLootRepository::new(db);

    let found = repo.find_by_id(loot.id).await?;
    assert!(found.is_some());
    assert_eq!(found.unwrap().item.name, item.name);

    let missing = repo.find_by_id(loot.id + 100).await?;
    assert!(missing.is_none());

    Ok(())
}
