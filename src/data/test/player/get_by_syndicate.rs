use super::*;

/// Tests listing only active players of a syndicate.
///
/// Verifies that inactive players and players of other syndicates are left out and
/// the remaining players are ordered by name.
///
/// Expected: Ok with the two active members in name order
#[tokio::test]
async fn returns_active_members_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let syndicate = factory::create_syndicate(db).await?;
    let other = factory::create_syndicate(db).await?;
    factory::player::PlayerFactory::new(db, syndicate.id)
        .name("Zed")
        .build()
        .await?;
    factory::player::PlayerFactory::new(db, syndicate.id)
        .name("Alice")
        .build()
        .await?;
    factory::player::PlayerFactory::new(db, syndicate.id)
        .name("Retired")
        .active(false)
        .build()
        .await?;
    factory::create_player(db, other.id).await?;

    let repo = PlayerRepository::new(db);
    let players = repo.get_by_syndicate(syndicate.id, false).await?;

    let names: Vec<&str> = players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Zed"]);

    Ok(())
}

/// Tests listing players including inactive ones.
///
/// Expected: Ok with every member of the syndicate
#[tokio::test]
async fn includes_inactive_members_when_requested() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let syndicate = factory::create_syndicate(db).await?;
    factory::create_player(db, syndicate.id).await?;
    factory::player::PlayerFactory::new(db, syndicate.id)
        .active(false)
        .build()
        .await?;

    let repo = PlayerRepository::new(db);
    let players = repo.get_by_syndicate(syndicate.id, true).await?;

    assert_eq!(players.len(), 2);

    Ok(())
}
