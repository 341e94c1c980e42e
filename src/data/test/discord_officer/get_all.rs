use super::*;

/// Tests listing officers in the order they were added.
///
/// Expected: Ok with both officers ordered by id
#[tokio::test]
async fn returns_officers_in_insert_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordOfficer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_discord_officer(db, "Zulu#0001").await?;
    factory::create_discord_officer(db, "Alpha#0002").await?;

    let repo = DiscordOfficerRepository::new(db);
    let officers = repo.get_all().await?;

    let logins: Vec<&str> = officers.iter().map(|o| o.login_name.as_str()).collect();
    assert_eq!(logins, vec!["Zulu#0001", "Alpha#0002"]);

    Ok(())
}
