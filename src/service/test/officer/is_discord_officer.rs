use super::*;

/// Tests the officer check for listed and unlisted logins.
///
/// Expected: Ok(true) only for a listed login
#[tokio::test]
async fn checks_listed_logins() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordOfficer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let service = DiscordOfficerService::new(db);

    assert!(service.is_discord_officer("Officer1#1111").await?);
    assert!(!service.is_discord_officer("Officer3#3333").await?);

    Ok(())
}
