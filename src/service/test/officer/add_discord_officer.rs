use super::*;

/// Tests adding a new officer.
///
/// Expected: Ok(true) with three officers listed
#[tokio::test]
async fn adds_new_officer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordOfficer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let service = DiscordOfficerService::new(db);
    let result = service.add_discord_officer("Officer3#3333").await?;

    assert!(result);
    assert_eq!(officer_count(db).await?, 3);

    Ok(())
}

/// Tests adding an officer that is already listed.
///
/// Expected: Ok(false) with the list unchanged
#[tokio::test]
async fn rejects_existing_officer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordOfficer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let service = DiscordOfficerService::new(db);
    let result = service.add_discord_officer(" Officer1#1111 ").await?;

    assert!(!result);
    assert_eq!(officer_count(db).await?, 2);

    Ok(())
}

/// Tests adding a blank login.
///
/// Expected: Ok(false) with the list unchanged
#[tokio::test]
async fn rejects_blank_login() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordOfficer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let service = DiscordOfficerService::new(db);
    let result = service.add_discord_officer("   ").await?;

    assert!(!result);
    assert_eq!(officer_count(db).await?, 2);

    Ok(())
}
