use super::*;

/// Tests bootstrapping the settings row on an empty database.
///
/// Expected: Ok with a zero total and exactly one row
#[tokio::test]
async fn creates_row_with_zero_total() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ping_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GlobalSettingsRepository::new(db);
    let settings = repo.get_or_create().await?;

    assert_eq!(settings.global_gifs_per_hour, 0);
    let count = entity::prelude::GlobalSettings::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that an existing total is never overwritten by bootstrap.
///
/// Expected: Ok with the seeded total
#[tokio::test]
async fn keeps_existing_total() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ping_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_global_settings(db, 7).await?;

    let repo = GlobalSettingsRepository::new(db);
    let settings = repo.get_or_create().await?;

    assert_eq!(settings.global_gifs_per_hour, 7);

    Ok(())
}

/// Tests that inserting when the row exists is a no-op rather than an error.
///
/// Expected: Ok(false) and the total unchanged
#[tokio::test]
async fn create_if_absent_is_noop_when_present() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ping_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_global_settings(db, 4).await?;

    let repo = GlobalSettingsRepository::new(db);
    let created = repo.create_if_absent().await?;

    assert!(!created);
    assert_eq!(repo.get().await?.unwrap().global_gifs_per_hour, 4);
    let count = entity::prelude::GlobalSettings::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
