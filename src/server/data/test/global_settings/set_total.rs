use super::*;

/// Tests overwriting the stored total.
///
/// Expected: Ok with the new total readable afterwards
#[tokio::test]
async fn overwrites_total() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ping_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GlobalSettingsRepository::new(db);
    repo.get_or_create().await?;

    let updated = repo.set_total(10).await?;

    assert_eq!(updated.global_gifs_per_hour, 10);
    assert_eq!(repo.get().await?.unwrap().global_gifs_per_hour, 10);

    Ok(())
}

/// Tests that setting the total without a settings row fails.
///
/// Expected: Err
#[tokio::test]
async fn fails_without_row() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ping_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GlobalSettingsRepository::new(db);
    let result = repo.set_total(3).await;

    assert!(result.is_err());

    Ok(())
}
