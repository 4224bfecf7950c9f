use super::*;

/// Tests that only active rows of the requested kind are returned.
///
/// Expected: Ok with the two active random pings
#[tokio::test]
async fn returns_only_active_rows_of_kind() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ping_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_random_ping(db).await?;
    factory::create_random_ping(db).await?;
    factory::random_ping::RandomPingFactory::new(db)
        .active(false)
        .build()
        .await?;
    factory::create_direct_ping(db).await?;

    let repo = PingRepository::new(db);
    let active = repo.get_all_active(PingKind::Random).await?;

    assert_eq!(active.len(), 2);
    assert!(active.iter().all(|p| p.active && p.kind == PingKind::Random));

    Ok(())
}

/// Tests listing an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_rows() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ping_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PingRepository::new(db);

    for kind in PingKind::ALL {
        assert!(repo.get_all_active(kind).await?.is_empty());
    }

    Ok(())
}
