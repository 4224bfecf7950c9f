use super::*;

/// Tests deleting an existing ping row.
///
/// Verifies that the deleted row is returned so callers can read its interval, and
/// that the table is empty afterwards.
///
/// Expected: Ok(Some) with the removed row
#[tokio::test]
async fn deletes_and_returns_row() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ping_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::random_gif_ping::RandomGifPingFactory::new(db)
        .guild_id("5")
        .channel_id("6")
        .interval_seconds(1200)
        .build()
        .await?;

    let repo = PingRepository::new(db);
    let deleted = repo.delete(PingKind::RandomGif, 5, 6).await?.unwrap();

    assert_eq!(deleted.interval_seconds, 1200);
    let count = entity::prelude::RandomGifPing::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests deleting from a channel with no row.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_absent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ping_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PingRepository::new(db);
    let deleted = repo.delete(PingKind::Random, 5, 6).await?;

    assert!(deleted.is_none());

    Ok(())
}

/// Tests that deleting one channel leaves other channels untouched.
///
/// Expected: Ok with the other channel's row intact
#[tokio::test]
async fn leaves_other_channels_untouched() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ping_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::direct_ping::DirectPingFactory::new(db)
        .guild_id("1")
        .channel_id("2")
        .build()
        .await?;
    factory::direct_ping::DirectPingFactory::new(db)
        .guild_id("1")
        .channel_id("3")
        .build()
        .await?;

    let repo = PingRepository::new(db);
    repo.delete(PingKind::Direct, 1, 2).await?;

    assert!(repo.get(PingKind::Direct, 1, 2).await?.is_none());
    assert!(repo.get(PingKind::Direct, 1, 3).await?.is_some());

    Ok(())
}
