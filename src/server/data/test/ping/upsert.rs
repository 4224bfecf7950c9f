use super::*;

fn param(kind: PingKind, interval_seconds: i64) -> UpsertPingParam {
    UpsertPingParam {
        kind,
        guild_id: 10,
        channel_id: 20,
        member_id: matches!(kind, PingKind::Direct).then_some(30),
        interval_seconds,
    }
}

/// Tests creating a ping row for a channel that has none.
///
/// Expected: Ok with an active row holding the requested interval
#[tokio::test]
async fn creates_row_when_absent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ping_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PingRepository::new(db);
    let ping = repo.upsert(param(PingKind::Random, 120)).await?;

    assert!(ping.active);
    assert_eq!(ping.interval_seconds, 120);
    assert_eq!(ping.channel_id, 20);
    assert_eq!(ping.member_id, None);

    let count = entity::prelude::RandomPing::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests replacing the ping row of a channel.
///
/// Verifies that a second upsert for the same channel overwrites the interval and
/// target member in place, keeping a single row with the same id.
///
/// Expected: Ok with one row carrying the new values
#[tokio::test]
async fn replaces_existing_row() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ping_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PingRepository::new(db);
    let first = repo.upsert(param(PingKind::Direct, 60)).await?;

    let mut replacement = param(PingKind::Direct, 90);
    replacement.member_id = Some(31);
    let second = repo.upsert(replacement).await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.interval_seconds, 90);
    assert_eq!(second.member_id, Some(31));
    assert_eq!(second.created_at, first.created_at);

    let count = entity::prelude::DirectPing::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that upserting reactivates a row stored as inactive.
///
/// Expected: Ok with active row
#[tokio::test]
async fn reactivates_inactive_row() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ping_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::random_gif_ping::RandomGifPingFactory::new(db)
        .guild_id("10")
        .channel_id("20")
        .active(false)
        .build()
        .await?;

    let repo = PingRepository::new(db);
    let ping = repo.upsert(param(PingKind::RandomGif, 900)).await?;

    assert!(ping.active);
    assert_eq!(ping.interval_seconds, 900);

    Ok(())
}

/// Tests that a direct ping cannot be stored without a target member.
///
/// Expected: Err and no row written
#[tokio::test]
async fn rejects_direct_ping_without_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ping_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut missing_member = param(PingKind::Direct, 60);
    missing_member.member_id = None;

    let repo = PingRepository::new(db);
    let result = repo.upsert(missing_member).await;

    assert!(result.is_err());
    let count = entity::prelude::DirectPing::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}
