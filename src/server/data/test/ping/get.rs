use super::*;

/// Tests getting a direct ping seeded through the factory.
///
/// Verifies that the string-encoded ids stored in the database are parsed back into
/// numeric Discord ids, including the target member.
///
/// Expected: Ok(Some) with parsed ids
#[tokio::test]
async fn gets_direct_ping_with_parsed_ids() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ping_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::direct_ping::DirectPingFactory::new(db)
        .guild_id("100")
        .channel_id("200")
        .member_id("300")
        .interval_seconds(45)
        .build()
        .await?;

    let repo = PingRepository::new(db);
    let ping = repo.get(PingKind::Direct, 100, 200).await?.unwrap();

    assert_eq!(ping.kind, PingKind::Direct);
    assert_eq!(ping.guild_id, 100);
    assert_eq!(ping.channel_id, 200);
    assert_eq!(ping.member_id, Some(300));
    assert_eq!(ping.interval_seconds, 45);

    Ok(())
}

/// Tests that each kind reads only from its own table.
///
/// Expected: Ok(None) for the kinds with no row in the channel
#[tokio::test]
async fn kinds_do_not_share_rows() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ping_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::random_ping::RandomPingFactory::new(db)
        .guild_id("1")
        .channel_id("2")
        .build()
        .await?;

    let repo = PingRepository::new(db);

    assert!(repo.get(PingKind::Random, 1, 2).await?.is_some());
    assert!(repo.get(PingKind::Direct, 1, 2).await?.is_none());
    assert!(repo.get(PingKind::RandomGif, 1, 2).await?.is_none());

    Ok(())
}

/// Tests that a corrupted stored id surfaces as an error instead of a bogus id.
///
/// Expected: Err
#[tokio::test]
async fn fails_on_unparsable_stored_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ping_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::direct_ping::DirectPingFactory::new(db)
        .guild_id("1")
        .channel_id("2")
        .member_id("not-a-snowflake")
        .build()
        .await?;

    let repo = PingRepository::new(db);
    let result = repo.get(PingKind::Direct, 1, 2).await;

    assert!(result.is_err());

    Ok(())
}
