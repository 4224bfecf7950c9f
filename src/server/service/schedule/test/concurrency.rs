use super::*;

/// Tests a start and a stop racing on the same channel and kind.
///
/// Whichever command takes the channel lock first, the other runs against the state
/// it left, so the timer map, the row and the budget always agree afterwards.
///
/// Expected: both succeed; live timer, row and total agree every round
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn racing_start_and_stop_leave_consistent_state() -> Result<(), AppError> {
    let h = Harness::with_members(vec![5, 6]).await;

    for _ in 0..5 {
        h.registry.start(random(PingKind::RandomGif, 10, 600)).await?;

        let starter = h.registry.clone();
        let stopper = h.registry.clone();
        let start = tokio::spawn(async move {
            starter.start(random(PingKind::RandomGif, 10, 300)).await
        });
        let stop =
            tokio::spawn(async move { stopper.stop(PingKind::RandomGif, GUILD, 10).await });

        start.await.unwrap()?;
        stop.await.unwrap()?;

        let active = h.registry.is_active(PingKind::RandomGif, 10).await;
        let rows = h.row_count(PingKind::RandomGif).await;
        let total = h.budget_total().await;

        if active {
            assert_eq!(h.registry.active_interval(PingKind::RandomGif, 10).await, Some(300));
            assert_eq!(rows, 1);
            assert_eq!(total, 12);
        } else {
            assert_eq!(rows, 0);
            assert_eq!(total, 0);
        }
    }

    Ok(())
}

/// Tests GIF starts in different channels racing for a small budget.
///
/// Four 600 second schedules want 6 GIFs per hour each against a ceiling of 12, so
/// exactly two may win and the rest are refused.
///
/// Expected: two started, two BudgetExceeded, total 12 matching the stored rows
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn racing_gif_starts_never_exceed_ceiling() -> Result<(), AppError> {
    let h = Harness::with_members(vec![5, 6]).await;

    let handles: Vec<_> = (10..14)
        .map(|channel_id| {
            let registry = h.registry.clone();
            tokio::spawn(async move {
                registry
                    .start(random(PingKind::RandomGif, channel_id, 600))
                    .await
            })
        })
        .collect();

    let mut started = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => started += 1,
            Err(e) => assert!(matches!(
                e.as_command_error(),
                Some(CommandError::BudgetExceeded { ceiling: CEILING, .. })
            )),
        }
    }

    assert_eq!(started, 2);
    assert_eq!(h.registry.active_count().await, 2);

    let rows = PingRepository::new(&h.db)
        .get_all_active(PingKind::RandomGif)
        .await?;
    assert_eq!(rows.len(), 2);
    let expected: i64 = rows.iter().map(|row| 3600 / row.interval_seconds).sum();

    assert_eq!(h.budget_total().await, CEILING);
    assert_eq!(h.budget_total().await, expected);

    Ok(())
}

/// Tests that stopped channels do not keep their lock entries around.
///
/// Expected: one entry while running, none after stop or a stop with nothing active
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn stop_drops_channel_lock_entry() -> Result<(), AppError> {
    let h = Harness::with_members(vec![]).await;

    h.registry.start(direct(10, 42, 60)).await?;
    assert_eq!(h.registry.key_lock_count().await, 1);

    h.registry.stop(PingKind::Direct, GUILD, 10).await?;
    assert_eq!(h.registry.key_lock_count().await, 0);

    let err = h
        .registry
        .stop(PingKind::Direct, GUILD, 11)
        .await
        .unwrap_err();
    assert_eq!(err.as_command_error(), Some(&CommandError::NothingActive));
    assert_eq!(h.registry.key_lock_count().await, 0);

    Ok(())
}
