//! Repeating timers on the shared job scheduler.

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};
use tokio_cron_scheduler::{Job, JobScheduler};
use uuid::Uuid;

use crate::server::{error::AppError, service::schedule::dispatch::PingTask};

/// A live repeating timer.
///
/// The cancellation flag is checked at the start of every tick and set before the job
/// is removed from the scheduler, so once [`cancel`](Self::cancel) returns no new tick
/// starts. A tick already running is allowed to finish.
pub struct TimerHandle {
    job_id: Uuid,
    cancelled: Arc<AtomicBool>,
    interval_seconds: i64,
}

impl TimerHandle {
    /// Registers a job that runs `task` every `interval_seconds`, first firing one
    /// interval from now.
    pub async fn start(
        scheduler: &JobScheduler,
        task: Arc<PingTask>,
        interval_seconds: i64,
    ) -> Result<Self, AppError> {
        let period = u64::try_from(interval_seconds)
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or_else(|| {
                AppError::InternalError(format!("Invalid timer interval {}", interval_seconds))
            })?;

        let cancelled = Arc::new(AtomicBool::new(false));
        let job_cancelled = cancelled.clone();

        let job = Job::new_repeated_async(Duration::from_secs(period), move |_uuid, _lock| {
            let task = task.clone();
            let cancelled = job_cancelled.clone();

            Box::pin(async move {
                if cancelled.load(Ordering::SeqCst) {
                    return;
                }
                task.dispatch().await;
            })
        })?;

        let job_id = scheduler.add(job).await?;

        Ok(Self {
            job_id,
            cancelled,
            interval_seconds,
        })
    }

    #[cfg(test)]
    pub fn interval_seconds(&self) -> i64 {
        self.interval_seconds
    }

    /// Stops the timer. Removal failures are logged; the flag alone already keeps the
    /// job from dispatching again.
    pub async fn cancel(&self, scheduler: &JobScheduler) {
        self.cancelled.store(true, Ordering::SeqCst);

        if let Err(e) = scheduler.remove(&self.job_id).await {
            tracing::warn!("Failed to remove job {} from scheduler: {}", self.job_id, e);
        }

        tracing::debug!(
            "Cancelled {} second timer {}",
            self.interval_seconds,
            self.job_id
        );
    }
}
