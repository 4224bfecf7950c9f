//! Scheduling registry.
//!
//! The registry owns every live repeating timer, keyed by `(channel, kind)`, and keeps
//! them consistent with the persisted ping rows. Start and stop for the same key are
//! serialized by a per-key async mutex; GIF budget changes are serialized separately by
//! the [`BudgetTracker`].
//!
//! A stop is decided by the in-memory timer map, not by the store, so a persisted row
//! that has not been reconciled yet does not count as active.

pub mod dispatch;
pub mod timer;

#[cfg(test)]
mod test;

use sea_orm::DatabaseConnection;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::Mutex;
use tokio_cron_scheduler::JobScheduler;

use crate::server::{
    data::ping::PingRepository,
    error::{command::CommandError, AppError},
    model::{
        command::MEMBER_OPTION,
        ping::{
            PingConfig, PingKind, ScheduleKey, ScheduleResult, StartPingParam, UpsertPingParam,
            MAX_INTERVAL_SECONDS, MIN_GIF_INTERVAL_SECONDS,
        },
    },
    service::{
        budget::BudgetTracker,
        chat::ChatClient,
        gif::GifSource,
        schedule::{
            dispatch::{PingTarget, PingTask},
            timer::TimerHandle,
        },
    },
};

/// Number of timers restored per kind by [`SchedulingRegistry::reconcile_at_startup`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    pub direct: usize,
    pub random: usize,
    pub random_gif: usize,
}

impl ReconcileSummary {
    fn record(&mut self, kind: PingKind) {
        match kind {
            PingKind::Direct => self.direct += 1,
            PingKind::Random => self.random += 1,
            PingKind::RandomGif => self.random_gif += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.direct + self.random + self.random_gif
    }
}

#[derive(Clone)]
pub struct SchedulingRegistry {
    db: DatabaseConnection,
    scheduler: JobScheduler,
    chat: Arc<dyn ChatClient>,
    gifs: Arc<dyn GifSource>,
    budget: BudgetTracker,
    timers: Arc<Mutex<HashMap<ScheduleKey, TimerHandle>>>,
    key_locks: Arc<Mutex<HashMap<ScheduleKey, Arc<Mutex<()>>>>>,
}

impl SchedulingRegistry {
    /// Creates the registry and starts its job scheduler.
    ///
    /// # Arguments
    /// - `db` - Database connection for ping rows
    /// - `chat` - Chat client used by every tick
    /// - `gifs` - GIF source used by GIF ticks
    /// - `budget` - Tracker for the global GIF budget
    ///
    /// # Returns
    /// - `Ok(SchedulingRegistry)` - Registry with a running scheduler and no timers
    /// - `Err(AppError::SchedulerErr)` - Scheduler failed to initialize
    pub async fn new(
        db: DatabaseConnection,
        chat: Arc<dyn ChatClient>,
        gifs: Arc<dyn GifSource>,
        budget: BudgetTracker,
    ) -> Result<Self, AppError> {
        let scheduler = JobScheduler::new().await?;
        scheduler.start().await?;

        Ok(Self {
            db,
            scheduler,
            chat,
            gifs,
            budget,
            timers: Arc::new(Mutex::new(HashMap::new())),
            key_locks: Arc::new(Mutex::new(HashMap::new())),
        })
    }

    #[cfg(test)]
    pub fn budget(&self) -> &BudgetTracker {
        &self.budget
    }

    /// Starts a schedule, replacing any schedule of the same kind in the channel.
    ///
    /// Validates the interval, resolves the ping target, reserves GIF budget, registers
    /// the new timer, upserts the row, swaps the timer in and fires one immediate ping in
    /// the background. Nothing is changed when a precondition fails. A failed timer
    /// registration or row write gives back the reserved budget and leaves any previous
    /// timer running.
    ///
    /// # Returns
    /// - `Ok(ScheduleResult)` - Schedule running, with the confirmation reply
    /// - `Err(AppError::CommandErr)` - Invalid interval, no members, or budget exceeded
    /// - `Err(AppError)` - Store, Discord or scheduler failure
    pub async fn start(&self, param: StartPingParam) -> Result<ScheduleResult, AppError> {
        validate_interval(param.kind, param.interval_seconds)?;

        let key = ScheduleKey::new(param.kind, param.channel_id);
        let key_lock = self.key_lock(key).await;
        let _guard = key_lock.lock().await;

        let target = self.resolve_target(&param).await?;
        let repo = PingRepository::new(&self.db);

        let reservation = if param.kind.counts_against_budget() {
            let previous = repo
                .get(param.kind, param.guild_id, param.channel_id)
                .await?
                .filter(|ping| ping.active)
                .map(|ping| ping.interval_seconds);
            self.budget
                .reserve(param.interval_seconds, previous)
                .await?;
            Some(previous)
        } else {
            None
        };

        let task = Arc::new(self.task(param.kind, param.channel_id, target));
        let timer =
            match TimerHandle::start(&self.scheduler, task.clone(), param.interval_seconds).await {
                Ok(timer) => timer,
                Err(e) => {
                    self.give_back_reservation(&param, reservation).await;
                    return Err(e);
                }
            };

        let record = match repo.upsert(UpsertPingParam::from(&param)).await {
            Ok(record) => record,
            Err(e) => {
                timer.cancel(&self.scheduler).await;
                self.give_back_reservation(&param, reservation).await;
                return Err(e);
            }
        };

        let replaced = self.timers.lock().await.insert(key, timer);
        if let Some(old) = replaced {
            old.cancel(&self.scheduler).await;
        }

        tokio::spawn(async move { task.dispatch().await });

        tracing::info!(
            "Started {} ping in channel {} every {} seconds",
            record.kind,
            record.channel_id,
            record.interval_seconds
        );

        Ok(ScheduleResult::started(
            record.kind,
            record.interval_seconds,
            record.member_id,
        ))
    }

    /// Stops the schedule of the given kind in a channel.
    ///
    /// For GIF schedules the row's contribution is released before the row is deleted;
    /// a release that would drive the total negative aborts the stop with nothing
    /// changed, and a failed delete gives the released budget back.
    ///
    /// # Returns
    /// - `Ok(ScheduleResult)` - Timer cancelled and row deleted
    /// - `Err(AppError::CommandErr(NothingActive))` - No live timer for the channel
    /// - `Err(AppError::CommandErr(CorruptBudget))` - Budget bookkeeping inconsistent
    /// - `Err(AppError)` - Store failure
    pub async fn stop(
        &self,
        kind: PingKind,
        guild_id: u64,
        channel_id: u64,
    ) -> Result<ScheduleResult, AppError> {
        let key = ScheduleKey::new(kind, channel_id);
        let key_lock = self.key_lock(key).await;
        let guard = key_lock.lock().await;

        if !self.timers.lock().await.contains_key(&key) {
            drop(guard);
            self.prune_key_lock(key, key_lock).await;
            return Err(CommandError::NothingActive.into());
        }

        let repo = PingRepository::new(&self.db);

        let released = if kind.counts_against_budget() {
            match repo.get(kind, guild_id, channel_id).await? {
                Some(record) if record.active => {
                    self.budget.release(record.interval_seconds).await?;
                    Some(record.interval_seconds)
                }
                _ => None,
            }
        } else {
            None
        };

        if let Err(e) = repo.delete(kind, guild_id, channel_id).await {
            if let Some(interval) = released {
                if let Err(revert) = self.budget.revert_release(interval).await {
                    tracing::error!(
                        "Failed to revert GIF budget for channel {}: {}",
                        channel_id,
                        revert
                    );
                }
            }
            return Err(e);
        }

        let removed = self.timers.lock().await.remove(&key);
        if let Some(timer) = removed {
            timer.cancel(&self.scheduler).await;
        }

        drop(guard);
        self.prune_key_lock(key, key_lock).await;

        tracing::info!("Stopped {} ping in channel {}", kind, channel_id);

        Ok(ScheduleResult::stopped(kind))
    }

    /// Rebuilds live timers from persisted active rows.
    ///
    /// Every existing timer is cancelled first. Restored timers first fire one interval
    /// after this call; rows are not rewritten and no immediate ping is sent. Member
    /// pools are fetched once per guild; a guild whose lookup fails gets an empty pool
    /// and its ticks are skipped until the schedule is restarted.
    ///
    /// # Returns
    /// - `Ok(ReconcileSummary)` - Timers restored per kind
    /// - `Err(AppError)` - Store or scheduler failure
    pub async fn reconcile_at_startup(&self) -> Result<ReconcileSummary, AppError> {
        let existing: Vec<TimerHandle> = {
            let mut timers = self.timers.lock().await;
            timers.drain().map(|(_, timer)| timer).collect()
        };
        for timer in existing {
            timer.cancel(&self.scheduler).await;
        }

        let repo = PingRepository::new(&self.db);
        let mut pools: HashMap<u64, Arc<Vec<u64>>> = HashMap::new();
        let mut summary = ReconcileSummary::default();

        for kind in PingKind::ALL {
            let records = repo.get_all_active(kind).await?;

            for record in &records {
                let Some(target) = self.restored_target(record, &mut pools).await else {
                    continue;
                };

                let task = Arc::new(self.task(kind, record.channel_id, target));
                let timer =
                    TimerHandle::start(&self.scheduler, task, record.interval_seconds).await?;

                let replaced = self.timers.lock().await.insert(record.key(), timer);
                if let Some(old) = replaced {
                    old.cancel(&self.scheduler).await;
                }
                summary.record(kind);
            }

            if kind.counts_against_budget() {
                self.budget.audit(&records).await?;
            }
        }

        tracing::info!(
            "Restored {} ping schedules ({} direct, {} random, {} GIF)",
            summary.total(),
            summary.direct,
            summary.random,
            summary.random_gif
        );

        Ok(summary)
    }

    pub async fn active_count(&self) -> usize {
        self.timers.lock().await.len()
    }

    #[cfg(test)]
    pub async fn is_active(&self, kind: PingKind, channel_id: u64) -> bool {
        self.timers
            .lock()
            .await
            .contains_key(&ScheduleKey::new(kind, channel_id))
    }

    /// Interval of the live timer for a key, if any.
    #[cfg(test)]
    pub async fn active_interval(&self, kind: PingKind, channel_id: u64) -> Option<i64> {
        self.timers
            .lock()
            .await
            .get(&ScheduleKey::new(kind, channel_id))
            .map(TimerHandle::interval_seconds)
    }

    async fn key_lock(&self, key: ScheduleKey) -> Arc<Mutex<()>> {
        self.key_locks
            .lock()
            .await
            .entry(key)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Drops the lock entry for a stopped key unless another command is holding or
    /// waiting on it.
    async fn prune_key_lock(&self, key: ScheduleKey, key_lock: Arc<Mutex<()>>) {
        let mut locks = self.key_locks.lock().await;
        drop(key_lock);
        if locks
            .get(&key)
            .is_some_and(|lock| Arc::strong_count(lock) == 1)
        {
            locks.remove(&key);
        }
    }

    #[cfg(test)]
    pub async fn key_lock_count(&self) -> usize {
        self.key_locks.lock().await.len()
    }

    /// Reverts the reservation made by [`start`](Self::start), if it made one.
    async fn give_back_reservation(
        &self,
        param: &StartPingParam,
        reservation: Option<Option<i64>>,
    ) {
        let Some(previous) = reservation else {
            return;
        };

        if let Err(e) = self
            .budget
            .revert_reservation(param.interval_seconds, previous)
            .await
        {
            tracing::error!(
                "Failed to revert GIF budget for channel {}: {}",
                param.channel_id,
                e
            );
        }
    }

    fn task(&self, kind: PingKind, channel_id: u64, target: PingTarget) -> PingTask {
        PingTask::new(
            kind,
            channel_id,
            target,
            self.chat.clone(),
            self.gifs.clone(),
        )
    }

    async fn resolve_target(&self, param: &StartPingParam) -> Result<PingTarget, AppError> {
        if !param.kind.uses_member_pool() {
            let member_id = param
                .member_id
                .ok_or(CommandError::MissingOption(MEMBER_OPTION))?;
            return Ok(PingTarget::Member(member_id));
        }

        let members = self.chat.list_non_bot_members(param.guild_id).await?;
        if members.is_empty() {
            return Err(CommandError::NoMembers.into());
        }

        Ok(PingTarget::Pool(Arc::new(members)))
    }

    async fn restored_target(
        &self,
        record: &PingConfig,
        pools: &mut HashMap<u64, Arc<Vec<u64>>>,
    ) -> Option<PingTarget> {
        if !record.kind.uses_member_pool() {
            let Some(member_id) = record.member_id else {
                tracing::warn!(
                    "Direct ping in channel {} has no member, not restoring it",
                    record.channel_id
                );
                return None;
            };
            return Some(PingTarget::Member(member_id));
        }

        if let Some(pool) = pools.get(&record.guild_id) {
            return Some(PingTarget::Pool(pool.clone()));
        }

        let members = match self.chat.list_non_bot_members(record.guild_id).await {
            Ok(members) => members,
            Err(e) => {
                tracing::error!(
                    "Failed to fetch members of guild {} during reconciliation: {}",
                    record.guild_id,
                    e
                );
                Vec::new()
            }
        };

        let pool = Arc::new(members);
        pools.insert(record.guild_id, pool.clone());
        Some(PingTarget::Pool(pool))
    }
}

fn validate_interval(kind: PingKind, interval_seconds: i64) -> Result<(), CommandError> {
    if interval_seconds <= 0 || interval_seconds > MAX_INTERVAL_SECONDS {
        return Err(CommandError::InvalidInterval(interval_seconds));
    }

    if kind == PingKind::RandomGif && interval_seconds < MIN_GIF_INTERVAL_SECONDS {
        return Err(CommandError::IntervalTooSmall {
            minimum: MIN_GIF_INTERVAL_SECONDS,
            requested: interval_seconds,
        });
    }

    Ok(())
}
