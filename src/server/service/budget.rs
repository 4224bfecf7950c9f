//! Global GIF-per-hour budget.
//!
//! Every active GIF schedule contributes `3600 / interval` GIFs per hour to a single
//! deployment-wide total stored in the settings row. The total is maintained
//! incrementally by reserve/release calls, which are serialized behind one async mutex
//! so concurrent commands in different channels cannot interleave their
//! read-modify-write cycles.

use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::server::{
    data::global_settings::GlobalSettingsRepository,
    error::{command::CommandError, AppError},
    model::ping::{gifs_per_hour, PingConfig},
};

#[derive(Clone)]
pub struct BudgetTracker {
    db: DatabaseConnection,
    /// Highest total a reservation may produce.
    ceiling: i64,
    lock: Arc<Mutex<()>>,
}

impl BudgetTracker {
    /// Creates a new BudgetTracker instance.
    ///
    /// # Arguments
    /// - `db` - Database connection holding the settings row
    /// - `ceiling` - Maximum GIF pings per hour across the deployment
    pub fn new(db: DatabaseConnection, ceiling: i64) -> Self {
        Self {
            db,
            ceiling,
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Ensures the settings row exists and returns the stored total.
    ///
    /// Called once at startup; a failure here is fatal to the process.
    pub async fn bootstrap(&self) -> Result<i64, AppError> {
        let _guard = self.lock.lock().await;
        let settings = GlobalSettingsRepository::new(&self.db).get_or_create().await?;

        tracing::info!(
            "GIF budget at {}/{} GIFs per hour",
            settings.global_gifs_per_hour,
            self.ceiling
        );

        Ok(settings.global_gifs_per_hour)
    }

    /// Current stored total.
    pub async fn current(&self) -> Result<i64, AppError> {
        let _guard = self.lock.lock().await;
        self.read_total().await
    }

    /// Reserves budget for a GIF schedule.
    ///
    /// When the schedule replaces an existing one for the same channel, pass the old
    /// interval as `previous_interval` so only the difference is charged. The ceiling
    /// applies only when that difference is positive, so lowering a schedule's rate is
    /// always allowed.
    ///
    /// # Returns
    /// - `Ok(i64)` - New stored total
    /// - `Err(AppError::CommandErr(BudgetExceeded))` - Total would exceed the ceiling
    /// - `Err(AppError::CommandErr(CorruptBudget))` - Total would go negative
    /// - `Err(AppError::DbErr)` - Database error; the stored total is unchanged
    pub async fn reserve(
        &self,
        new_interval: i64,
        previous_interval: Option<i64>,
    ) -> Result<i64, AppError> {
        self.apply(reservation_delta(new_interval, previous_interval), true)
            .await
    }

    /// Releases the budget held by a GIF schedule with the given interval.
    ///
    /// # Returns
    /// - `Ok(i64)` - New stored total
    /// - `Err(AppError::CommandErr(CorruptBudget))` - Total would go negative; nothing
    ///   is written
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn release(&self, interval: i64) -> Result<i64, AppError> {
        self.apply(-gifs_per_hour(interval), false).await
    }

    /// Undoes a successful [`reserve`](Self::reserve) with the same arguments.
    pub async fn revert_reservation(
        &self,
        new_interval: i64,
        previous_interval: Option<i64>,
    ) -> Result<i64, AppError> {
        self.apply(-reservation_delta(new_interval, previous_interval), false)
            .await
    }

    /// Undoes a successful [`release`](Self::release) with the same interval.
    pub async fn revert_release(&self, interval: i64) -> Result<i64, AppError> {
        self.apply(gifs_per_hour(interval), false).await
    }

    /// Compares the stored total with the contribution of the given active GIF
    /// schedules and logs a warning when they disagree.
    ///
    /// # Returns
    /// - `Ok(true)` - Stored total matches
    /// - `Ok(false)` - Mismatch, left as is
    /// - `Err(AppError)` - Database error reading the total
    pub async fn audit(&self, active: &[PingConfig]) -> Result<bool, AppError> {
        let expected: i64 = active
            .iter()
            .map(|ping| gifs_per_hour(ping.interval_seconds))
            .sum();
        let stored = self.current().await?;

        if stored != expected {
            tracing::warn!(
                "GIF budget mismatch: stored total is {} but {} active GIF schedules add up to {}",
                stored,
                active.len(),
                expected
            );
            return Ok(false);
        }

        Ok(true)
    }

    async fn apply(&self, delta: i64, enforce_ceiling: bool) -> Result<i64, AppError> {
        let _guard = self.lock.lock().await;

        let current = self.read_total().await?;
        let total = current + delta;

        if enforce_ceiling && delta > 0 && total > self.ceiling {
            return Err(CommandError::BudgetExceeded {
                ceiling: self.ceiling,
                current,
                requested: delta,
            }
            .into());
        }

        if total < 0 {
            tracing::error!(
                "GIF budget would go negative: stored total {} with change {}",
                current,
                delta
            );
            return Err(CommandError::CorruptBudget { current, delta }.into());
        }

        if delta == 0 {
            return Ok(current);
        }

        let settings = GlobalSettingsRepository::new(&self.db)
            .set_total(total)
            .await?;

        Ok(settings.global_gifs_per_hour)
    }

    async fn read_total(&self) -> Result<i64, AppError> {
        let settings = GlobalSettingsRepository::new(&self.db).get_or_create().await?;
        Ok(settings.global_gifs_per_hour)
    }
}

fn reservation_delta(new_interval: i64, previous_interval: Option<i64>) -> i64 {
    gifs_per_hour(new_interval) - previous_interval.map(gifs_per_hour).unwrap_or(0)
}
