//! Random ping factory for creating test random-member ping schedules.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test random pings with customizable fields.
pub struct RandomPingFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    channel_id: String,
    interval_seconds: i64,
    active: bool,
}

impl<'a> RandomPingFactory<'a> {
    /// Creates a new RandomPingFactory with default values.
    ///
    /// Defaults:
    /// - guild_id, channel_id: unique auto-incremented ids
    /// - interval_seconds: `120`
    /// - active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id().to_string(),
            channel_id: next_id().to_string(),
            interval_seconds: 120,
            active: true,
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = channel_id.into();
        self
    }

    pub fn interval_seconds(mut self, interval_seconds: i64) -> Self {
        self.interval_seconds = interval_seconds;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the random ping entity into the database.
    pub async fn build(self) -> Result<entity::random_ping::Model, DbErr> {
        let now = Utc::now();

        entity::random_ping::ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(self.guild_id),
            channel_id: ActiveValue::Set(self.channel_id),
            interval_seconds: ActiveValue::Set(self.interval_seconds),
            active: ActiveValue::Set(self.active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active random ping with default values.
pub async fn create_random_ping(
    db: &DatabaseConnection,
) -> Result<entity::random_ping::Model, DbErr> {
    RandomPingFactory::new(db).build().await
}
