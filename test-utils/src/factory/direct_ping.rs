//! Direct ping factory for creating test direct ping schedules.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test direct pings with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::direct_ping::DirectPingFactory;
///
/// let ping = DirectPingFactory::new(&db)
///     .channel_id("123")
///     .member_id("456")
///     .interval_seconds(30)
///     .build()
///     .await?;
/// ```
pub struct DirectPingFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    channel_id: String,
    member_id: String,
    interval_seconds: i64,
    active: bool,
}

impl<'a> DirectPingFactory<'a> {
    /// Creates a new DirectPingFactory with default values.
    ///
    /// Defaults:
    /// - guild_id, channel_id, member_id: unique auto-incremented ids
    /// - interval_seconds: `60`
    /// - active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id().to_string(),
            channel_id: next_id().to_string(),
            member_id: next_id().to_string(),
            interval_seconds: 60,
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

    pub fn member_id(mut self, member_id: impl Into<String>) -> Self {
        self.member_id = member_id.into();
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

    /// Builds and inserts the direct ping entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::direct_ping::Model)` - Created direct ping entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::direct_ping::Model, DbErr> {
        let now = Utc::now();

        entity::direct_ping::ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(self.guild_id),
            channel_id: ActiveValue::Set(self.channel_id),
            member_id: ActiveValue::Set(self.member_id),
            interval_seconds: ActiveValue::Set(self.interval_seconds),
            active: ActiveValue::Set(self.active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active direct ping with default values.
///
/// Shorthand for `DirectPingFactory::new(db).build().await`.
pub async fn create_direct_ping(
    db: &DatabaseConnection,
) -> Result<entity::direct_ping::Model, DbErr> {
    DirectPingFactory::new(db).build().await
}
