//! Ping schedule repository.
//!
//! The three ping kinds live in their own tables. `PingRepository` hides that split
//! behind a [`PingKind`] argument so callers handle every kind through one set of
//! operations. Every table holds at most one row per `(guild_id, channel_id)`.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};

use crate::server::{
    error::{internal::InternalError, AppError},
    model::ping::{PingConfig, PingKind, UpsertPingParam},
};

/// Repository providing database operations for ping schedules of every kind.
pub struct PingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PingRepository<'a> {
    /// Creates a new PingRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the ping row of the given kind for a channel.
    ///
    /// # Returns
    /// - `Ok(Some(PingConfig))` - A row exists for the channel
    /// - `Ok(None)` - No row exists for the channel
    /// - `Err(AppError)` - Database error or unparsable stored id
    pub async fn get(
        &self,
        kind: PingKind,
        guild_id: u64,
        channel_id: u64,
    ) -> Result<Option<PingConfig>, AppError> {
        let guild_id = guild_id.to_string();
        let channel_id = channel_id.to_string();

        match kind {
            PingKind::Direct => self
                .find_direct(&guild_id, &channel_id)
                .await?
                .map(PingConfig::from_direct_entity)
                .transpose(),
            PingKind::Random => self
                .find_random(&guild_id, &channel_id)
                .await?
                .map(PingConfig::from_random_entity)
                .transpose(),
            PingKind::RandomGif => self
                .find_random_gif(&guild_id, &channel_id)
                .await?
                .map(PingConfig::from_random_gif_entity)
                .transpose(),
        }
    }

    /// Creates or replaces the ping row for a channel.
    ///
    /// If a row already exists for the channel it keeps its id and `created_at`, and
    /// its interval (and target member for direct pings) is overwritten. The stored row
    /// is always marked active.
    ///
    /// # Returns
    /// - `Ok(PingConfig)` - The created or updated row
    /// - `Err(AppError::InternalErr)` - Direct ping requested without a member
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn upsert(&self, param: UpsertPingParam) -> Result<PingConfig, AppError> {
        let guild_id = param.guild_id.to_string();
        let channel_id = param.channel_id.to_string();
        let now = Utc::now();

        match param.kind {
            PingKind::Direct => {
                let member_id = param
                    .member_id
                    .ok_or(InternalError::MissingPingTarget {
                        channel_id: param.channel_id,
                    })?
                    .to_string();

                let entity = match self.find_direct(&guild_id, &channel_id).await? {
                    Some(existing) => {
                        let mut active: entity::direct_ping::ActiveModel = existing.into();
                        active.member_id = ActiveValue::Set(member_id);
                        active.interval_seconds = ActiveValue::Set(param.interval_seconds);
                        active.active = ActiveValue::Set(true);
                        active.updated_at = ActiveValue::Set(now);
                        active.update(self.db).await?
                    }
                    None => {
                        entity::direct_ping::ActiveModel {
                            id: ActiveValue::NotSet,
                            guild_id: ActiveValue::Set(guild_id),
                            channel_id: ActiveValue::Set(channel_id),
                            member_id: ActiveValue::Set(member_id),
                            interval_seconds: ActiveValue::Set(param.interval_seconds),
                            active: ActiveValue::Set(true),
                            created_at: ActiveValue::Set(now),
                            updated_at: ActiveValue::Set(now),
                        }
                        .insert(self.db)
                        .await?
                    }
                };

                PingConfig::from_direct_entity(entity)
            }
            PingKind::Random => {
                let entity = match self.find_random(&guild_id, &channel_id).await? {
                    Some(existing) => {
                        let mut active: entity::random_ping::ActiveModel = existing.into();
                        active.interval_seconds = ActiveValue::Set(param.interval_seconds);
                        active.active = ActiveValue::Set(true);
                        active.updated_at = ActiveValue::Set(now);
                        active.update(self.db).await?
                    }
                    None => {
                        entity::random_ping::ActiveModel {
                            id: ActiveValue::NotSet,
                            guild_id: ActiveValue::Set(guild_id),
                            channel_id: ActiveValue::Set(channel_id),
                            interval_seconds: ActiveValue::Set(param.interval_seconds),
                            active: ActiveValue::Set(true),
                            created_at: ActiveValue::Set(now),
                            updated_at: ActiveValue::Set(now),
                        }
                        .insert(self.db)
                        .await?
                    }
                };

                PingConfig::from_random_entity(entity)
            }
            PingKind::RandomGif => {
                let entity = match self.find_random_gif(&guild_id, &channel_id).await? {
                    Some(existing) => {
                        let mut active: entity::random_gif_ping::ActiveModel = existing.into();
                        active.interval_seconds = ActiveValue::Set(param.interval_seconds);
                        active.active = ActiveValue::Set(true);
                        active.updated_at = ActiveValue::Set(now);
                        active.update(self.db).await?
                    }
                    None => {
                        entity::random_gif_ping::ActiveModel {
                            id: ActiveValue::NotSet,
                            guild_id: ActiveValue::Set(guild_id),
                            channel_id: ActiveValue::Set(channel_id),
                            interval_seconds: ActiveValue::Set(param.interval_seconds),
                            active: ActiveValue::Set(true),
                            created_at: ActiveValue::Set(now),
                            updated_at: ActiveValue::Set(now),
                        }
                        .insert(self.db)
                        .await?
                    }
                };

                PingConfig::from_random_gif_entity(entity)
            }
        }
    }

    /// Deletes the ping row of the given kind for a channel.
    ///
    /// # Returns
    /// - `Ok(Some(PingConfig))` - The row that was deleted
    /// - `Ok(None)` - There was no row to delete
    /// - `Err(AppError)` - Database error during lookup or delete
    pub async fn delete(
        &self,
        kind: PingKind,
        guild_id: u64,
        channel_id: u64,
    ) -> Result<Option<PingConfig>, AppError> {
        let Some(existing) = self.get(kind, guild_id, channel_id).await? else {
            return Ok(None);
        };

        match kind {
            PingKind::Direct => {
                entity::prelude::DirectPing::delete_by_id(existing.id)
                    .exec(self.db)
                    .await?;
            }
            PingKind::Random => {
                entity::prelude::RandomPing::delete_by_id(existing.id)
                    .exec(self.db)
                    .await?;
            }
            PingKind::RandomGif => {
                entity::prelude::RandomGifPing::delete_by_id(existing.id)
                    .exec(self.db)
                    .await?;
            }
        }

        Ok(Some(existing))
    }

    /// Gets every row of the given kind that is marked active.
    ///
    /// Used by startup reconciliation to rebuild live timers.
    pub async fn get_all_active(&self, kind: PingKind) -> Result<Vec<PingConfig>, AppError> {
        match kind {
            PingKind::Direct => entity::prelude::DirectPing::find()
                .filter(entity::direct_ping::Column::Active.eq(true))
                .all(self.db)
                .await?
                .into_iter()
                .map(PingConfig::from_direct_entity)
                .collect(),
            PingKind::Random => entity::prelude::RandomPing::find()
                .filter(entity::random_ping::Column::Active.eq(true))
                .all(self.db)
                .await?
                .into_iter()
                .map(PingConfig::from_random_entity)
                .collect(),
            PingKind::RandomGif => entity::prelude::RandomGifPing::find()
                .filter(entity::random_gif_ping::Column::Active.eq(true))
                .all(self.db)
                .await?
                .into_iter()
                .map(PingConfig::from_random_gif_entity)
                .collect(),
        }
    }

    async fn find_direct(
        &self,
        guild_id: &str,
        channel_id: &str,
    ) -> Result<Option<entity::direct_ping::Model>, AppError> {
        Ok(entity::prelude::DirectPing::find()
            .filter(entity::direct_ping::Column::GuildId.eq(guild_id))
            .filter(entity::direct_ping::Column::ChannelId.eq(channel_id))
            .one(self.db)
            .await?)
    }

    async fn find_random(
        &self,
        guild_id: &str,
        channel_id: &str,
    ) -> Result<Option<entity::random_ping::Model>, AppError> {
        Ok(entity::prelude::RandomPing::find()
            .filter(entity::random_ping::Column::GuildId.eq(guild_id))
            .filter(entity::random_ping::Column::ChannelId.eq(channel_id))
            .one(self.db)
            .await?)
    }

    async fn find_random_gif(
        &self,
        guild_id: &str,
        channel_id: &str,
    ) -> Result<Option<entity::random_gif_ping::Model>, AppError> {
        Ok(entity::prelude::RandomGifPing::find()
            .filter(entity::random_gif_ping::Column::GuildId.eq(guild_id))
            .filter(entity::random_gif_ping::Column::ChannelId.eq(channel_id))
            .one(self.db)
            .await?)
    }
}
