//! Domain models for ping schedules.
//!
//! A schedule is the pairing of one persisted ping row and one live repeating timer for a
//! `(channel, kind)` key. The three kinds live in separate tables but share the shape
//! captured by [`PingConfig`].

use chrono::{DateTime, Utc};
use std::fmt;

use crate::server::{error::AppError, util::parse::parse_u64_from_string};

/// Shortest interval accepted for GIF pings.
pub const MIN_GIF_INTERVAL_SECONDS: i64 = 300;

/// Longest interval accepted for any ping, one year.
pub const MAX_INTERVAL_SECONDS: i64 = 365 * 24 * 60 * 60;

/// The three flavours of recurring ping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PingKind {
    /// Pings one fixed member.
    Direct,
    /// Pings a member drawn at random from the guild on every tick.
    Random,
    /// Like `Random`, with a GIF attached. Counts against the global GIF budget.
    RandomGif,
}

impl PingKind {
    pub const ALL: [PingKind; 3] = [PingKind::Direct, PingKind::Random, PingKind::RandomGif];

    /// Whether ticks draw their target from a guild member pool.
    pub fn uses_member_pool(self) -> bool {
        matches!(self, PingKind::Random | PingKind::RandomGif)
    }

    /// Whether schedules of this kind consume the global GIF budget.
    pub fn counts_against_budget(self) -> bool {
        matches!(self, PingKind::RandomGif)
    }
}

impl fmt::Display for PingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PingKind::Direct => "direct",
            PingKind::Random => "random",
            PingKind::RandomGif => "random_gif",
        };
        f.write_str(label)
    }
}

/// Identifies one live timer: at most one exists per channel and kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScheduleKey {
    pub channel_id: u64,
    pub kind: PingKind,
}

impl ScheduleKey {
    pub fn new(kind: PingKind, channel_id: u64) -> Self {
        Self { channel_id, kind }
    }
}

/// Persisted ping configuration for one channel.
#[derive(Debug, Clone, PartialEq)]
pub struct PingConfig {
    /// Row id within the kind's table.
    pub id: i32,
    pub kind: PingKind,
    pub guild_id: u64,
    pub channel_id: u64,
    /// Target member, only present for [`PingKind::Direct`].
    pub member_id: Option<u64>,
    pub interval_seconds: i64,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PingConfig {
    /// Converts a direct ping entity model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(PingConfig)` - The converted domain model
    /// - `Err(AppError::InternalErr)` - A stored Discord id failed to parse
    pub fn from_direct_entity(entity: entity::direct_ping::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            kind: PingKind::Direct,
            guild_id: parse_u64_from_string(entity.guild_id)?,
            channel_id: parse_u64_from_string(entity.channel_id)?,
            member_id: Some(parse_u64_from_string(entity.member_id)?),
            interval_seconds: entity.interval_seconds,
            active: entity.active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Converts a random ping entity model at the repository boundary.
    pub fn from_random_entity(entity: entity::random_ping::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            kind: PingKind::Random,
            guild_id: parse_u64_from_string(entity.guild_id)?,
            channel_id: parse_u64_from_string(entity.channel_id)?,
            member_id: None,
            interval_seconds: entity.interval_seconds,
            active: entity.active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Converts a random GIF ping entity model at the repository boundary.
    pub fn from_random_gif_entity(
        entity: entity::random_gif_ping::Model,
    ) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            kind: PingKind::RandomGif,
            guild_id: parse_u64_from_string(entity.guild_id)?,
            channel_id: parse_u64_from_string(entity.channel_id)?,
            member_id: None,
            interval_seconds: entity.interval_seconds,
            active: entity.active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn key(&self) -> ScheduleKey {
        ScheduleKey::new(self.kind, self.channel_id)
    }
}

/// Parameters for creating or replacing the ping row of a channel.
///
/// The stored row is always marked active.
#[derive(Debug, Clone)]
pub struct UpsertPingParam {
    pub kind: PingKind,
    pub guild_id: u64,
    pub channel_id: u64,
    /// Required for [`PingKind::Direct`], ignored otherwise.
    pub member_id: Option<u64>,
    pub interval_seconds: i64,
}

/// Parameters for starting (or replacing) a schedule from a slash command.
#[derive(Debug, Clone)]
pub struct StartPingParam {
    pub kind: PingKind,
    pub guild_id: u64,
    pub channel_id: u64,
    pub member_id: Option<u64>,
    pub interval_seconds: i64,
}

impl From<&StartPingParam> for UpsertPingParam {
    fn from(param: &StartPingParam) -> Self {
        Self {
            kind: param.kind,
            guild_id: param.guild_id,
            channel_id: param.channel_id,
            member_id: param.member_id,
            interval_seconds: param.interval_seconds,
        }
    }
}

/// Outcome of a start or stop operation, carrying the confirmation reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleResult {
    pub kind: PingKind,
    /// Effective interval of the schedule, `None` after a stop.
    pub interval_seconds: Option<i64>,
    pub content: String,
}

impl ScheduleResult {
    pub fn started(kind: PingKind, interval_seconds: i64, member_id: Option<u64>) -> Self {
        let content = match (kind, member_id) {
            (PingKind::Direct, Some(member_id)) => format!(
                "Okay! This channel will now get \"refilled\" with <@{}> every {} seconds.",
                member_id, interval_seconds
            ),
            (PingKind::Direct, None) | (PingKind::Random, _) => format!(
                "Okay! A random member will get pinged every {} seconds on this channel.",
                interval_seconds
            ),
            (PingKind::RandomGif, _) => format!(
                "Okay! A random member will get a GIF every {} seconds on this channel.",
                interval_seconds
            ),
        };

        Self {
            kind,
            interval_seconds: Some(interval_seconds),
            content,
        }
    }

    pub fn stopped(kind: PingKind) -> Self {
        let content = match kind {
            PingKind::Direct => "Okay! I'll stop pinging on this channel.",
            PingKind::Random => "Okay! I'll stop random pinging on this channel.",
            PingKind::RandomGif => "Okay! I'll stop GIF pinging on this channel.",
        };

        Self {
            kind,
            interval_seconds: None,
            content: content.to_string(),
        }
    }
}

/// GIF pings per hour contributed by a schedule with the given interval.
///
/// Integer division, so a 7-minute interval contributes 8 rather than 8.57.
pub fn gifs_per_hour(interval_seconds: i64) -> i64 {
    if interval_seconds <= 0 {
        return 0;
    }
    3600 / interval_seconds
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gifs_per_hour_floors() {
        assert_eq!(gifs_per_hour(300), 12);
        assert_eq!(gifs_per_hour(420), 8);
        assert_eq!(gifs_per_hour(3600), 1);
        assert_eq!(gifs_per_hour(7200), 0);
    }

    #[test]
    fn direct_start_mentions_member() {
        let result = ScheduleResult::started(PingKind::Direct, 60, Some(42));

        assert_eq!(
            result.content,
            "Okay! This channel will now get \"refilled\" with <@42> every 60 seconds."
        );
        assert_eq!(result.interval_seconds, Some(60));
    }

    #[test]
    fn only_gif_kind_uses_budget() {
        assert!(PingKind::RandomGif.counts_against_budget());
        assert!(!PingKind::Random.counts_against_budget());
        assert!(!PingKind::Direct.uses_member_pool());
    }
}
