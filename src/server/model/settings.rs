//! Domain model for the deployment-wide settings row.

use chrono::{DateTime, Utc};

/// Singleton settings shared by every guild.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalSettings {
    /// Running total of GIF pings per hour across all active GIF schedules.
    pub global_gifs_per_hour: i64,
    pub updated_at: DateTime<Utc>,
}

impl GlobalSettings {
    pub fn from_entity(entity: entity::global_settings::Model) -> Self {
        Self {
            global_gifs_per_hour: entity.global_gifs_per_hour,
            updated_at: entity.updated_at,
        }
    }
}
