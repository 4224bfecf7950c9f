//! SeaORM entity models for persisted ping schedules and global settings.

pub mod prelude;

pub mod direct_ping;
pub mod global_settings;
pub mod random_gif_ping;
pub mod random_ping;
