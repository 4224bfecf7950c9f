//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! ping schedules, the global settings row, Discord lookups and parsed slash commands.
//! Domain models are converted from entity models at the repository boundary and from
//! serenity types at the controller boundary.

pub mod command;
pub mod discord;
pub mod ping;
pub mod settings;
