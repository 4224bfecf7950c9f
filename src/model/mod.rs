//! JSON payloads returned by the HTTP API.

pub mod api;
pub mod discord;
