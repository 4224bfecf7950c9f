//! Business logic services.
//!
//! Services sit between the controllers and the repositories. Outbound dependencies on
//! Discord and Giphy go through the [`chat::ChatClient`] and [`gif::GifSource`] traits so
//! the scheduling logic can be exercised against in-crate fakes.

pub mod budget;
pub mod chat;
pub mod gif;
pub mod interaction;
pub mod schedule;
pub mod server_details;

#[cfg(test)]
pub mod fake;
