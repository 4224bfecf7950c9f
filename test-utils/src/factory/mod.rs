//! Factory methods for creating test data.
//!
//! This module provides factory methods for seeding ping schedules and the global
//! settings row with sensible defaults, reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let ping = factory::create_direct_ping(&db).await?;
//!     let gif_ping = factory::random_gif_ping::RandomGifPingFactory::new(&db)
//!         .interval_seconds(600)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod direct_ping;
pub mod global_settings;
pub mod helpers;
pub mod random_gif_ping;
pub mod random_ping;

pub use direct_ping::create_direct_ping;
pub use global_settings::create_global_settings;
pub use random_gif_ping::create_random_gif_ping;
pub use random_ping::create_random_ping;
