//! Pingboard Test Utils
//!
//! Provides shared testing utilities for building repository and service tests for the
//! pingboard application. This crate offers a builder pattern for creating test contexts
//! with in-memory SQLite databases and customizable table schemas, plus factories for
//! seeding ping schedules and the global settings row.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_ping_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_ping_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
