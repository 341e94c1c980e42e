//! Taumanager Test Utils
//!
//! Shared testing utilities for the syndicate manager. This crate offers a builder for
//! creating test contexts backed by in-memory SQLite databases, factories for every entity
//! and helpers for building Serenity objects.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::DiscordOfficer;
//!
//! #[tokio::test]
//! async fn test_officer_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(DiscordOfficer)
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
pub mod serenity;
