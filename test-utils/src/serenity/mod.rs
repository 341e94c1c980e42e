//! Test factories for creating Serenity API objects.
//!
//! Serenity structs are built by deserializing JSON, simulating what Discord's API would
//! return.
//!
//! # Available Factories
//!
//! - `user::create_test_user` - Create Serenity User objects

pub mod user;

pub use user::create_test_user;
