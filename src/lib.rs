//! Syndicate management backend.
//!
//! Business logic for running a syndicate: campaign scheduling and attendance, loot
//! distribution along a rotating player list, the Discord officer list and item imports
//! from TauHead.
//!
//! # Architecture
//!
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Service Layer** (`service/`) - Business rules and authorization checks
//! - **Error Layer** (`error/`) - Application error types
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Startup** (`startup`) - Database connection, migrations and HTTP client setup
//! - **TauHead** (`tauhead`) - Item lookup client
//! - **Bot** (`bot/`) - Discord bot handling officer commands
//! - **Scheduler** (`scheduler/`) - Cron jobs for item imports

pub mod bot;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod tauhead;
pub mod util;
