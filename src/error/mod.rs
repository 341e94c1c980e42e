//! Error types for the application.
//!
//! `AppError` is the top-level error type returned by services and infrastructure code. It
//! wraps domain-specific errors with `#[from]` conversions so `?` works across layers.
//! Rejected business operations are not errors: services report them as `Ok(None)` or
//! `Ok(false)`.

pub mod config;
pub mod tauhead;

use thiserror::Error;

use crate::error::{config::ConfigError, tauhead::TauheadError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// TauHead lookup error.
    #[error(transparent)]
    TauheadErr(#[from] TauheadError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Invalid URL passed to or built by an HTTP client.
    #[error(transparent)]
    UrlErr(#[from] url::ParseError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Internal error with custom message.
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
