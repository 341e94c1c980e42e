use crate::error::{config::ConfigError, AppError};

const DEFAULT_TAUHEAD_URL: &str = "https://www.tauhead.com";
const DEFAULT_ITEM_IMPORT_SCHEDULE: &str = "0 0 4 * * *";

pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    pub tauhead_url: String,

    /// TauHead item sets imported by the scheduler.
    pub item_import_sets: Vec<String>,
    /// Cron expression (with seconds) for the item import job.
    pub item_import_schedule: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            tauhead_url: parse_url(
                "TAUHEAD_URL",
                std::env::var("TAUHEAD_URL").unwrap_or_else(|_| DEFAULT_TAUHEAD_URL.to_string()),
            )?,
            item_import_sets: std::env::var("ITEM_IMPORT_SETS")
                .map(|sets| parse_set_list(&sets))
                .unwrap_or_default(),
            item_import_schedule: std::env::var("ITEM_IMPORT_SCHEDULE")
                .unwrap_or_else(|_| DEFAULT_ITEM_IMPORT_SCHEDULE.to_string()),
        })
    }
}

/// Checks that a URL variable parses, keeping its original text.
fn parse_url(name: &str, value: String) -> Result<String, ConfigError> {
    url::Url::parse(&value).map_err(|e| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: e.to_string(),
    })?;

    Ok(value)
}

/// Splits a comma separated list of item set names, dropping empty entries.
fn parse_set_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
