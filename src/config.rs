//! Process configuration loaded from the environment.

use std::env;

use crate::error::ConfigError;

/// Filter used when `LOG_LEVEL` is unset or unrecognized.
pub const DEFAULT_LOG_FILTER: &str = "debug";

/// Read the log filter from `LOG_LEVEL`.
///
/// Kept separate from [`Config::from_env`] because the subscriber must be
/// installed before configuration validation can be logged.
pub fn log_filter_from_env() -> String {
    env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string())
}

/// Validated process configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// MyAnimeList username, inserted verbatim into both target URLs.
    pub username: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_username(env::var("MAL_USERNAME").ok())
    }

    /// An unset or empty username is fatal before any network call.
    pub(crate) fn from_username(value: Option<String>) -> Result<Self, ConfigError> {
        match value {
            Some(username) if !username.is_empty() => Ok(Self { username }),
            _ => Err(ConfigError::MissingUsername),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_username_is_accepted() {
        let config = Config::from_username(Some("alice".to_string())).unwrap();
        assert_eq!(config.username, "alice");
    }

    #[test]
    fn unset_username_is_rejected() {
        assert!(matches!(
            Config::from_username(None),
            Err(ConfigError::MissingUsername)
        ));
    }

    #[test]
    fn empty_username_is_rejected() {
        assert!(matches!(
            Config::from_username(Some(String::new())),
            Err(ConfigError::MissingUsername)
        ));
    }
}
