//! Error types for each layer:
//! - `ConfigError`: startup environment validation
//! - `FetchError`: transport failures of a single request attempt
//! - `UpdateError`: per-target outcomes escalated to the process exit code

use thiserror::Error;

/// Configuration errors. Fatal before any network activity.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No MAL_USERNAME set")]
    MissingUsername,
}

/// Failure of a single request attempt.
///
/// Never crosses the dispatcher boundary: the dispatcher converts these into
/// retries and ultimately a boolean outcome.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, DNS, timeout, or protocol failure below HTTP.
    #[error("request failed: {0}")]
    Transport(String),
}

/// Per-target update errors.
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("{name} update failed")]
    TargetFailed { name: &'static str },
}
