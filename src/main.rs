//! MyAnimeList profile refresh notifier
//!
//! Pings the external services that mirror a MyAnimeList profile
//! (mal-badges, anime.plus) so they re-fetch the user's data. One GET per
//! target, wrapped in a bounded constant-interval retry.
//!
//! Exit codes: 0 on success, 1 when `MAL_USERNAME` is missing, 2 when a
//! target could not be reached after exhausting retries.

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

mod adapters;
mod app;
mod config;
mod domain;
mod error;

#[cfg(test)]
mod test_utils;


use adapters::{ReqwestFetcher, TokioSleeper};
use app::{Dispatcher, RetryPolicy, UpdateService};
use config::Config;

/// Timeout for a single request attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Install the subscriber before loading config so a missing username is
    // logged through it too.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(config::log_filter_from_env())
                .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting mal-notify");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::from(1);
        }
    };

    let fetcher =
        Arc::new(ReqwestFetcher::new(REQUEST_TIMEOUT).expect("Failed to build HTTP client"));
    let dispatcher = Dispatcher::new(fetcher, Arc::new(TokioSleeper), RetryPolicy::default());
    let service = UpdateService::new(dispatcher, config.username);

    match service.update_all(&domain::TARGETS).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::from(2)
        }
    }
}
