//! Retrying request dispatcher
//!
//! Wraps a single-attempt transport in a bounded constant-interval retry
//! policy and reports a definitive outcome. Transport errors never leave
//! this module.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::ports::{HttpFetcher, Sleeper};

/// Constant backoff: a fixed wait between attempts, no jitter, no growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Wait between consecutive attempts.
    pub interval: Duration,
    /// Total attempts, counting the initial one.
    pub max_attempts: u32,
}

impl RetryPolicy {
    /// Only an exact 200 stops the retry loop early. Other 2xx codes are
    /// retried like any failure.
    pub fn is_success(&self, status: u16) -> bool {
        status == 200
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(60),
            max_attempts: 5,
        }
    }
}

/// Dispatches a GET through the retry policy.
pub struct Dispatcher<F, S>
where
    F: HttpFetcher,
    S: Sleeper,
{
    fetcher: Arc<F>,
    sleeper: Arc<S>,
    policy: RetryPolicy,
}

impl<F, S> Dispatcher<F, S>
where
    F: HttpFetcher,
    S: Sleeper,
{
    pub fn new(fetcher: Arc<F>, sleeper: Arc<S>, policy: RetryPolicy) -> Self {
        Self {
            fetcher,
            sleeper,
            policy,
        }
    }

    /// Perform a GET against `url`, retrying until a 200 is seen or attempts
    /// run out.
    ///
    /// Callers always receive a boolean; the underlying transport error is
    /// logged here and consumed.
    pub async fn fetch(&self, url: &str) -> bool {
        let mut last_failure = String::from("no attempts made");

        for attempt in 1..=self.policy.max_attempts {
            if attempt > 1 {
                self.sleeper.sleep(self.policy.interval).await;
            }

            match self.fetcher.get(url).await {
                Ok(status) => {
                    tracing::debug!("Response status: {} for URL: {}", status, url);
                    if self.policy.is_success(status) {
                        return true;
                    }
                    last_failure = format!("status code {}", status);
                }
                Err(e) => {
                    tracing::error!("Request to {} failed: {}", url, e);
                    last_failure = e.to_string();
                }
            }
        }

        tracing::error!(
            "Failed to retrieve page after {} attempts. URL: {}, last failure: {}",
            self.policy.max_attempts,
            url,
            last_failure
        );
        false
    }
}
