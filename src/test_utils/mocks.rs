//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! Outcomes are scripted per attempt and every call is recorded.

use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::ports::{HttpFetcher, Sleeper};
use crate::error::FetchError;

/// Scripted transport: answers each attempt with the next scripted outcome
/// and records every requested URL.
pub struct ScriptedFetcher {
    outcomes: RwLock<Vec<Result<u16, FetchError>>>,
    requests: RwLock<Vec<String>>,
}

impl ScriptedFetcher {
    pub fn new(outcomes: Vec<Result<u16, FetchError>>) -> Self {
        Self {
            outcomes: RwLock::new(outcomes),
            requests: RwLock::new(Vec::new()),
        }
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.read().unwrap().clone()
    }
}

#[async_trait]
impl HttpFetcher for ScriptedFetcher {
    async fn get(&self, url: &str) -> Result<u16, FetchError> {
        self.requests.write().unwrap().push(url.to_string());

        let mut outcomes = self.outcomes.write().unwrap();
        if outcomes.is_empty() {
            // Running past the script is a test bug; fail the attempt loudly.
            Err(FetchError::Transport("script exhausted".to_string()))
        } else {
            outcomes.remove(0)
        }
    }
}

/// Sleeper that records requested durations instead of waiting.
#[derive(Default)]
pub struct RecordingSleeper {
    sleeps: RwLock<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Durations passed to `sleep` so far, in order.
    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.read().unwrap().clone()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.sleeps.write().unwrap().push(duration);
    }
}
