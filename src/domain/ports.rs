//! Port traits implemented by the adapters.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::FetchError;

/// Single-attempt HTTP transport.
///
/// One call performs one GET and reports the response status code. The retry
/// policy lives in the dispatcher, not here.
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    async fn get(&self, url: &str) -> Result<u16, FetchError>;
}

/// Delay between retry attempts, injectable so tests replace real time with
/// a recording no-op.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}
