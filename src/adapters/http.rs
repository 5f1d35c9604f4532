//! reqwest-backed transport adapter.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;

use crate::domain::ports::HttpFetcher;
use crate::error::FetchError;

/// Performs one real GET per call. The per-attempt timeout is set on the
/// underlying client, so every attempt gets the same deadline.
pub struct ReqwestFetcher {
    http: Client,
}

impl ReqwestFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http })
    }
}

#[async_trait]
impl HttpFetcher for ReqwestFetcher {
    async fn get(&self, url: &str) -> Result<u16, FetchError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(response.status().as_u16())
    }
}
