//! Per-target update orchestration
//!
//! Builds each target URL, dispatches the request, and reports a typed
//! outcome. Exit codes are decided by the binary entry point, not here.

use crate::app::dispatcher::Dispatcher;
use crate::domain::entities::Target;
use crate::domain::ports::{HttpFetcher, Sleeper};
use crate::error::UpdateError;

pub struct UpdateService<F, S>
where
    F: HttpFetcher,
    S: Sleeper,
{
    dispatcher: Dispatcher<F, S>,
    username: String,
}

impl<F, S> UpdateService<F, S>
where
    F: HttpFetcher,
    S: Sleeper,
{
    pub fn new(dispatcher: Dispatcher<F, S>, username: String) -> Self {
        Self {
            dispatcher,
            username,
        }
    }

    /// Notify a single target that the profile should be refreshed.
    pub async fn update(&self, target: &Target) -> Result<(), UpdateError> {
        tracing::info!("Starting {} update...", target.name);

        // The username goes in verbatim; these services expect the raw
        // profile name, not an encoded path segment.
        let full_url = format!(
            "{}/{}{}",
            target.base_url, self.username, target.path_suffix
        );
        tracing::debug!("Constructed URL: {}", full_url);

        if self.dispatcher.fetch(&full_url).await {
            tracing::info!("{} update successful.", target.name);
            Ok(())
        } else {
            tracing::error!("{} update failed.", target.name);
            Err(UpdateError::TargetFailed { name: target.name })
        }
    }

    /// Notify every target in order, stopping at the first failure.
    pub async fn update_all(&self, targets: &[Target]) -> Result<(), UpdateError> {
        for target in targets {
            self.update(target).await?;
        }
        Ok(())
    }
}
