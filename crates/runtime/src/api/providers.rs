//! Asynchronous abstraction for showing rewarded ads.
//!
//! Runtime users plug in [`AdProvider`] implementations so the session can run
//! against a simulated ad, a scripted fixture, or a real ad network.
use std::time::Duration;

use async_trait::async_trait;

use super::errors::AdError;

/// Shows one rewarded ad and reports whether the reward was earned.
///
/// Implementations may take arbitrarily long. The runtime calls at most one
/// ad at a time and never cancels a call.
#[async_trait]
pub trait AdProvider: Send + Sync {
    /// `Ok(true)` if the player watched to the end, `Ok(false)` if they did
    /// not, `Err` if the ad could not be shown at all.
    async fn show_rewarded_ad(&self) -> Result<bool, AdError>;
}

/// Stand-in for an ad network: waits, then answers with a fixed result.
#[derive(Debug, Clone)]
pub struct SimulatedAdProvider {
    delay: Duration,
    grant: bool,
}

impl SimulatedAdProvider {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(1_500);

    pub fn new(delay: Duration, grant: bool) -> Self {
        Self { delay, grant }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn grants(&self) -> bool {
        self.grant
    }
}

impl Default for SimulatedAdProvider {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY, true)
    }
}

#[async_trait]
impl AdProvider for SimulatedAdProvider {
    async fn show_rewarded_ad(&self) -> Result<bool, AdError> {
        tracing::debug!(delay_ms = self.delay.as_millis() as u64, "Showing simulated ad");
        tokio::time::sleep(self.delay).await;
        tracing::debug!(granted = self.grant, "Simulated ad finished");
        Ok(self.grant)
    }
}
