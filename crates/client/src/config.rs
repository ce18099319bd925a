//! Settings for the stand-in ad provider used by the binary.
use std::env;
use std::time::Duration;

use runtime::SimulatedAdProvider;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulatedAdConfig {
    pub delay: Duration,
    /// Whether the simulated viewer watches to the end.
    pub grant: bool,
}

impl SimulatedAdConfig {
    /// Environment variables:
    /// - `AD_SIMULATED_DELAY_MS` - Playback time in milliseconds (default: 1500)
    /// - `AD_SIMULATED_REWARD` - `false` simulates a skipped ad (default: true)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ms) = env::var("AD_SIMULATED_DELAY_MS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
        {
            config.delay = Duration::from_millis(ms);
        }
        if let Ok(value) = env::var("AD_SIMULATED_REWARD") {
            match value.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => config.grant = true,
                "0" | "false" | "no" | "off" => config.grant = false,
                _ => {}
            }
        }

        config
    }

    pub fn provider(&self) -> SimulatedAdProvider {
        SimulatedAdProvider::new(self.delay, self.grant)
    }
}

impl Default for SimulatedAdConfig {
    fn default() -> Self {
        Self {
            delay: SimulatedAdProvider::DEFAULT_DELAY,
            grant: true,
        }
    }
}
