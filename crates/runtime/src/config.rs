//! Runtime configuration and environment loading.
use std::env;
use std::time::Duration;

use game_core::GameConfig;

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// Upper bound for one provider call. `None` waits forever.
    pub ad_timeout: Option<Duration>,
    /// Seed for board sampling. `None` draws from OS entropy.
    pub board_seed: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            event_buffer_size: 100,
            command_buffer_size: 32,
            ad_timeout: None,
            board_seed: None,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `AD_REWARD` - Balance granted per completed ad (default: 5000)
    /// - `AD_REWARD_DWELL_MS` - Reward banner duration (default: 2000)
    /// - `AD_TIMEOUT_MS` - Provider call timeout (default: none)
    /// - `BOARD_SEED` - Fixed board seed (default: random)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(reward) = read_env::<u64>("AD_REWARD") {
            config.game_config = config.game_config.with_ad_reward(reward);
        }
        if let Some(dwell) = read_env::<u64>("AD_REWARD_DWELL_MS") {
            config.game_config = config.game_config.with_reward_dwell_ms(dwell);
        }
        if let Some(timeout) = read_env::<u64>("AD_TIMEOUT_MS") {
            config.ad_timeout = Some(Duration::from_millis(timeout.max(1)));
        }
        config.board_seed = read_env::<u64>("BOARD_SEED");

        config
    }

    pub fn reward_dwell(&self) -> Duration {
        Duration::from_millis(self.game_config.reward_dwell_ms)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_game_constants() {
        let config = RuntimeConfig::default();
        assert_eq!(config.game_config.ad_reward, 5_000);
        assert_eq!(config.reward_dwell(), Duration::from_millis(2_000));
        assert!(config.ad_timeout.is_none());
    }
}
