/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Balance granted for each rewarded ad that completes.
    pub ad_reward: u64,
    /// How long the "reward received" banner stays up before the flow
    /// returns to idle, in milliseconds.
    pub reward_dwell_ms: u64,
    /// Player level shown in the header. Never changes during a session.
    pub initial_level: u32,
    /// Balance the session starts with.
    pub initial_balance: u64,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Board edge length. The board is always square.
    pub const BOARD_SIZE: usize = 8;
    /// Allowed withdrawal denominations, smallest first.
    pub const WITHDRAWAL_AMOUNTS: [u64; 6] = [5_000, 10_000, 25_000, 50_000, 100_000, 200_000];

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_AD_REWARD: u64 = 5_000;
    pub const DEFAULT_REWARD_DWELL_MS: u64 = 2_000;
    pub const DEFAULT_INITIAL_LEVEL: u32 = 15;
    pub const DEFAULT_INITIAL_BALANCE: u64 = 135_700;

    pub fn new() -> Self {
        Self {
            ad_reward: Self::DEFAULT_AD_REWARD,
            reward_dwell_ms: Self::DEFAULT_REWARD_DWELL_MS,
            initial_level: Self::DEFAULT_INITIAL_LEVEL,
            initial_balance: Self::DEFAULT_INITIAL_BALANCE,
        }
    }

    pub fn with_ad_reward(mut self, ad_reward: u64) -> Self {
        self.ad_reward = ad_reward;
        self
    }

    pub fn with_reward_dwell_ms(mut self, reward_dwell_ms: u64) -> Self {
        self.reward_dwell_ms = reward_dwell_ms;
        self
    }

    pub fn with_initial_balance(mut self, initial_balance: u64) -> Self {
        self.initial_balance = initial_balance;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
