use std::fmt;

/// Per-session player data shown in the header.
///
/// `level` is fixed for the lifetime of a session. `balance` only grows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerData {
    pub level: u32,
    pub balance: u64,
}

impl PlayerData {
    pub const fn new(level: u32, balance: u64) -> Self {
        Self { level, balance }
    }

    /// Adds `amount` to the balance, returning the previous balance.
    ///
    /// Saturates at `u64::MAX` instead of wrapping.
    pub(crate) fn credit(&mut self, amount: u64) -> u64 {
        let previous = self.balance;
        self.balance = previous.saturating_add(amount);
        previous
    }
}

impl fmt::Display for PlayerData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "level {} / balance {}", self.level, self.balance)
    }
}
