use crate::config::GameConfig;
use crate::intent::Intent;

use super::{PlayerData, Screen};

/// Canonical snapshot of the session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionState {
    pub player: PlayerData,
    pub screen: Screen,
}

/// Balance movement produced by a single `AddBalance` intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BalanceChange {
    pub previous: u64,
    pub current: u64,
}

impl BalanceChange {
    /// Amount actually credited. Smaller than requested only on saturation.
    pub fn delta(&self) -> u64 {
        self.current - self.previous
    }
}

/// What an applied intent changed, so callers know what to publish.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionChange {
    /// Screen selection was replaced. `from` may equal `to`.
    Screen { from: Screen, to: Screen },
    /// Balance was credited.
    Balance(BalanceChange),
    /// The intent was valid but left the state untouched (zero credit).
    Unchanged,
}

impl SessionState {
    pub fn new(player: PlayerData) -> Self {
        Self {
            player,
            screen: Screen::Game,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(PlayerData::new(
            config.initial_level,
            config.initial_balance,
        ))
    }

    pub fn balance(&self) -> u64 {
        self.player.balance
    }

    /// Replaces the current screen unconditionally.
    pub fn navigate_to(&mut self, screen: Screen) -> SessionChange {
        let from = self.screen;
        self.screen = screen;
        SessionChange::Screen { from, to: screen }
    }

    /// Credits `amount` to the balance.
    ///
    /// Never fails. A zero amount is accepted and reported as
    /// [`SessionChange::Unchanged`].
    pub fn add_balance(&mut self, amount: u64) -> SessionChange {
        if amount == 0 {
            return SessionChange::Unchanged;
        }
        let previous = self.player.credit(amount);
        SessionChange::Balance(BalanceChange {
            previous,
            current: self.player.balance,
        })
    }

    /// Single entry point for upward intents from the screens.
    pub fn apply(&mut self, intent: Intent) -> SessionChange {
        match intent {
            Intent::Navigate(screen) => self.navigate_to(screen),
            Intent::AddBalance(amount) => self.add_balance(amount),
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}
