//! Event types for different topics.

use game_core::{AdFlowState, AdTicket, PaymentMethod, Screen};
use serde::{Deserialize, Serialize};

/// Changes to the session holder's own state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// The visible screen was replaced.
    ScreenChanged { from: Screen, to: Screen },

    /// The balance was credited.
    BalanceChanged { previous: u64, current: u64 },
}

/// Events from the game screen: the rewarded-ad flow and the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameScreenEvent {
    /// The ad flow moved between states.
    AdStateChanged {
        ticket: AdTicket,
        from: AdFlowState,
        to: AdFlowState,
    },

    /// A watch request arrived while an attempt was already running.
    WatchIgnored { state: AdFlowState },

    /// A completed ad credited the balance.
    RewardGranted {
        ticket: AdTicket,
        amount: u64,
        balance: u64,
    },

    /// The provider failed. The flow already returned to idle.
    AdFailed { ticket: AdTicket, reason: String },

    /// The decorative board was resampled.
    BoardReshuffled,
}

/// Events from the withdrawal screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WithdrawalEvent {
    /// A fresh form was created on entering the screen.
    Opened,

    /// Amount or method changed; eligibility recomputed.
    SelectionChanged {
        amount: Option<u64>,
        method: PaymentMethod,
        can_confirm: bool,
    },
}
