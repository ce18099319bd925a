//! Session rules for the Fruit Cash game shell.
//!
//! `game-core` defines the pieces of the shell that carry actual rules: the
//! session holder's state and intents, the rewarded-ad flow, withdrawal
//! eligibility, and board sampling. Everything here is synchronous and free
//! of I/O. The runtime crate supplies time, the ad provider, and a single
//! task that owns these values.
pub mod board;
pub mod config;
pub mod intent;
pub mod reward;
pub mod screen;
pub mod state;
pub mod withdrawal;

pub use board::{Board, Fruit};
pub use config::GameConfig;
pub use intent::Intent;
pub use reward::{AdFlowState, AdSettlement, AdTicket, FlowError, RewardFlow, Settled, WatchRequest};
pub use screen::{GameScreen, WithdrawalScreen};
pub use state::{BalanceChange, PlayerData, Screen, SessionChange, SessionState};
pub use withdrawal::{ConfirmBlocker, PaymentMethod, WithdrawalError, WithdrawalForm, is_affordable};
