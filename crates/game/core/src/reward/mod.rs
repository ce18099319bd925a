//! Rewarded-ad flow for the game screen.
//!
//! [`RewardFlow`] is a pure state machine: it decides which transitions are
//! legal and what the caller must do next (call the provider, credit the
//! balance, start the dwell timer). It never performs I/O or sleeps, so the
//! runtime can drive it from a single task and tests can drive it by hand.
mod error;
mod flow;

pub use error::FlowError;
pub use flow::{AdFlowState, AdSettlement, AdTicket, RewardFlow, Settled, WatchRequest};
