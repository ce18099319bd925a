//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination and withdrawal selection so
//! clients can bubble them up with consistent context. Ad provider failures
//! have their own type because the worker absorbs them.
use std::time::Duration;

use game_core::WithdrawalError;
use thiserror::Error;
use tokio::sync::oneshot;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("session worker command channel closed")]
    CommandChannelClosed,

    #[error("session worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("session worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("withdrawal screen is not open")]
    WithdrawalClosed,

    #[error(transparent)]
    Withdrawal(#[from] WithdrawalError),
}

/// Why an ad could not be shown.
///
/// Never reaches runtime callers: the worker logs it and settles the attempt
/// without a reward.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdError {
    #[error("ad unavailable: {0}")]
    Unavailable(String),

    #[error("ad did not finish within {after:?}")]
    TimedOut { after: Duration },
}
