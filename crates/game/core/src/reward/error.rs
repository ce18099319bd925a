use super::{AdFlowState, AdTicket};

/// Rejected transitions of the reward flow.
///
/// None of these reach the player. They exist so the runtime can log a
/// settlement or timer that arrived for an attempt that is no longer current.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    #[error("settlement for {ticket} arrived while the flow was {state}")]
    NotLoading { ticket: AdTicket, state: AdFlowState },

    #[error("dwell expiry for {ticket} arrived while the flow was {state}")]
    NotRewarded { ticket: AdTicket, state: AdFlowState },

    #[error("{received} does not match the in-flight attempt {expected}")]
    StaleTicket {
        expected: AdTicket,
        received: AdTicket,
    },
}
