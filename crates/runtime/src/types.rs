//! Read-only snapshots returned by [`crate::RuntimeHandle`] queries.
use game_core::{
    AdFlowState, Board, ConfirmBlocker, PaymentMethod, PlayerData, Screen, WithdrawalForm,
};
use serde::{Deserialize, Serialize};

/// Everything a frontend needs to draw the header and the game screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub player: PlayerData,
    pub screen: Screen,
    pub ad_state: AdFlowState,
    /// Amount one completed ad grants.
    pub ad_reward: u64,
    pub rewards_granted: u64,
    pub board: Board,
}

/// State of the withdrawal form, with eligibility evaluated against `balance`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawalSnapshot {
    pub balance: u64,
    pub amount: Option<u64>,
    pub method: PaymentMethod,
    pub can_confirm: bool,
    pub blockers: Vec<ConfirmBlocker>,
}

impl WithdrawalSnapshot {
    pub fn capture(form: &WithdrawalForm, balance: u64) -> Self {
        Self {
            balance,
            amount: form.amount(),
            method: form.method(),
            can_confirm: form.can_confirm(balance),
            blockers: form.blockers(balance),
        }
    }
}
