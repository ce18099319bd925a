#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WithdrawalError {
    #[error("{amount} is not one of the offered withdrawal amounts")]
    UnknownAmount { amount: u64 },

    #[error("a concrete payment method must be chosen")]
    NoMethod,
}
