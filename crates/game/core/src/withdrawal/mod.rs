//! Withdrawal form and confirm eligibility.
//!
//! The form only records what the player picked. Whether the confirm button
//! is enabled is derived on demand from the selection and the current
//! balance; nothing here moves money.
mod error;
mod form;
mod method;

pub use error::WithdrawalError;
pub use form::{ConfirmBlocker, WithdrawalForm, is_affordable};
pub use method::PaymentMethod;
