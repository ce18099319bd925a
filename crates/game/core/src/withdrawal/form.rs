use crate::config::GameConfig;

use super::{PaymentMethod, WithdrawalError};

/// Whether `amount` can be covered by `balance`.
///
/// Used to dim candidates the player cannot afford. Selection itself is not
/// blocked; only confirmation is.
pub fn is_affordable(amount: u64, balance: u64) -> bool {
    balance >= amount
}

/// One unmet condition for confirming a withdrawal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfirmBlocker {
    AmountNotSelected,
    MethodNotSelected,
    InsufficientBalance { balance: u64, amount: u64 },
}

/// Selection state of the withdrawal screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WithdrawalForm {
    amount: Option<u64>,
    method: PaymentMethod,
}

impl WithdrawalForm {
    /// Offered amounts, smallest first.
    pub const AMOUNTS: [u64; 6] = GameConfig::WITHDRAWAL_AMOUNTS;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn amount(&self) -> Option<u64> {
        self.amount
    }

    pub fn method(&self) -> PaymentMethod {
        self.method
    }

    /// Picks one of [`Self::AMOUNTS`]. The balance is not consulted here.
    pub fn select_amount(&mut self, amount: u64) -> Result<(), WithdrawalError> {
        if !Self::AMOUNTS.contains(&amount) {
            return Err(WithdrawalError::UnknownAmount { amount });
        }
        self.amount = Some(amount);
        Ok(())
    }

    pub fn select_method(&mut self, method: PaymentMethod) -> Result<(), WithdrawalError> {
        if !method.is_selected() {
            return Err(WithdrawalError::NoMethod);
        }
        self.method = method;
        Ok(())
    }

    /// Every reason the confirm button is disabled, in form order.
    pub fn blockers(&self, balance: u64) -> Vec<ConfirmBlocker> {
        let mut blockers = Vec::new();
        match self.amount {
            None => blockers.push(ConfirmBlocker::AmountNotSelected),
            Some(amount) if !is_affordable(amount, balance) => {
                blockers.push(ConfirmBlocker::InsufficientBalance { balance, amount })
            }
            Some(_) => {}
        }
        if !self.method.is_selected() {
            blockers.push(ConfirmBlocker::MethodNotSelected);
        }
        blockers
    }

    /// True iff an amount and a method are chosen and the balance covers the amount.
    pub fn can_confirm(&self, balance: u64) -> bool {
        match self.amount {
            Some(amount) => self.method.is_selected() && is_affordable(amount, balance),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BALANCE: u64 = 135_700;

    fn form(amount: Option<u64>, method: PaymentMethod) -> WithdrawalForm {
        let mut form = WithdrawalForm::new();
        if let Some(amount) = amount {
            form.select_amount(amount).unwrap();
        }
        if method.is_selected() {
            form.select_method(method).unwrap();
        }
        form
    }

    #[test]
    fn fresh_form_is_blocked() {
        let form = WithdrawalForm::new();
        assert!(!form.can_confirm(BALANCE));
        assert_eq!(
            form.blockers(BALANCE),
            vec![
                ConfirmBlocker::AmountNotSelected,
                ConfirmBlocker::MethodNotSelected,
            ]
        );
    }

    #[test]
    fn amount_over_balance_is_blocked() {
        let form = form(Some(200_000), PaymentMethod::Dana);
        assert!(!form.can_confirm(BALANCE));
        assert_eq!(
            form.blockers(BALANCE),
            vec![ConfirmBlocker::InsufficientBalance {
                balance: BALANCE,
                amount: 200_000,
            }]
        );
    }

    #[test]
    fn affordable_amount_with_method_confirms() {
        let form = form(Some(100_000), PaymentMethod::Ovo);
        assert!(form.can_confirm(BALANCE));
        assert!(form.blockers(BALANCE).is_empty());
    }

    #[test]
    fn exact_balance_confirms() {
        let form = form(Some(50_000), PaymentMethod::Dana);
        assert!(form.can_confirm(50_000));
        assert!(!form.can_confirm(49_999));
    }

    #[test]
    fn eligibility_matches_definition_for_every_combination() {
        let amounts = std::iter::once(None).chain(WithdrawalForm::AMOUNTS.map(Some));
        for amount in amounts {
            for method in [PaymentMethod::None, PaymentMethod::Dana, PaymentMethod::Ovo] {
                for balance in [0, 5_000, 99_999, BALANCE, 200_000, u64::MAX] {
                    let form = form(amount, method);
                    let expected = amount.is_some_and(|a| balance >= a)
                        && method != PaymentMethod::None;
                    assert_eq!(
                        form.can_confirm(balance),
                        expected,
                        "amount={amount:?} method={method} balance={balance}"
                    );
                    assert_eq!(form.blockers(balance).is_empty(), expected);
                }
            }
        }
    }

    #[test]
    fn selecting_over_balance_is_allowed() {
        let mut form = WithdrawalForm::new();
        form.select_amount(200_000).unwrap();
        assert_eq!(form.amount(), Some(200_000));
        assert!(!is_affordable(200_000, BALANCE));
    }

    #[test]
    fn unknown_amount_leaves_form_unchanged() {
        let mut form = form(Some(5_000), PaymentMethod::None);
        assert_eq!(
            form.select_amount(7_500),
            Err(WithdrawalError::UnknownAmount { amount: 7_500 })
        );
        assert_eq!(form.amount(), Some(5_000));
    }

    #[test]
    fn none_method_is_rejected() {
        let mut form = form(None, PaymentMethod::Ovo);
        assert_eq!(
            form.select_method(PaymentMethod::None),
            Err(WithdrawalError::NoMethod)
        );
        assert_eq!(form.method(), PaymentMethod::Ovo);
    }

    #[test]
    fn method_can_be_changed() {
        let mut form = form(None, PaymentMethod::Dana);
        form.select_method(PaymentMethod::Ovo).unwrap();
        assert_eq!(form.method(), PaymentMethod::Ovo);
    }
}
