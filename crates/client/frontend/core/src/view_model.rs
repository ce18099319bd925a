//! View-model snapshots derived from runtime queries.
//!
//! The runtime answers queries with [`SessionSnapshot`] and
//! [`WithdrawalSnapshot`]. These types reshape them into what a screen draws:
//! plain numbers, per-candidate affordability, selection markers.
use game_core::{
    AdFlowState, Board, ConfirmBlocker, PaymentMethod, Screen, WithdrawalForm, is_affordable,
};
use runtime::{SessionSnapshot, WithdrawalSnapshot};

/// Everything the active screen needs for one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewModel {
    pub level: u32,
    pub balance: u64,
    pub screen: Screen,
    pub game: GameView,
    /// Present only while the withdrawal screen is shown.
    pub withdrawal: Option<WithdrawalView>,
}

impl ViewModel {
    pub fn new(session: &SessionSnapshot, withdrawal: Option<&WithdrawalSnapshot>) -> Self {
        Self {
            level: session.player.level,
            balance: session.player.balance,
            screen: session.screen,
            game: GameView::from_snapshot(session),
            withdrawal: withdrawal.map(WithdrawalView::from_snapshot),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameView {
    pub board: Board,
    pub ad: AdView,
}

impl GameView {
    fn from_snapshot(session: &SessionSnapshot) -> Self {
        Self {
            board: session.board.clone(),
            ad: AdView {
                state: session.ad_state,
                reward: session.ad_reward,
            },
        }
    }
}

/// Rewarded-ad affordance on the game screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdView {
    pub state: AdFlowState,
    pub reward: u64,
}

impl AdView {
    /// The "watch ad" button only does something while idle.
    pub fn can_watch(&self) -> bool {
        self.state == AdFlowState::Idle
    }

    pub fn is_loading(&self) -> bool {
        self.state == AdFlowState::Loading
    }

    pub fn is_rewarded(&self) -> bool {
        self.state == AdFlowState::Rewarded
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AmountOption {
    pub amount: u64,
    /// False renders the option discouraged. It stays selectable.
    pub affordable: bool,
    pub selected: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MethodOption {
    pub method: PaymentMethod,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WithdrawalView {
    pub balance: u64,
    pub amounts: Vec<AmountOption>,
    pub methods: Vec<MethodOption>,
    pub can_confirm: bool,
    pub blockers: Vec<ConfirmBlocker>,
}

impl WithdrawalView {
    pub fn from_snapshot(snapshot: &WithdrawalSnapshot) -> Self {
        let amounts = WithdrawalForm::AMOUNTS
            .iter()
            .map(|&amount| AmountOption {
                amount,
                affordable: is_affordable(amount, snapshot.balance),
                selected: snapshot.amount == Some(amount),
            })
            .collect();
        let methods = PaymentMethod::CHOICES
            .iter()
            .map(|&method| MethodOption {
                method,
                selected: snapshot.method == method,
            })
            .collect();

        Self {
            balance: snapshot.balance,
            amounts,
            methods,
            can_confirm: snapshot.can_confirm,
            blockers: snapshot.blockers.clone(),
        }
    }

    pub fn selected_amount(&self) -> Option<u64> {
        self.amounts
            .iter()
            .find(|option| option.selected)
            .map(|option| option.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{PlayerData, WithdrawalForm};
    use rand::{SeedableRng, rngs::StdRng};

    fn session(balance: u64) -> SessionSnapshot {
        SessionSnapshot {
            player: PlayerData::new(15, balance),
            screen: Screen::Withdrawal,
            ad_state: AdFlowState::Idle,
            ad_reward: 5_000,
            rewards_granted: 0,
            board: Board::generate(&mut StdRng::seed_from_u64(1)),
        }
    }

    #[test]
    fn candidates_above_balance_are_discouraged() {
        let form = WithdrawalForm::new();
        let view = WithdrawalView::from_snapshot(&WithdrawalSnapshot::capture(&form, 135_700));

        let affordable: Vec<_> = view.amounts.iter().map(|o| o.affordable).collect();
        assert_eq!(affordable, [true, true, true, true, true, false]);
        assert!(!view.can_confirm);
        assert_eq!(view.selected_amount(), None);
    }

    #[test]
    fn selection_is_marked() {
        let mut form = WithdrawalForm::new();
        form.select_amount(100_000).unwrap();
        form.select_method(PaymentMethod::Ovo).unwrap();
        let view = WithdrawalView::from_snapshot(&WithdrawalSnapshot::capture(&form, 135_700));

        assert_eq!(view.selected_amount(), Some(100_000));
        assert!(view.methods[1].selected);
        assert!(!view.methods[0].selected);
        assert!(view.can_confirm);
    }

    #[test]
    fn view_model_copies_header_and_ad_state() {
        let model = ViewModel::new(&session(140_700), None);
        assert_eq!(model.balance, 140_700);
        assert_eq!(model.level, 15);
        assert!(model.game.ad.can_watch());
        assert!(model.withdrawal.is_none());
    }
}
