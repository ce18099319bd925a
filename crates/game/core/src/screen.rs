//! Per-screen state owned alongside the session.
use rand::Rng;

use crate::board::Board;
use crate::config::GameConfig;
use crate::reward::RewardFlow;
use crate::withdrawal::WithdrawalForm;

/// Game screen: decorative board plus the rewarded-ad flow.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameScreen {
    pub board: Board,
    pub flow: RewardFlow,
}

impl GameScreen {
    pub fn new<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        Self {
            board: Board::generate(rng),
            flow: RewardFlow::new(config.ad_reward),
        }
    }

    /// Replaces the board with a fresh sample. The ad flow is untouched.
    pub fn reshuffle<R: Rng>(&mut self, rng: &mut R) {
        self.board = Board::generate(rng);
    }
}

/// Withdrawal screen. Recreated each time the screen is entered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WithdrawalScreen {
    pub form: WithdrawalForm,
}

impl WithdrawalScreen {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reward::{AdFlowState, AdSettlement, WatchRequest};
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn reshuffle_keeps_flow_state() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut screen = GameScreen::new(&GameConfig::default(), &mut rng);
        let WatchRequest::Started(ticket) = screen.flow.request_watch() else {
            panic!("fresh flow must accept a watch request");
        };

        screen.reshuffle(&mut rng);
        assert_eq!(screen.flow.state(), AdFlowState::Loading);
        screen.flow.settle(ticket, &AdSettlement::Declined).unwrap();
        assert!(screen.flow.is_idle());
    }

    #[test]
    fn flow_uses_configured_reward() {
        let config = GameConfig::default().with_ad_reward(750);
        let screen = GameScreen::new(&config, &mut StdRng::seed_from_u64(0));
        assert_eq!(screen.flow.reward(), 750);
    }
}
