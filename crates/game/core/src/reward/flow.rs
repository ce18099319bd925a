use std::fmt;

use super::FlowError;

/// Where the rewarded-ad flow currently is.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum AdFlowState {
    /// Waiting for the player to ask for an ad.
    #[default]
    Idle,
    /// An ad attempt is outstanding with the provider.
    Loading,
    /// A reward was just granted; the banner is on display.
    Rewarded,
}

/// Identifies one ad attempt. Minted on every `Idle -> Loading` transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdTicket(pub u64);

impl fmt::Display for AdTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ad#{}", self.0)
    }
}

/// How an ad attempt ended, as reported by the provider.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AdSettlement {
    /// The player watched to the end.
    Rewarded,
    /// The player closed the ad early.
    Declined,
    /// The provider could not show the ad.
    Failed { reason: String },
}

impl AdSettlement {
    pub fn from_provider(granted: bool) -> Self {
        if granted {
            Self::Rewarded
        } else {
            Self::Declined
        }
    }
}

/// Answer to a "watch ad" request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WatchRequest {
    /// The flow moved to `Loading`; the caller must start the provider call.
    Started(AdTicket),
    /// The flow was busy; nothing changed.
    Ignored(AdFlowState),
}

/// Result of a successful settlement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Settled {
    /// Now `Rewarded`. The caller credits `amount` once and starts the dwell timer.
    Reward { amount: u64 },
    /// Back to `Idle` with nothing granted.
    NoReward,
}

/// Rewarded-ad state machine: `Idle -> Loading -> (Rewarded ->) Idle`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RewardFlow {
    state: AdFlowState,
    reward: u64,
    next_ticket: u64,
    current: Option<AdTicket>,
    granted: u64,
}

impl RewardFlow {
    pub fn new(reward: u64) -> Self {
        Self {
            state: AdFlowState::Idle,
            reward,
            next_ticket: 0,
            current: None,
            granted: 0,
        }
    }

    pub fn state(&self) -> AdFlowState {
        self.state
    }

    /// Amount credited per completed ad.
    pub fn reward(&self) -> u64 {
        self.reward
    }

    /// The attempt that is loading or whose banner is showing.
    pub fn current_ticket(&self) -> Option<AdTicket> {
        self.current
    }

    /// Number of rewards granted by this flow so far.
    pub fn rewards_granted(&self) -> u64 {
        self.granted
    }

    pub fn is_idle(&self) -> bool {
        self.state == AdFlowState::Idle
    }

    /// Handles the player's "watch ad" intent. Only honoured while idle.
    pub fn request_watch(&mut self) -> WatchRequest {
        if self.state != AdFlowState::Idle {
            return WatchRequest::Ignored(self.state);
        }
        let ticket = AdTicket(self.next_ticket);
        self.next_ticket += 1;
        self.current = Some(ticket);
        self.state = AdFlowState::Loading;
        WatchRequest::Started(ticket)
    }

    /// Applies the provider's answer for `ticket`.
    pub fn settle(
        &mut self,
        ticket: AdTicket,
        settlement: &AdSettlement,
    ) -> Result<Settled, FlowError> {
        if self.state != AdFlowState::Loading {
            return Err(FlowError::NotLoading {
                ticket,
                state: self.state,
            });
        }
        self.check_ticket(ticket)?;

        match settlement {
            AdSettlement::Rewarded => {
                self.state = AdFlowState::Rewarded;
                self.granted += 1;
                Ok(Settled::Reward {
                    amount: self.reward,
                })
            }
            AdSettlement::Declined | AdSettlement::Failed { .. } => {
                self.state = AdFlowState::Idle;
                self.current = None;
                Ok(Settled::NoReward)
            }
        }
    }

    /// Ends the reward banner for `ticket` and returns to idle.
    pub fn dwell_elapsed(&mut self, ticket: AdTicket) -> Result<(), FlowError> {
        if self.state != AdFlowState::Rewarded {
            return Err(FlowError::NotRewarded {
                ticket,
                state: self.state,
            });
        }
        self.check_ticket(ticket)?;
        self.state = AdFlowState::Idle;
        self.current = None;
        Ok(())
    }

    fn check_ticket(&self, received: AdTicket) -> Result<(), FlowError> {
        match self.current {
            Some(expected) if expected == received => Ok(()),
            Some(expected) => Err(FlowError::StaleTicket { expected, received }),
            // Loading and Rewarded always carry a ticket.
            None => Err(FlowError::NotLoading {
                ticket: received,
                state: self.state,
            }),
        }
    }
}
