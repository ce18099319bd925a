//! Utilities for reacting to runtime events inside UI layers.
use game_core::AdFlowState;
use runtime::{Event, GameScreenEvent, SessionEvent, WithdrawalEvent};

use crate::format::format_currency;
use crate::message::{MessageEntry, MessageLevel, MessageLog};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventImpact {
    pub requires_redraw: bool,
}

impl EventImpact {
    pub const fn none() -> Self {
        Self {
            requires_redraw: false,
        }
    }

    pub const fn redraw() -> Self {
        Self {
            requires_redraw: true,
        }
    }

    pub fn combine(self, other: Self) -> Self {
        Self {
            requires_redraw: self.requires_redraw || other.requires_redraw,
        }
    }
}

pub trait EventConsumer {
    fn on_event(&mut self, event: &Event) -> EventImpact;
    fn message_log(&self) -> &MessageLog;
    fn message_log_mut(&mut self) -> &mut MessageLog;
}

/// Player-facing message for `event`, if it deserves one.
///
/// Screen changes and withdrawal selection changes are visible on their own
/// and produce nothing.
pub fn describe_event(event: &Event) -> Option<MessageEntry> {
    match event {
        Event::Session(SessionEvent::BalanceChanged { previous, current }) => {
            Some(MessageEntry::info(format!(
                "Balance {} -> {}",
                format_currency(*previous),
                format_currency(*current)
            )))
        }
        Event::Session(SessionEvent::ScreenChanged { .. }) => None,
        Event::GameScreen(event) => describe_game_screen(event),
        Event::Withdrawal(WithdrawalEvent::Opened) => Some(MessageEntry::info(
            "Pick an amount and a payment method",
        )),
        Event::Withdrawal(WithdrawalEvent::SelectionChanged { .. }) => None,
    }
}

fn describe_game_screen(event: &GameScreenEvent) -> Option<MessageEntry> {
    match event {
        GameScreenEvent::AdStateChanged {
            to: AdFlowState::Loading,
            ..
        } => Some(MessageEntry::info("Loading ad...")),
        GameScreenEvent::AdStateChanged { .. } => None,
        GameScreenEvent::WatchIgnored { state } => Some(MessageEntry::new(
            format!("Ad already in progress ({state})"),
            MessageLevel::Warning,
        )),
        GameScreenEvent::RewardGranted { amount, .. } => Some(MessageEntry::new(
            format!("Ad finished! You received {}", format_currency(*amount)),
            MessageLevel::Success,
        )),
        GameScreenEvent::AdFailed { reason, .. } => Some(MessageEntry::new(
            format!("Ad failed to show: {reason}"),
            MessageLevel::Error,
        )),
        GameScreenEvent::BoardReshuffled => Some(MessageEntry::info("Board reshuffled")),
    }
}
