//! Maintains the CLI message log in response to runtime events.
use runtime::{Event, GameScreenEvent};

use client_frontend_core::{
    MessageConfig,
    event::{EventConsumer, EventImpact, describe_event},
    message::MessageLog,
};

pub struct CliEventConsumer {
    log: MessageLog,
    config: MessageConfig,
}

impl CliEventConsumer {
    pub fn new(log: MessageLog, config: MessageConfig) -> Self {
        Self { log, config }
    }
}

impl EventConsumer for CliEventConsumer {
    fn on_event(&mut self, event: &Event) -> EventImpact {
        if let Event::GameScreen(GameScreenEvent::WatchIgnored { .. }) = event {
            // Nothing on screen changes; only the optional message does.
            if !self.config.show_ignored_watch {
                return EventImpact::none();
            }
        }

        if let Some(entry) = describe_event(event) {
            self.log.push(entry);
        }
        EventImpact::redraw()
    }

    fn message_log(&self) -> &MessageLog {
        &self.log
    }

    fn message_log_mut(&mut self) -> &mut MessageLog {
        &mut self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::AdFlowState;
    use runtime::SessionEvent;

    fn consumer(show_ignored_watch: bool) -> CliEventConsumer {
        CliEventConsumer::new(
            MessageLog::new(8),
            MessageConfig {
                capacity: 8,
                show_ignored_watch,
            },
        )
    }

    #[test]
    fn ignored_watch_is_silent_by_default() {
        let mut consumer = consumer(false);
        let impact = consumer.on_event(&Event::GameScreen(GameScreenEvent::WatchIgnored {
            state: AdFlowState::Loading,
        }));

        assert!(!impact.requires_redraw);
        assert!(consumer.message_log().is_empty());
    }

    #[test]
    fn ignored_watch_can_be_shown() {
        let mut consumer = consumer(true);
        consumer.on_event(&Event::GameScreen(GameScreenEvent::WatchIgnored {
            state: AdFlowState::Rewarded,
        }));
        assert_eq!(consumer.message_log().len(), 1);
    }

    #[test]
    fn balance_changes_are_logged_and_redrawn() {
        let mut consumer = consumer(false);
        let impact = consumer.on_event(&Event::Session(SessionEvent::BalanceChanged {
            previous: 135_700,
            current: 140_700,
        }));

        assert!(impact.requires_redraw);
        let entry = consumer.message_log().iter().next().unwrap();
        assert_eq!(entry.text, "Balance Rp 135.700 -> Rp 140.700");
    }
}
