//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::broadcast;

use super::types::{GameScreenEvent, SessionEvent, WithdrawalEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Screen and balance changes
    Session,
    /// Ad flow and board events
    GameScreen,
    /// Withdrawal form events
    Withdrawal,
}

impl Topic {
    pub const ALL: [Topic; 3] = [Topic::Session, Topic::GameScreen, Topic::Withdrawal];
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    Session(SessionEvent),
    GameScreen(GameScreenEvent),
    Withdrawal(WithdrawalEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Session(_) => Topic::Session,
            Event::GameScreen(_) => Topic::GameScreen,
            Event::Withdrawal(_) => Topic::Withdrawal,
        }
    }
}

impl From<SessionEvent> for Event {
    fn from(event: SessionEvent) -> Self {
        Event::Session(event)
    }
}

impl From<GameScreenEvent> for Event {
    fn from(event: GameScreenEvent) -> Self {
        Event::GameScreen(event)
    }
}

impl From<WithdrawalEvent> for Event {
    fn from(event: WithdrawalEvent) -> Self {
        Event::Withdrawal(event)
    }
}

struct Channels {
    session: broadcast::Sender<Event>,
    game_screen: broadcast::Sender<Event>,
    withdrawal: broadcast::Sender<Event>,
}

impl Channels {
    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Session => &self.session,
            Topic::GameScreen => &self.game_screen,
            Topic::Withdrawal => &self.withdrawal,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Channels are created up front, one per topic.
#[derive(Clone)]
pub struct EventBus {
    channels: Arc<Channels>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            channels: Arc::new(Channels {
                session: broadcast::channel(capacity).0,
                game_screen: broadcast::channel(capacity).0,
                withdrawal: broadcast::channel(capacity).0,
            }),
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: impl Into<Event>) {
        let event = event.into();
        let topic = event.topic();
        if self.channels.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.channels.sender(topic).subscribe()
    }

    /// Subscribe to multiple topics
    ///
    /// Returns receivers for each requested topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Screen;

    #[tokio::test]
    async fn events_only_reach_their_topic() {
        let bus = EventBus::new();
        let mut session_rx = bus.subscribe(Topic::Session);
        let mut game_rx = bus.subscribe(Topic::GameScreen);

        bus.publish(SessionEvent::ScreenChanged {
            from: Screen::Game,
            to: Screen::Withdrawal,
        });

        let event = session_rx.recv().await.unwrap();
        assert_eq!(event.topic(), Topic::Session);
        assert!(game_rx.try_recv().is_err());
    }

    #[test]
    fn publish_without_subscribers_is_fine() {
        let bus = EventBus::with_capacity(0);
        bus.publish(GameScreenEvent::BoardReshuffled);
    }

    #[test]
    fn subscribe_multiple_covers_requested_topics() {
        let bus = EventBus::new();
        let subs = bus.subscribe_multiple(&Topic::ALL);
        assert_eq!(subs.len(), 3);
    }
}
