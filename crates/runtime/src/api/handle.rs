//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! sending intents to the session worker or streaming events from specific
//! topics.
use tokio::sync::{broadcast, mpsc, oneshot};

use game_core::{PaymentMethod, Screen, SessionChange, WatchRequest};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::types::{SessionSnapshot, WithdrawalSnapshot};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    async fn request<T>(&self, build: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(build(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Replace the visible screen.
    pub async fn navigate_to(&self, screen: Screen) -> Result<SessionChange> {
        self.request(|reply| Command::Navigate { screen, reply }).await
    }

    /// Credit the balance directly.
    pub async fn add_balance(&self, amount: u64) -> Result<SessionChange> {
        self.request(|reply| Command::AddBalance { amount, reply }).await
    }

    /// Ask for a rewarded ad.
    ///
    /// Returns as soon as the request is accepted or ignored; the outcome
    /// arrives later on [`Topic::GameScreen`].
    pub async fn watch_ad(&self) -> Result<WatchRequest> {
        self.request(|reply| Command::WatchAd { reply }).await
    }

    /// Draw a fresh decorative board.
    pub async fn reshuffle_board(&self) -> Result<()> {
        self.request(|reply| Command::ReshuffleBoard { reply }).await
    }

    /// Pick a withdrawal amount on the open withdrawal screen.
    pub async fn select_amount(&self, amount: u64) -> Result<WithdrawalSnapshot> {
        self.request(|reply| Command::SelectAmount { amount, reply }).await?
    }

    /// Pick a payment method on the open withdrawal screen.
    pub async fn select_method(&self, method: PaymentMethod) -> Result<WithdrawalSnapshot> {
        self.request(|reply| Command::SelectMethod { method, reply }).await?
    }

    /// Query the current session (read-only snapshot)
    pub async fn query_session(&self) -> Result<SessionSnapshot> {
        self.request(|reply| Command::QuerySession { reply }).await
    }

    /// Query the withdrawal form. Fails unless the withdrawal screen is shown.
    pub async fn query_withdrawal(&self) -> Result<WithdrawalSnapshot> {
        self.request(|reply| Command::QueryWithdrawal { reply }).await?
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Session` - Screen and balance changes
    /// - `Topic::GameScreen` - Ad flow transitions, rewards, failures
    /// - `Topic::Withdrawal` - Form opened and selection changes
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use runtime::Topic;
    ///
    /// let mut session_rx = handle.subscribe(Topic::Session);
    /// while let Ok(event) = session_rx.recv().await {
    ///     // Redraw header
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    ///
    /// Returns a map of topic to receiver for each requested topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> std::collections::HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }
}
