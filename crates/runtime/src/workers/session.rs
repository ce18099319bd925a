//! Session worker that owns the authoritative [`game_core::SessionState`].
//!
//! Receives commands from [`crate::RuntimeHandle`], drives the game screen's
//! [`game_core::RewardFlow`] and the withdrawal form, and publishes events to
//! the EventBus. Ad provider calls and the reward dwell timer run as spawned
//! tasks that post their results back over an internal channel, so every
//! state transition happens on this task.

use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info, warn};

use game_core::{
    AdFlowState, AdSettlement, AdTicket, GameScreen, Intent, PaymentMethod, Screen,
    SessionChange, SessionState, Settled, WatchRequest, WithdrawalError, WithdrawalScreen,
};

use crate::api::{AdError, AdProvider, Result, RuntimeError};
use crate::events::{EventBus, GameScreenEvent, SessionEvent, WithdrawalEvent};
use crate::types::{SessionSnapshot, WithdrawalSnapshot};

/// Commands that can be sent to the session worker
pub enum Command {
    /// Replace the visible screen.
    Navigate {
        screen: Screen,
        reply: oneshot::Sender<SessionChange>,
    },
    /// Credit the balance.
    AddBalance {
        amount: u64,
        reply: oneshot::Sender<SessionChange>,
    },
    /// Start a rewarded ad if the flow is idle.
    WatchAd {
        reply: oneshot::Sender<WatchRequest>,
    },
    /// Resample the decorative board.
    ReshuffleBoard { reply: oneshot::Sender<()> },
    /// Pick an amount on the open withdrawal form.
    SelectAmount {
        amount: u64,
        reply: oneshot::Sender<Result<WithdrawalSnapshot>>,
    },
    /// Pick a payment method on the open withdrawal form.
    SelectMethod {
        method: PaymentMethod,
        reply: oneshot::Sender<Result<WithdrawalSnapshot>>,
    },
    /// Query the session (read-only).
    QuerySession {
        reply: oneshot::Sender<SessionSnapshot>,
    },
    /// Query the withdrawal form (read-only).
    QueryWithdrawal {
        reply: oneshot::Sender<Result<WithdrawalSnapshot>>,
    },
}

/// Results posted back by tasks the worker spawned.
enum FlowMessage {
    Settled {
        ticket: AdTicket,
        settlement: AdSettlement,
    },
    DwellElapsed {
        ticket: AdTicket,
    },
}

/// Background task that processes session commands.
pub struct SessionWorker {
    session: SessionState,
    game: GameScreen,
    /// Present only while the withdrawal screen is shown.
    withdrawal: Option<WithdrawalScreen>,
    rng: StdRng,
    reward_dwell: Duration,
    ad_timeout: Option<Duration>,
    provider: Arc<dyn AdProvider>,
    command_rx: mpsc::Receiver<Command>,
    flow_tx: mpsc::UnboundedSender<FlowMessage>,
    flow_rx: mpsc::UnboundedReceiver<FlowMessage>,
    event_bus: EventBus,
}

/// Timing knobs the worker needs from [`crate::RuntimeConfig`].
pub struct WorkerTiming {
    pub reward_dwell: Duration,
    pub ad_timeout: Option<Duration>,
}

impl SessionWorker {
    /// Creates a new session worker.
    pub fn new(
        session: SessionState,
        game: GameScreen,
        rng: StdRng,
        timing: WorkerTiming,
        provider: Arc<dyn AdProvider>,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
    ) -> Self {
        info!(
            level = session.player.level,
            balance = session.player.balance,
            screen = %session.screen,
            "SessionWorker initialized"
        );

        let (flow_tx, flow_rx) = mpsc::unbounded_channel();
        let withdrawal = (session.screen == Screen::Withdrawal).then(WithdrawalScreen::new);

        Self {
            session,
            game,
            withdrawal,
            rng,
            reward_dwell: timing.reward_dwell,
            ad_timeout: timing.ad_timeout,
            provider,
            command_rx,
            flow_tx,
            flow_rx,
            event_bus,
        }
    }

    /// Main worker loop. Exits once every handle is dropped.
    pub async fn run(mut self) {
        loop {
            tokio::select! {
                cmd = self.command_rx.recv() => match cmd {
                    Some(cmd) => self.handle_command(cmd),
                    None => break,
                },
                Some(message) = self.flow_rx.recv() => {
                    self.handle_flow(message);
                }
            }
        }
        debug!("SessionWorker stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Navigate { screen, reply } => {
                let change = self.apply(Intent::Navigate(screen));
                if reply.send(change).is_err() {
                    debug!("Navigate reply channel closed (caller dropped)");
                }
            }
            Command::AddBalance { amount, reply } => {
                let change = self.apply(Intent::AddBalance(amount));
                if reply.send(change).is_err() {
                    debug!("AddBalance reply channel closed (caller dropped)");
                }
            }
            Command::WatchAd { reply } => {
                let request = self.watch_ad();
                if reply.send(request).is_err() {
                    debug!("WatchAd reply channel closed (caller dropped)");
                }
            }
            Command::ReshuffleBoard { reply } => {
                self.game.reshuffle(&mut self.rng);
                self.event_bus.publish(GameScreenEvent::BoardReshuffled);
                if reply.send(()).is_err() {
                    debug!("ReshuffleBoard reply channel closed (caller dropped)");
                }
            }
            Command::SelectAmount { amount, reply } => {
                let result = self.update_withdrawal(|screen| screen.form.select_amount(amount));
                if reply.send(result).is_err() {
                    debug!("SelectAmount reply channel closed (caller dropped)");
                }
            }
            Command::SelectMethod { method, reply } => {
                let result = self.update_withdrawal(|screen| screen.form.select_method(method));
                if reply.send(result).is_err() {
                    debug!("SelectMethod reply channel closed (caller dropped)");
                }
            }
            Command::QuerySession { reply } => {
                if reply.send(self.session_snapshot()).is_err() {
                    debug!("QuerySession reply channel closed (caller dropped)");
                }
            }
            Command::QueryWithdrawal { reply } => {
                let result = self.withdrawal_snapshot();
                if reply.send(result).is_err() {
                    debug!("QueryWithdrawal reply channel closed (caller dropped)");
                }
            }
        }
    }

    /// Applies an intent to the session and publishes what it changed.
    fn apply(&mut self, intent: Intent) -> SessionChange {
        let change = self.session.apply(intent);
        match change {
            SessionChange::Screen { from, to } => self.on_screen_changed(from, to),
            SessionChange::Balance(balance) => {
                self.event_bus.publish(SessionEvent::BalanceChanged {
                    previous: balance.previous,
                    current: balance.current,
                });
            }
            SessionChange::Unchanged => debug!(?intent, "Intent left the session unchanged"),
        }
        change
    }

    fn on_screen_changed(&mut self, from: Screen, to: Screen) {
        match (from, to) {
            (Screen::Withdrawal, Screen::Withdrawal) => {}
            (_, Screen::Withdrawal) => {
                self.withdrawal = Some(WithdrawalScreen::new());
                self.event_bus.publish(WithdrawalEvent::Opened);
            }
            _ => self.withdrawal = None,
        }

        debug!(%from, %to, "Screen changed");
        self.event_bus.publish(SessionEvent::ScreenChanged { from, to });

        // Coming back to the game screen deals a new board.
        if from != Screen::Game && to == Screen::Game {
            self.game.reshuffle(&mut self.rng);
            self.event_bus.publish(GameScreenEvent::BoardReshuffled);
        }
    }

    fn watch_ad(&mut self) -> WatchRequest {
        let request = self.game.flow.request_watch();
        match request {
            WatchRequest::Started(ticket) => {
                info!(%ticket, "Ad requested");
                self.event_bus.publish(GameScreenEvent::AdStateChanged {
                    ticket,
                    from: AdFlowState::Idle,
                    to: AdFlowState::Loading,
                });
                self.spawn_ad(ticket);
            }
            WatchRequest::Ignored(state) => {
                debug!(%state, "Ignoring watch request while busy");
                self.event_bus.publish(GameScreenEvent::WatchIgnored { state });
            }
        }
        request
    }

    fn spawn_ad(&self, ticket: AdTicket) {
        let provider = Arc::clone(&self.provider);
        let timeout = self.ad_timeout;
        let flow_tx = self.flow_tx.clone();

        tokio::spawn(async move {
            let settlement = match show_ad(provider, timeout).await {
                Ok(granted) => AdSettlement::from_provider(granted),
                Err(err) => {
                    error!(%ticket, error = %err, "Ad failed to show");
                    AdSettlement::Failed {
                        reason: err.to_string(),
                    }
                }
            };
            if flow_tx.send(FlowMessage::Settled { ticket, settlement }).is_err() {
                debug!(%ticket, "Session worker gone before ad settled");
            }
        });
    }

    fn spawn_dwell(&self, ticket: AdTicket) {
        let dwell = self.reward_dwell;
        let flow_tx = self.flow_tx.clone();

        tokio::spawn(async move {
            tokio::time::sleep(dwell).await;
            if flow_tx.send(FlowMessage::DwellElapsed { ticket }).is_err() {
                debug!(%ticket, "Session worker gone before dwell elapsed");
            }
        });
    }

    fn handle_flow(&mut self, message: FlowMessage) {
        match message {
            FlowMessage::Settled { ticket, settlement } => self.settle(ticket, settlement),
            FlowMessage::DwellElapsed { ticket } => match self.game.flow.dwell_elapsed(ticket) {
                Ok(()) => {
                    self.event_bus.publish(GameScreenEvent::AdStateChanged {
                        ticket,
                        from: AdFlowState::Rewarded,
                        to: AdFlowState::Idle,
                    });
                }
                Err(err) => warn!(error = %err, "Discarding dwell timer"),
            },
        }
    }

    fn settle(&mut self, ticket: AdTicket, settlement: AdSettlement) {
        match self.game.flow.settle(ticket, &settlement) {
            Ok(Settled::Reward { amount }) => {
                self.event_bus.publish(GameScreenEvent::AdStateChanged {
                    ticket,
                    from: AdFlowState::Loading,
                    to: AdFlowState::Rewarded,
                });
                self.apply(Intent::AddBalance(amount));
                let balance = self.session.balance();
                info!(%ticket, amount, balance, "Ad reward granted");
                self.event_bus.publish(GameScreenEvent::RewardGranted {
                    ticket,
                    amount,
                    balance,
                });
                self.spawn_dwell(ticket);
            }
            Ok(Settled::NoReward) => {
                self.event_bus.publish(GameScreenEvent::AdStateChanged {
                    ticket,
                    from: AdFlowState::Loading,
                    to: AdFlowState::Idle,
                });
                match settlement {
                    AdSettlement::Failed { reason } => {
                        self.event_bus.publish(GameScreenEvent::AdFailed { ticket, reason });
                    }
                    _ => info!(%ticket, "Ad closed without reward"),
                }
            }
            Err(err) => warn!(
                error = %err,
                current = ?self.game.flow.current_ticket(),
                "Discarding ad settlement"
            ),
        }
    }

    fn update_withdrawal(
        &mut self,
        update: impl FnOnce(&mut WithdrawalScreen) -> std::result::Result<(), WithdrawalError>,
    ) -> Result<WithdrawalSnapshot> {
        let screen = self
            .withdrawal
            .as_mut()
            .ok_or(RuntimeError::WithdrawalClosed)?;
        update(screen)?;

        let snapshot = WithdrawalSnapshot::capture(&screen.form, self.session.balance());
        self.event_bus.publish(WithdrawalEvent::SelectionChanged {
            amount: snapshot.amount,
            method: snapshot.method,
            can_confirm: snapshot.can_confirm,
        });
        Ok(snapshot)
    }

    fn withdrawal_snapshot(&self) -> Result<WithdrawalSnapshot> {
        self.withdrawal
            .as_ref()
            .map(|screen| WithdrawalSnapshot::capture(&screen.form, self.session.balance()))
            .ok_or(RuntimeError::WithdrawalClosed)
    }

    fn session_snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            player: self.session.player,
            screen: self.session.screen,
            ad_state: self.game.flow.state(),
            ad_reward: self.game.flow.reward(),
            rewards_granted: self.game.flow.rewards_granted(),
            board: self.game.board.clone(),
        }
    }
}

async fn show_ad(
    provider: Arc<dyn AdProvider>,
    timeout: Option<Duration>,
) -> std::result::Result<bool, AdError> {
    match timeout {
        Some(after) => tokio::time::timeout(after, provider.show_rewarded_ad())
            .await
            .unwrap_or(Err(AdError::TimedOut { after })),
        None => provider.show_rewarded_ad().await,
    }
}
