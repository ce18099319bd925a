//! Event loop orchestrating runtime events, user input, and rendering.
//!
//! This module coordinates three main concerns:
//! - Runtime event consumption and ViewModel refreshes
//! - Keyboard input processing (intents and UI navigation)
//! - Rendering using ViewModel

use std::collections::HashMap;

use anyhow::Result;
use game_core::Screen;
use runtime::{Event as RuntimeEvent, RuntimeError, RuntimeHandle, SessionEvent, Topic};
use tokio::{
    sync::{broadcast, broadcast::error::RecvError},
    time::{self, Duration},
};

use crate::{config::CliConfig, input::InputHandler, presentation::terminal::Tui, state::AppState};
use client_frontend_core::{EventConsumer, view_model::ViewModel};

const FRAME_INTERVAL_MS: u64 = 16;

/// Event loop managing ViewModel state and coordinating UI updates.
///
/// This is the main orchestrator that:
/// - Owns the ViewModel (presentation state rebuilt from runtime queries)
/// - Lets the consumer turn runtime events into messages
/// - Handles user input and forwards intents to the runtime
pub struct EventLoop<C>
where
    C: EventConsumer,
{
    pub(crate) handle: RuntimeHandle,
    pub(crate) subscriptions: HashMap<Topic, broadcast::Receiver<RuntimeEvent>>,
    pub(crate) input: InputHandler,
    pub(crate) consumer: C,
    pub(crate) app_state: AppState,
    pub(crate) view_model: ViewModel,
    /// CLI UI configuration
    pub(crate) cli_config: CliConfig,
}

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    pub fn new(
        handle: RuntimeHandle,
        subscriptions: HashMap<Topic, broadcast::Receiver<RuntimeEvent>>,
        consumer: C,
        view_model: ViewModel,
        cli_config: CliConfig,
    ) -> Self {
        Self {
            handle,
            subscriptions,
            input: InputHandler::new(),
            consumer,
            app_state: AppState::new(),
            view_model,
            cli_config,
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<C> {
        // Initial render
        self.render(terminal)?;

        let mut session_rx = self.subscriptions.remove(&Topic::Session);
        let mut game_rx = self.subscriptions.remove(&Topic::GameScreen);
        let mut withdrawal_rx = self.subscriptions.remove(&Topic::Withdrawal);

        loop {
            let quit = tokio::select! {
                result = recv(&mut session_rx) => {
                    self.handle_runtime_event(result, terminal).await?
                }
                result = recv(&mut game_rx) => {
                    self.handle_runtime_event(result, terminal).await?
                }
                result = recv(&mut withdrawal_rx) => {
                    self.handle_runtime_event(result, terminal).await?
                }
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    self.handle_input_tick(terminal).await?
                }
            };
            if quit {
                break;
            }
        }

        Ok(self.consumer)
    }

    /// Handle runtime event and refresh the ViewModel when it matters.
    async fn handle_runtime_event(
        &mut self,
        result: Result<RuntimeEvent, RecvError>,
        terminal: &mut Tui,
    ) -> Result<bool> {
        match result {
            Ok(event) => {
                if let RuntimeEvent::Session(SessionEvent::ScreenChanged { to, .. }) = &event {
                    self.app_state.on_screen_changed(*to);
                }

                let impact = self.consumer.on_event(&event);
                if impact.requires_redraw {
                    self.refresh(terminal).await?;
                }
                Ok(false)
            }
            Err(RecvError::Closed) => {
                tracing::warn!("Event stream closed");
                Ok(true)
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!("Dropped {} stale events", skipped);
                self.refresh(terminal).await?;
                Ok(false)
            }
        }
    }

    /// Re-query the runtime and redraw.
    pub(crate) async fn refresh(&mut self, terminal: &mut Tui) -> Result<()> {
        self.view_model = fetch_view_model(&self.handle).await?;
        self.render(terminal)
    }
}

/// Builds a ViewModel from fresh runtime snapshots.
pub async fn fetch_view_model(handle: &RuntimeHandle) -> Result<ViewModel> {
    let session = handle.query_session().await?;
    let withdrawal = if session.screen == Screen::Withdrawal {
        match handle.query_withdrawal().await {
            Ok(snapshot) => Some(snapshot),
            Err(RuntimeError::WithdrawalClosed) => None,
            Err(err) => return Err(err.into()),
        }
    } else {
        None
    };
    Ok(ViewModel::new(&session, withdrawal.as_ref()))
}

/// Receives from an optional subscription; a missing one never yields.
async fn recv(
    rx: &mut Option<broadcast::Receiver<RuntimeEvent>>,
) -> Result<RuntimeEvent, RecvError> {
    match rx {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}
