//! High-level runtime orchestrator.
//!
//! The runtime owns the session worker, wires up command/event channels, and
//! exposes a builder-based API for clients to drive the session.

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use game_core::{GameScreen, SessionState};

use crate::api::{AdProvider, Result, RuntimeError, RuntimeHandle, SimulatedAdProvider};
use crate::config::RuntimeConfig;
use crate::events::EventBus;
use crate::workers::{Command, SessionWorker, WorkerTiming};

/// Main runtime that orchestrates the session
///
/// Design: Runtime owns workers and coordinates execution.
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    // Shared handle (can be cloned for clients)
    handle: RuntimeHandle,

    // Background workers
    session_worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Build a runtime with the simulated ad provider and return its handle.
    ///
    /// The worker keeps running until every clone of the handle is dropped.
    pub async fn start(config: RuntimeConfig) -> Result<RuntimeHandle> {
        let runtime = Self::builder().config(config).build().await?;
        Ok(runtime.handle())
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Shutdown the runtime gracefully
    ///
    /// Waits for the worker, so every other handle clone must be dropped first.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.session_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;

        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    session: Option<SessionState>,
    ad_provider: Option<Arc<dyn AdProvider>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            session: None,
            ad_provider: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide initial session state instead of the configured defaults
    pub fn initial_session(mut self, session: SessionState) -> Self {
        self.session = Some(session);
        self
    }

    /// Set the ad provider (defaults to [`SimulatedAdProvider`])
    pub fn ad_provider(mut self, provider: impl AdProvider + 'static) -> Self {
        self.ad_provider = Some(Arc::new(provider));
        self
    }

    /// Build the runtime
    pub async fn build(self) -> Result<Runtime> {
        let config = self.config;
        let session = self
            .session
            .unwrap_or_else(|| SessionState::from_config(&config.game_config));
        let provider = self
            .ad_provider
            .unwrap_or_else(|| Arc::new(SimulatedAdProvider::default()) as Arc<dyn AdProvider>);

        let mut rng = match config.board_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let game = GameScreen::new(&config.game_config, &mut rng);

        let (command_tx, command_rx) = mpsc::channel::<Command>(config.command_buffer_size.max(1));
        let event_bus = EventBus::with_capacity(config.event_buffer_size);

        let handle = RuntimeHandle::new(command_tx, event_bus.clone());

        let session_worker = SessionWorker::new(
            session,
            game,
            rng,
            WorkerTiming {
                reward_dwell: config.reward_dwell(),
                ad_timeout: config.ad_timeout,
            },
            provider,
            command_rx,
            event_bus,
        );

        let session_worker_handle = tokio::spawn(async move {
            session_worker.run().await;
        });

        Ok(Runtime {
            handle,
            session_worker_handle,
        })
    }
}
