//! Glue code tying the runtime handle and the terminal UI together.
use anyhow::Result;
use async_trait::async_trait;

use runtime::{RuntimeHandle, Topic};

use crate::config::CliConfig;
use crate::event::{CliEventConsumer, EventLoop, fetch_view_model};
use crate::presentation::terminal;
use client_frontend_core::{
    FrontendConfig, event::EventConsumer, format::format_currency, frontend::Frontend,
    message::MessageLog,
};

/// Terminal frontend. Owns no runtime; drives the session through a handle.
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
        tracing::info!("CLI frontend starting...");

        // Subscribe before the first query so no event falls between them.
        let subscriptions = handle.subscribe_multiple(&Topic::ALL);
        let view_model = fetch_view_model(&handle).await?;

        let mut messages = MessageLog::new(self.frontend_config.messages.capacity);
        messages.push_text(format!(
            "Welcome to Fruit Cash! Level {} with {}.",
            view_model.level,
            format_currency(view_model.balance)
        ));

        let consumer = CliEventConsumer::new(messages, self.frontend_config.messages.clone());
        let event_loop = EventLoop::new(
            handle,
            subscriptions,
            consumer,
            view_model,
            self.cli_config.clone(),
        );

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let consumer = event_loop.run(&mut terminal).await?;

        terminal::restore()?;
        tracing::info!(
            messages = consumer.message_log().len(),
            "CLI frontend exiting"
        );

        Ok(())
    }
}
