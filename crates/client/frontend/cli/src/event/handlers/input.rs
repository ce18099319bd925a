//! Input handling (keyboard polling and intent dispatch).

use anyhow::Result;
use client_frontend_core::{EventConsumer, MessageEntry, MessageLevel};
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use game_core::Screen;
use runtime::{RuntimeError, WithdrawalSnapshot};
use tokio::time::Duration;

use super::super::EventLoop;
use crate::{input::KeyAction, presentation::terminal::Tui};

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    /// Poll for keyboard input and handle UI interactions.
    pub(in crate::event) async fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if !term_event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        match term_event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_press(key, terminal).await
            }
            TermEvent::Resize(_, _) => {
                self.render(terminal)?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    /// Handle key press and dispatch to the runtime or local UI state.
    ///
    /// Runtime intents do not redraw here; the resulting events do.
    pub(in crate::event) async fn handle_key_press(
        &mut self,
        key: KeyEvent,
        terminal: &mut Tui,
    ) -> Result<bool> {
        match self.input.handle_key(key, self.view_model.screen) {
            KeyAction::Quit => {
                self.consumer.message_log_mut().push_text("Quitting...");
                self.render(terminal)?;
                Ok(true)
            }
            KeyAction::WatchAd => {
                self.handle.watch_ad().await?;
                Ok(false)
            }
            KeyAction::OpenWithdrawal => {
                self.handle.navigate_to(Screen::Withdrawal).await?;
                Ok(false)
            }
            KeyAction::Back => {
                self.handle.navigate_to(Screen::Game).await?;
                Ok(false)
            }
            KeyAction::ReshuffleBoard => {
                self.handle.reshuffle_board().await?;
                Ok(false)
            }
            KeyAction::MoveCursor(movement) => {
                self.app_state.amount_cursor.move_by(movement);
                self.render(terminal)?;
                Ok(false)
            }
            KeyAction::SelectAmount => {
                let amount = self.app_state.amount_cursor.amount();
                let result = self.handle.select_amount(amount).await;
                self.report_selection(result, terminal)
            }
            KeyAction::SelectMethod(method) => {
                let result = self.handle.select_method(method).await;
                self.report_selection(result, terminal)
            }
            KeyAction::None => Ok(false),
        }
    }

    /// Rejected selections become warnings; channel failures end the loop.
    fn report_selection(
        &mut self,
        result: Result<WithdrawalSnapshot, RuntimeError>,
        terminal: &mut Tui,
    ) -> Result<bool> {
        match result {
            Ok(_) => Ok(false),
            Err(err @ (RuntimeError::Withdrawal(_) | RuntimeError::WithdrawalClosed)) => {
                tracing::warn!(error = %err, "Withdrawal selection rejected");
                self.consumer
                    .message_log_mut()
                    .push(MessageEntry::new(err.to_string(), MessageLevel::Warning));
                self.render(terminal)?;
                Ok(false)
            }
            Err(err) => Err(err.into()),
        }
    }
}
