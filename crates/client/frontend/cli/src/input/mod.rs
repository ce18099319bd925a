//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent};
use game_core::{PaymentMethod, Screen};

use crate::state::CursorMove;

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Ask the runtime for a rewarded ad.
    WatchAd,
    /// Switch to the withdrawal screen.
    OpenWithdrawal,
    /// Resample the decorative board.
    ReshuffleBoard,
    /// Leave the withdrawal screen.
    Back,
    /// Move the amount cursor.
    MoveCursor(CursorMove),
    /// Select the amount under the cursor.
    SelectAmount,
    SelectMethod(PaymentMethod),
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into commands for the active screen.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent, screen: Screen) -> KeyAction {
        if let KeyCode::Char(ch) = key.code {
            if ch.eq_ignore_ascii_case(&'q') {
                return KeyAction::Quit;
            }
        }

        match screen {
            Screen::Game => Self::game_key(key.code),
            Screen::Withdrawal => Self::withdrawal_key(key.code),
        }
    }

    fn game_key(code: KeyCode) -> KeyAction {
        match code {
            KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
                'a' => KeyAction::WatchAd,
                'w' => KeyAction::OpenWithdrawal,
                'r' => KeyAction::ReshuffleBoard,
                _ => KeyAction::None,
            },
            _ => KeyAction::None,
        }
    }

    fn withdrawal_key(code: KeyCode) -> KeyAction {
        match code {
            KeyCode::Left => KeyAction::MoveCursor(CursorMove::Left),
            KeyCode::Right => KeyAction::MoveCursor(CursorMove::Right),
            KeyCode::Up => KeyAction::MoveCursor(CursorMove::Up),
            KeyCode::Down => KeyAction::MoveCursor(CursorMove::Down),
            KeyCode::Enter | KeyCode::Char(' ') => KeyAction::SelectAmount,
            KeyCode::Esc => KeyAction::Back,
            KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
                '1' => KeyAction::SelectMethod(PaymentMethod::Dana),
                '2' => KeyAction::SelectMethod(PaymentMethod::Ovo),
                'b' => KeyAction::Back,
                _ => KeyAction::None,
            },
            _ => KeyAction::None,
        }
    }
}
