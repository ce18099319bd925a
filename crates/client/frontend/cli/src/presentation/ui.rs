//! UI rendering entry point.
//!
//! Composes the widgets for the active screen. The holder shows exactly one
//! screen at a time; the ad overlay sits on top of the game screen while an
//! attempt is running or its reward banner is up.
use anyhow::Result;
use game_core::Screen;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    config::UiConfig,
    presentation::{terminal::Tui, theme::RatatuiTheme, widgets},
    state::AppState,
};
use client_frontend_core::{message::MessageLog, view_model::ViewModel};

/// Rendering context containing all state and configuration needed for UI rendering.
pub struct RenderContext<'a> {
    pub view_model: &'a ViewModel,
    pub messages: &'a MessageLog,
    pub app_state: &'a AppState,
    pub ui: &'a UiConfig,
}

pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    terminal.draw(|frame| draw(frame, ctx))?;
    Ok(())
}

/// Draws one frame. Backend-agnostic so tests can use `TestBackend`.
pub fn draw(frame: &mut Frame, ctx: &RenderContext) {
    let theme = RatatuiTheme;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                           // Header
            Constraint::Min(0),                              // Screen body
            Constraint::Length(ctx.ui.message_panel_height), // Messages
            Constraint::Length(2),                           // Footer
        ])
        .split(frame.area());

    let view_model = ctx.view_model;
    widgets::header::render(frame, chunks[0], view_model, &theme);

    match view_model.screen {
        Screen::Game => {
            widgets::board::render(
                frame,
                chunks[1],
                &view_model.game,
                ctx.ui.ascii_board,
                &theme,
            );
            if !view_model.game.ad.can_watch() {
                let area = centered_rect(60, 50, chunks[1]);
                widgets::ad_overlay::render(frame, area, &view_model.game.ad, &theme);
            }
        }
        Screen::Withdrawal => match &view_model.withdrawal {
            Some(withdrawal) => widgets::withdrawal::render(
                frame,
                chunks[1],
                withdrawal,
                &ctx.app_state.amount_cursor,
                &theme,
            ),
            None => {
                let placeholder = Paragraph::new("Opening withdrawal...")
                    .alignment(Alignment::Center)
                    .block(Block::default().borders(Borders::ALL));
                frame.render_widget(placeholder, chunks[1]);
            }
        },
    }

    widgets::messages::render(frame, chunks[2], ctx.messages, &theme);
    widgets::footer::render(frame, chunks[3], view_model, &theme);
}

/// Create a centered rectangle for modal overlays.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
