//! Key hints for the active screen.

use client_frontend_core::view_model::ViewModel;
use game_core::Screen;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel, theme: &RatatuiTheme) {
    let line = match view_model.screen {
        Screen::Game => Line::from(vec![
            Span::styled(" [a] Watch ad ", theme.button(view_model.game.ad.can_watch())),
            Span::raw("  "),
            Span::styled("[w] Withdraw  [r] Reshuffle  [q] Quit", theme.hint()),
        ]),
        Screen::Withdrawal => Line::from(Span::styled(
            "[arrows] Move  [enter] Pick amount  [1] DANA  [2] OVO  [esc/b] Back  [q] Quit",
            theme.hint(),
        )),
    };

    frame.render_widget(Paragraph::new(line), area);
}
