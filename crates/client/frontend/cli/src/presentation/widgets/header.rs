//! Header widget displaying level, balance, and the active screen.

use client_frontend_core::{format::format_currency, view_model::ViewModel};
use game_core::Screen;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel, theme: &RatatuiTheme) {
    let title = match view_model.screen {
        Screen::Game => "Fruit Cash",
        Screen::Withdrawal => "Cash Withdrawal",
    };

    let text = Line::from(vec![
        Span::styled(format!("Level {}", view_model.level), theme.level()),
        Span::raw(" | Balance: "),
        Span::styled(format_currency(view_model.balance), theme.balance()),
    ]);

    let paragraph = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(title, theme.title())),
    );

    frame.render_widget(paragraph, area);
}
