//! Decorative fruit board.

use client_frontend_core::view_model::GameView;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, game: &GameView, ascii: bool, theme: &RatatuiTheme) {
    let lines: Vec<Line> = game
        .board
        .rows()
        .map(|row| {
            let mut spans = Vec::with_capacity(row.len() * 2);
            for (column, fruit) in row.iter().enumerate() {
                if column > 0 {
                    spans.push(Span::raw(" "));
                }
                spans.push(theme.fruit(*fruit, ascii));
            }
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Board"));

    frame.render_widget(paragraph, area);
}
