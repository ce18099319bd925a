//! Recent message panel.

use client_frontend_core::message::MessageLog;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, messages: &MessageLog, theme: &RatatuiTheme) {
    let visible = area.height.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = messages
        .recent(visible)
        .map(|entry| Line::from(Span::styled(entry.text.clone(), theme.message(entry.level))))
        .collect();
    // Oldest at the top.
    lines.reverse();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Messages"));
    frame.render_widget(paragraph, area);
}
