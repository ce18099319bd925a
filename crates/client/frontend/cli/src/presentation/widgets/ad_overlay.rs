//! Modal shown over the board while an ad is loading or a reward is displayed.

use client_frontend_core::{format::format_currency, view_model::AdView};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, ad: &AdView, theme: &RatatuiTheme) {
    let lines = if ad.is_rewarded() {
        vec![
            Line::from(Span::styled("Reward received!", theme.title())),
            Line::from(""),
            Line::from(Span::styled(
                format!("You earned {}", format_currency(ad.reward)),
                theme.balance(),
            )),
        ]
    } else if ad.is_loading() {
        vec![
            Line::from(Span::styled("Showing ad...", theme.title())),
            Line::from(""),
            Line::from("Watch to the end to earn a reward!"),
        ]
    } else {
        return;
    };

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
