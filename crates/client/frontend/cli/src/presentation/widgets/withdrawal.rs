//! Withdrawal form: balance, amount grid, payment methods, confirm affordance.
//!
//! Confirming does nothing beyond showing whether it would be allowed.

use client_frontend_core::{format::format_currency, view_model::WithdrawalView};
use game_core::ConfirmBlocker;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{presentation::theme::RatatuiTheme, state::AmountCursor};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    view: &WithdrawalView,
    cursor: &AmountCursor,
    theme: &RatatuiTheme,
) {
    let block = Block::default().borders(Borders::ALL).title("Withdraw");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Balance
            Constraint::Length(4), // Amounts
            Constraint::Length(3), // Methods
            Constraint::Length(2), // Confirm
            Constraint::Min(0),    // Blockers
        ])
        .split(inner);

    let balance = Paragraph::new(vec![
        Line::from("Current balance"),
        Line::from(Span::styled(format_currency(view.balance), theme.balance())),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(balance, chunks[0]);

    frame.render_widget(amount_grid(view, cursor, theme), chunks[1]);
    frame.render_widget(methods(view, theme), chunks[2]);

    let confirm = Paragraph::new(Line::from(Span::styled(
        "  Confirm withdrawal  ",
        theme.button(view.can_confirm),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(confirm, chunks[3]);

    let reasons: Vec<Line> = view
        .blockers
        .iter()
        .map(|blocker| Line::from(Span::styled(describe_blocker(blocker), theme.hint())))
        .collect();
    frame.render_widget(
        Paragraph::new(reasons).alignment(Alignment::Center),
        chunks[4],
    );
}

fn amount_grid<'a>(
    view: &WithdrawalView,
    cursor: &AmountCursor,
    theme: &RatatuiTheme,
) -> Paragraph<'a> {
    let mut lines = vec![Line::from("Choose an amount")];
    for (row_index, row) in view.amounts.chunks(AmountCursor::COLUMNS).enumerate() {
        let mut spans = Vec::with_capacity(row.len() * 2);
        for (column, option) in row.iter().enumerate() {
            let index = row_index * AmountCursor::COLUMNS + column;
            let label = format!(" {:>12} ", format_currency(option.amount));
            spans.push(Span::styled(
                label,
                theme.amount(option, index == cursor.index()),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }
    Paragraph::new(lines).alignment(Alignment::Center)
}

fn methods<'a>(view: &WithdrawalView, theme: &RatatuiTheme) -> Paragraph<'a> {
    let mut spans = Vec::with_capacity(view.methods.len() * 2);
    for (index, option) in view.methods.iter().enumerate() {
        spans.push(Span::styled(
            format!(" [{}] {} ", index + 1, option.method),
            theme.method(option),
        ));
        spans.push(Span::raw("   "));
    }
    Paragraph::new(vec![Line::from("Payment method"), Line::from(spans)])
        .alignment(Alignment::Center)
}

/// Short reason shown under a disabled confirm button.
pub fn describe_blocker(blocker: &ConfirmBlocker) -> String {
    match blocker {
        ConfirmBlocker::AmountNotSelected => "Select an amount".to_string(),
        ConfirmBlocker::MethodNotSelected => "Select a payment method".to_string(),
        ConfirmBlocker::InsufficientBalance { balance, amount } => format!(
            "Balance {} is below {}",
            format_currency(*balance),
            format_currency(*amount)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_balance_names_both_amounts() {
        let text = describe_blocker(&ConfirmBlocker::InsufficientBalance {
            balance: 135_700,
            amount: 200_000,
        });
        assert_eq!(text, "Balance Rp 135.700 is below Rp 200.000");
    }
}
