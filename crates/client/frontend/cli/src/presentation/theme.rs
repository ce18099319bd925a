//! Ratatui styling for the terminal UI.
//!
//! Every color decision lives here so widgets only pick semantic styles.

use client_frontend_core::{
    message::MessageLevel,
    view_model::{AmountOption, MethodOption},
};
use game_core::{Fruit, PaymentMethod};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

/// Consistent color scheme for the CLI.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl RatatuiTheme {
    pub fn title(&self) -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn balance(&self) -> Style {
        Style::default()
            .fg(Color::LightGreen)
            .add_modifier(Modifier::BOLD)
    }

    pub fn level(&self) -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn hint(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn message(&self, level: MessageLevel) -> Style {
        let color = match level {
            MessageLevel::Info => Color::White,
            MessageLevel::Success => Color::LightGreen,
            MessageLevel::Warning => Color::Yellow,
            MessageLevel::Error => Color::LightRed,
        };
        Style::default().fg(color)
    }

    /// Disabled buttons stay visible but greyed out.
    pub fn button(&self, enabled: bool) -> Style {
        if enabled {
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightGreen)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray).bg(Color::DarkGray)
        }
    }

    /// Unaffordable amounts are dimmed; the cursor and selection stack on top.
    pub fn amount(&self, option: &AmountOption, under_cursor: bool) -> Style {
        let mut style = if option.selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        if !option.affordable {
            style = style.add_modifier(Modifier::DIM | Modifier::CROSSED_OUT);
        }
        if under_cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        style
    }

    pub fn method(&self, option: &MethodOption) -> Style {
        let brand = match option.method {
            PaymentMethod::Dana => Color::LightBlue,
            PaymentMethod::Ovo => Color::Magenta,
            PaymentMethod::None => Color::Gray,
        };
        if option.selected {
            Style::default()
                .fg(Color::White)
                .bg(brand)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(brand)
        }
    }

    /// One board cell, padded to two columns so emoji and letters align.
    pub fn fruit(&self, fruit: Fruit, ascii: bool) -> Span<'static> {
        if ascii {
            let color = match fruit {
                Fruit::Apple | Fruit::Strawberry | Fruit::Cherries => Color::LightRed,
                Fruit::Orange => Color::LightYellow,
                Fruit::Lemon | Fruit::Pineapple => Color::Yellow,
                Fruit::Watermelon => Color::LightGreen,
                Fruit::Grapes => Color::Magenta,
            };
            Span::styled(format!("{} ", fruit.letter()), Style::default().fg(color))
        } else {
            Span::raw(fruit.emoji())
        }
    }
}
