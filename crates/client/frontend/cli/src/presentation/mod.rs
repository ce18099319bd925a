//! Terminal presentation: setup, theme, layout, and widgets.
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;
