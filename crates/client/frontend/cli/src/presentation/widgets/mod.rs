//! Widgets composing the terminal UI.
pub mod ad_overlay;
pub mod board;
pub mod footer;
pub mod header;
pub mod messages;
pub mod withdrawal;
