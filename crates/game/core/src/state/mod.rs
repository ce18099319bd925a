//! Authoritative session state representation.
//!
//! This module owns the data the session holder is responsible for: the
//! player's level and balance, and which screen is on display. Runtime layers
//! clone or query this state but mutate it exclusively through
//! [`SessionState::apply`].
mod player;
mod screen;
mod session;

pub use player::PlayerData;
pub use screen::Screen;
pub use session::{BalanceChange, SessionChange, SessionState};
