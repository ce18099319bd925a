//! Upward signals emitted by the screens.
//!
//! Screens never mutate the session themselves. They describe what the user
//! asked for as an [`Intent`] and the session holder applies it through
//! [`crate::SessionState::apply`].
use crate::state::Screen;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Intent {
    /// Switch the visible screen.
    Navigate(Screen),
    /// Credit the balance by a whole amount.
    AddBalance(u64),
}
