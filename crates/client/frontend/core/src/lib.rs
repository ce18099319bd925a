//! Cross-frontend primitives for presenting the session.
//!
//! Houses message logging, event handling, currency formatting, and
//! view-model types that both the CLI and future graphical clients can reuse.
pub mod config;
pub mod event;
pub mod format;
pub mod frontend;
pub mod message;
pub mod view_model;

pub use config::{FrontendConfig, MessageConfig};
pub use event::{EventConsumer, EventImpact, describe_event};
pub use format::{format_currency, format_grouped};
pub use frontend::Frontend;
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use view_model::{AdView, AmountOption, GameView, MethodOption, ViewModel, WithdrawalView};
