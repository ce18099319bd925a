//! Runtime orchestration for the Fruit Cash session.
//!
//! This crate wires together the ad provider abstraction, the session worker,
//! and the topic-based event bus into a cohesive runtime API. Consumers embed
//! [`Runtime`] to start a session, subscribe to events, and send intents
//! through [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`workers`] keeps background tasks internal to the crate
pub mod api;
pub mod config;
pub mod events;
pub mod runtime;
pub mod types;

mod workers;

pub use api::{AdError, AdProvider, Result, RuntimeError, RuntimeHandle, SimulatedAdProvider};
pub use config::RuntimeConfig;
pub use events::{Event, EventBus, GameScreenEvent, SessionEvent, Topic, WithdrawalEvent};
pub use runtime::{Runtime, RuntimeBuilder};
pub use types::{SessionSnapshot, WithdrawalSnapshot};
