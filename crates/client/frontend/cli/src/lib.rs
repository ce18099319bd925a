//! Terminal UI frontend for Fruit Cash.
//!
//! This crate provides a terminal-based user interface for the session.
//! It implements the `client_frontend_core::Frontend` trait for pure UI
//! rendering.
//!
//! # Architecture
//!
//! CliFrontend is a pure UI layer that:
//! - Receives a RuntimeHandle for communication
//! - Does NOT own the Runtime
//! - Subscribes to events and sends intents via the handle

mod app;
mod config;
mod event;
mod input;
pub mod logging;
pub mod presentation;
mod state;

pub use app::CliFrontend;
pub use config::{CliConfig, UiConfig};

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
