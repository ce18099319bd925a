//! Top-level client orchestrating the Runtime and Frontend layers.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Runtime (session holder, reward flow, withdrawal form)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! The frontend only ever talks to the runtime through a `RuntimeHandle`.

mod builder;
pub mod config;

pub use builder::ClientBuilder;
pub use config::SimulatedAdConfig;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. `Client::builder()` collects an already-built runtime and a frontend
/// 2. `Client::run()` transfers control to the frontend until the user quits
/// 3. On frontend exit the runtime is shut down and its worker joined
pub struct Client {
    runtime: runtime::Runtime,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the frontend to completion, then stop the runtime.
    ///
    /// The frontend's error, if any, wins over a shutdown error.
    pub async fn run(self) -> Result<()> {
        let Client {
            runtime,
            mut frontend,
        } = self;

        let frontend_result = frontend.run(runtime.handle()).await;
        // Handles held by the frontend must be gone before the worker can stop.
        drop(frontend);

        let shutdown_result = runtime.shutdown().await;
        if let Err(e) = &shutdown_result {
            tracing::error!("Runtime shutdown error: {}", e);
        }

        frontend_result?;
        shutdown_result?;
        Ok(())
    }
}
