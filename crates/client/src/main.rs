//! Fruit Cash client binary.
//!
//! Composition root that assembles:
//! 1. Runtime (session holder and reward flow) via `Runtime::builder()`
//! 2. Frontend (UI) - CLI for now
//!
//! ```bash
//! cargo run -p fruit-cash-client
//! AD_SIMULATED_REWARD=false cargo run -p fruit-cash-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, etc.)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use fruit_cash_client::{Client, SimulatedAdConfig};
    use runtime::{Runtime, RuntimeConfig};

    // 1. Load configuration from environment
    let runtime_config = RuntimeConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();
    let ad_config = SimulatedAdConfig::from_env();

    // 2. Setup logging
    let session_id = std::env::var("SESSION_ID").ok();
    logging::init(session_id.as_deref())?;

    tracing::info!("Starting Fruit Cash client");
    tracing::info!(
        reward = runtime_config.game_config.ad_reward,
        ad_delay_ms = ad_config.delay.as_millis() as u64,
        ad_grants = ad_config.grant,
        "Runtime configuration loaded"
    );

    // 3. Build Runtime (independent layer)
    let runtime = Runtime::builder()
        .config(runtime_config)
        .ad_provider(ad_config.provider())
        .build()
        .await?;

    // 4. Build Frontend and compose
    let frontend = CliFrontend::new(frontend_config, cli_config);
    let client = Client::builder()
        .runtime(runtime)
        .frontend(frontend)
        .build()?;

    tracing::info!("Client assembled, starting...");
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
