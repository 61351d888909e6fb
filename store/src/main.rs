//! GymMania progress report
//!
//! Loads the configured storage, then prints the progress summary as pretty
//! JSON. An optional `YYYY-MM-DD` argument sets the last day of the window;
//! without one the window ends today (UTC).

use anyhow::Result;
use gymmania_store::{config, state::AppState};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_tracing();

    let config = config::AppConfig::load()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if config::AppConfig::is_production() { "production" } else { "development" },
        backend = ?config.storage.backend,
        "Starting GymMania report"
    );

    let state = AppState::load(config).await?;
    let summary = match std::env::args().nth(1) {
        Some(date_key) => state.progress_summary_for(&date_key)?,
        None => state.progress_summary_today(),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);

    state.flush().await;
    info!("Report complete");
    Ok(())
}

/// Initialize tracing/logging
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config::AppConfig::is_production() {
            "gymmania_store=info".into()
        } else {
            "gymmania_store=debug,gymmania_report=debug".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config::AppConfig::is_production() {
        // JSON logging for production
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}
