//! FitTrack - Fitness Tracker Summaries
//!
//! Main entry point: loads the configuration and prints one summary per
//! configured package.

use anyhow::Context;
use fittrack::runner::Runner;
use fittrack::storage::config::load_config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only summaries
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting FitTrack v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config().context("failed to load configuration")?;

    let runner = Runner::new(config.output.format, config.batch.on_failure);
    let stdout = std::io::stdout();
    let report = runner
        .run(&config.packages, stdout.lock())
        .context("batch aborted")?;

    if !report.is_complete() {
        tracing::warn!("{} package(s) skipped", report.failures.len());
    }

    Ok(())
}
