//! Tally Engine - Main entry point.
//!
//! Replays a JSON scenario against in-memory storage and prints the report.
//!
//! ```text
//! tally-engine [SCENARIO.json]
//! ```
//!
//! Without an argument the path comes from `TALLY_SCENARIO`.

use std::path::PathBuf;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tally_engine::scenario::{self, Scenario};
use tally_engine::{App, EngineConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = EngineConfig::from_env();

    // Logs go to stderr so stdout stays a clean JSON report.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| config.scenario_path.clone())
        .context("no scenario given: pass a path or set TALLY_SCENARIO")?;

    tracing::info!(path = %path.display(), "Replaying scenario");
    let scenario = Scenario::load(&path)
        .await
        .with_context(|| format!("loading {}", path.display()))?;

    let app = App::in_memory();
    let report = scenario::run(&app, scenario).await?;

    let accepted = report.results.iter().filter(|r| r.accepted).count();
    tracing::info!(
        results = report.results.len(),
        accepted,
        rejected = report.results.len() - accepted,
        "Scenario complete"
    );

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
