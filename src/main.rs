//! Sports-Odds Arbitrage Scanner
//!
//! Fetches bookmaker odds for upcoming sports events from The Odds API and
//! scans them for arbitrage: stake splits across bookmakers on every
//! outcome that guarantee a profit regardless of the actual result.
//!
//! ## Pipeline
//!
//! - **Fetch** current odds for the configured sport, regions and markets
//! - **Reduce** each event to the best price per outcome with the set of
//!   bookmakers offering it
//! - **Evaluate** the reciprocal-sum condition and compute the stake split
//! - **Report** the qualifying events to a JSON file

use anyhow::Result;
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use arb_scanner::config::{join_values, Config, DEFAULT_REPORT_PATH};
use arb_scanner::odds_api::OddsApiClient;
use arb_scanner::orchestrator::find_arbitrage;
use arb_scanner::report::write_report;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging with both stdout and file output
    let file_appender = tracing_appender::rolling::never(".", "info.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("arb_scanner=info".parse().unwrap());

    let stdout_layer = fmt::layer().with_writer(std::io::stdout);

    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("🎯 Sports-Odds Arbitrage Scanner");
    info!("   Sport: {}", config.sport);
    info!("   Regions: {}", join_values(&config.regions));
    info!("   Markets: {}", join_values(&config.markets));
    info!("   Odds format: {}", config.odds_format);
    info!("   Stake per event: {:.2}", config.stake);

    let client = OddsApiClient::new();
    let events = match client.fetch_odds(&config).await {
        Ok(events) => events,
        Err(e) => {
            error!("{}", e);
            return Err(e.into());
        }
    };

    let results = find_arbitrage(&events, config.stake);
    match &results {
        Some(list) => info!("💰 {} arbitrage opportunities found", list.len()),
        None => info!("No arbitrage opportunities in this batch"),
    }

    let report_path =
        std::env::var("REPORT_PATH").unwrap_or_else(|_| DEFAULT_REPORT_PATH.to_string());
    write_report(Path::new(&report_path), &results)?;

    Ok(())
}
