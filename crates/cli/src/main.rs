//! BTC price oracle - command-line entry point
//!
//! Exit codes:
//!   0 - The requested price was produced
//!   1 - All sources failed, the named source was not found, or any other error

mod cli;

use std::fmt::{self, Write as _};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use cli::{Args, OutputMode};
use oracle_core::{AggregationReport, FetchConfig};
use oracle_price_feed::{PriceAggregator, SourceRegistry};

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_logging(&args);

    info!("Starting btc-price v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout carries only the requested value
fn init_logging(args: &Args) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.default_log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

async fn run(args: Args) -> Result<()> {
    let config = FetchConfig {
        request_timeout_ms: args.timeout_ms,
        ..FetchConfig::default()
    };

    match args.output_mode() {
        OutputMode::ListSources => {
            print!("{}", render_sources(&SourceRegistry::builtin())?);
        }
        OutputMode::Average => {
            let aggregator = PriceAggregator::new(config)?;
            println!("{}", aggregator.average().await?);
        }
        OutputMode::Source(name) => {
            let aggregator = PriceAggregator::new(config)?;
            println!("{}", aggregator.source_price(&name).await?);
        }
        OutputMode::Json => {
            let report = PriceAggregator::new(config)?.aggregate().await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputMode::Summary => {
            let report = PriceAggregator::new(config)?.aggregate().await?;
            print!("{}", render_summary(&report)?);
        }
    }

    Ok(())
}

fn render_sources(registry: &SourceRegistry) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for source in registry.iter() {
        writeln!(out, "{:<14} {}  [{}]", source.name(), source.endpoint(), source.extractor)?;
    }
    Ok(out)
}

fn render_summary(report: &AggregationReport) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(out, "BTC/USD average: ${:.2}", report.average)?;
    writeln!(
        out,
        "Range: ${:.2} - ${:.2} (spread ${:.2}, {}%)",
        report.min, report.max, report.spread, report.spread_percent
    )?;
    writeln!(out, "Sources: {}/{}", report.sources, report.total_sources)?;

    for point in &report.prices {
        writeln!(out, "  {:<14} ${}", point.name, point.price.normalize())?;
    }
    for failure in &report.failures {
        writeln!(out, "  {:<14} failed: {}", failure.name, failure.reason)?;
    }

    Ok(out)
}
