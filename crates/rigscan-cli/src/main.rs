//! rigscan CLI
//!
//! Collects one host inventory snapshot and prints it as JSON.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use rigscan_exec::LocalExecutor;
use rigscan_inventory::{CommandProbe, HostPlatform, SnapshotCollector};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rigscan")]
#[command(about = "Best-effort hardware and OS inventory snapshot", long_about = None)]
struct Cli {
    /// Per-command timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // Logs go to stderr; stdout carries only the snapshot document
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let platform = HostPlatform::detect();
    debug!(?platform, timeout = cli.timeout, "starting collection");

    let probe = CommandProbe::new(Arc::new(LocalExecutor::new()))
        .with_timeout(Duration::from_secs(cli.timeout));
    let collector = SnapshotCollector::new(probe, platform);

    let snapshot = collector.collect().await;

    let document = if cli.compact {
        serde_json::to_string(&snapshot)?
    } else {
        serde_json::to_string_pretty(&snapshot)?
    };
    println!("{document}");

    Ok(())
}
