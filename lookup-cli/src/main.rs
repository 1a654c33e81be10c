//! Binary crate for the `weather-lookup` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive credential configuration
//! - Hosting the widget with a stdout-backed render surface

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod surface;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
