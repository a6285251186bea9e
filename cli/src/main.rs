//! `nn-cli` entry point.

use anyhow::Result;
use clap::Parser;
use nn_cli::{cli, commands};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Default to info-level logs; override via RUST_LOG if needed. Logs go to
    // stderr so `--json` output on stdout stays parseable.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();
    commands::run(cli)
}
