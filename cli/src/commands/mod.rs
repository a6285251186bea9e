//! Command handlers, one module per command group.

/// `articles ...`
pub mod articles;
/// `categories ...`
pub mod categories;
/// `init` and `reset`.
pub mod init;
/// `stats`.
pub mod stats;

use anyhow::Result;

use crate::{
    cli::{Cli, Commands},
    store::open_store,
};

/// Opens the store under `--data-dir` and runs the parsed command.
pub fn run(cli: Cli) -> Result<()> {
    let store = open_store(&cli.data_dir)?;
    let json = cli.json;

    match cli.command {
        Commands::Init => init::run(&store, json),
        Commands::Reset => init::reset(&store),
        Commands::Stats => stats::run(&store, json),
        Commands::Categories {
            command,
        } => categories::run(&store, command, json),
        Commands::Articles {
            command,
        } => articles::run(&store, command, json),
    }
}
