//! hrecon library root.
//! Exposes the CLI parser, the high-level run() function, and the internal
//! modules (core reconciliation logic, tabular I/O, config).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod tables;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Compare { .. } => cli::commands::compare::handle(&cli.command, cfg),
        Commands::Merge { .. } => cli::commands::merge::handle(&cli.command, cfg),
        Commands::Clean { .. } => cli::commands::clean::handle(&cli.command, cfg),
        Commands::Config { .. } => {
            cli::commands::config::handle(&cli.command, cfg, cli.config.as_deref())
        }
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load the config once; --config overrides the standard location.
    let cfg = Config::load(cli.config.as_deref())?;

    dispatch(&cli, &cfg)
}
