//! rattendance library root.
//! Exposes the CLI parser, the high-level run() function and the roster,
//! session and attendance-log components used by it.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::PathBuf;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cli, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::Import { .. } => cli::commands::import::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Mark { .. } => cli::commands::mark::handle(&cli.command, cfg),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
    }
}

/// Path of the configuration file in use (`--config` or the standard one).
pub fn config_path(cli: &Cli) -> PathBuf {
    cli.config
        .as_ref()
        .map(|c| utils::path::expand_tilde(c))
        .unwrap_or_else(Config::config_file)
}

/// Load the configuration once and apply command-line overrides.
pub fn resolve_config(cli: &Cli) -> AppResult<Config> {
    let mut cfg = Config::load_from(&config_path(cli))?;

    if let Some(db) = &cli.db {
        cfg.database = db.clone();
    }
    if let Some(roster) = &cli.roster {
        cfg.roster_file = roster.clone();
    }
    if let Some(log) = &cli.log {
        cfg.attendance_log = log.clone();
    }
    if let Some(backend) = cli.backend {
        cfg.roster_backend = backend;
    }

    Ok(cfg)
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let cfg = resolve_config(&cli)?;
    dispatch(&cli, &cfg)
}
