//! rTimesheet library root.
//!
//! The calendar engine (`core`, `locale`, `models`) is pure: it turns a
//! period request into a [`models::TimesheetTable`] without touching the
//! filesystem. `config`, `export` and `cli` wrap it into the command-line tool.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod locale;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::{Path, PathBuf};

pub use crate::core::{Period, build, build_period};
pub use errors::AppError;
pub use models::{Language, TimesheetRow, TimesheetTable, Workday};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, cfg_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { force } => cli::commands::init::handle(cfg_path, *force),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, cfg_path),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg),
        Commands::Generate { .. } => cli::commands::generate::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let cfg_path = cli
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file);

    // `init` creates the file, so it must not warn about it being missing
    let cfg = match cli.command {
        Commands::Init { .. } => Config::default(),
        _ => Config::load_or_default(&cfg_path),
    };

    dispatch(&cli, &cfg, &cfg_path)
}
