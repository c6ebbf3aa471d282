mod analytics;
mod cli;
mod config;
mod history;
mod models;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Loading config")?;

    match cli.command {
        Commands::Stats { file, as_of, all } => {
            handlers::handle_stats(&config, file, as_of.as_deref(), all)?;
        }
        Commands::Export { file, as_of, all } => {
            handlers::handle_export(&config, file, as_of.as_deref(), all)?;
        }
        Commands::Check { file, as_of } => {
            handlers::handle_check(&config, file, as_of.as_deref())?;
        }
    }

    Ok(())
}
