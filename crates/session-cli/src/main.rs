//! session-cli - Turn session list payloads into view records

mod cli;
mod commands;
mod input;
mod logging;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use session_core::SessionsConfig;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    logging::init_logging(cli.verbose, &config.log_level);
    colored::control::set_override(cli.use_color());

    match &cli.command {
        Command::Translate { input } => commands::translate::run(&cli, &config, input.as_deref()),

        Command::List { input, size, page } => {
            commands::list::run(&cli, &config, input.as_deref(), *size, *page)
        }
    }
}

fn load_config(cli: &Cli) -> Result<SessionsConfig> {
    match &cli.config {
        Some(path) => SessionsConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(SessionsConfig::default()),
    }
}
