// notes-today - export the notes you touched today
// Copyright (c) 2026 Notes Today Contributors
// Licensed under the MIT License

use clap::Parser;
use notes_today::cli::{Cli, Commands, EXIT_CONFIG_ERROR, EXIT_FATAL};
use notes_today::config::{load_config_or_default, LoggingConfig, NotesTodayConfig};
use notes_today::domain::Result;
use notes_today::logging::init_logging;
use std::path::Path;
use std::process;

fn main() {
    // Optional; a missing .env is ignored
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let (config_path, explicit) = cli.config_path();
    let loaded = load_config_or_default(&config_path, explicit);

    let logging_config = loaded
        .as_ref()
        .map(|c| c.logging.clone())
        .unwrap_or_else(|_| LoggingConfig::default());
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| loaded.as_ref().ok().map(|c| c.application.log_level.clone()))
        .unwrap_or_else(|| "info".to_string());

    let guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(EXIT_CONFIG_ERROR);
        }
    };

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "notes-today");

    let exit_code = match execute_command(&cli, &config_path, loaded) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "Command execution failed");
            eprintln!("Error: {e:#}");
            EXIT_FATAL
        }
    };

    // flush file logs before exiting
    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
fn execute_command(
    cli: &Cli,
    config_path: &Path,
    loaded: Result<NotesTodayConfig>,
) -> anyhow::Result<i32> {
    match cli.command() {
        Commands::Export(args) => match loaded {
            Ok(config) => args.execute(config),
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("{e}");
                Ok(EXIT_CONFIG_ERROR)
            }
        },
        Commands::ValidateConfig(args) => args.execute(config_path, loaded),
        Commands::Init(args) => args.execute(),
    }
}
