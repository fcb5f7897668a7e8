//! CLI interface and argument parsing

pub mod commands;

use crate::config::default_config_path;
use crate::domain::NotesTodayError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Export finished normally
pub const EXIT_SUCCESS: i32 = 0;
/// Configuration could not be loaded or is invalid
pub const EXIT_CONFIG_ERROR: i32 = 2;
/// Notes store could not be reached
pub const EXIT_STORE_ERROR: i32 = 4;
/// Output could not be written, or any other fatal error
pub const EXIT_FATAL: i32 = 5;

/// Exit code for a fatal error
pub fn exit_code_for(err: &NotesTodayError) -> i32 {
    match err {
        NotesTodayError::Configuration(_) => EXIT_CONFIG_ERROR,
        NotesTodayError::StoreAccess(_) => EXIT_STORE_ERROR,
        NotesTodayError::Write { .. }
        | NotesTodayError::Serialization(_)
        | NotesTodayError::Io(_) => EXIT_FATAL,
    }
}

/// Export today's notes to a text file
#[derive(Parser, Debug)]
#[command(name = "notes-today")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file [default: ~/.config/notes-today/config.toml]
    #[arg(short, long, env = "NOTES_TODAY_CONFIG", global = true)]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "NOTES_TODAY_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Subcommand to execute (export when omitted)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Configuration file to load, and whether the user named it
    pub fn config_path(&self) -> (PathBuf, bool) {
        match &self.config {
            Some(path) => (PathBuf::from(path), true),
            None => (default_config_path(), false),
        }
    }

    /// The command to run, defaulting to a plain export
    pub fn command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Export(commands::export::ExportArgs::default()))
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Export notes modified today
    Export(commands::export::ExportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
