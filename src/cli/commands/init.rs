//! Init command implementation
//!
//! Writes a commented configuration file with the default settings.

use crate::cli::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};
use crate::config::default_config_path;
use anyhow::Context;
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Configuration file template
pub const CONFIG_TEMPLATE: &str = r#"# notes-today configuration
#
# Every setting is optional; the values below are the defaults.
# ${VAR} placeholders are replaced from the environment.

[application]
# trace, debug, info, warn, error
log_level = "info"

[store]
# "apple-notes" queries Notes.app through osascript,
# "snapshot" reads a JSON dump from snapshot_path
kind = "apple-notes"
osascript_path = "osascript"
# snapshot_path = "~/notes-snapshot.json"

[output]
# A leading ~ is your home directory. The file is replaced on every run.
path = "~/todays_notes.txt"
# chrono strftime pattern for the "Modified:" line
timestamp_format = "%-m/%-d/%Y, %-I:%M:%S %p"

[logging]
# JSON log files in addition to console output
local_enabled = false
local_path = "~/.local/state/notes-today/logs"
# daily, hourly, never
local_rotation = "daily"
"#;

/// Arguments for the init command
#[derive(Args, Debug, Clone, Default)]
pub struct InitArgs {
    /// Where to create the configuration file [default: ~/.config/notes-today/config.toml]
    #[arg(short, long)]
    pub output: Option<String>,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        let path = self
            .output
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(default_config_path);

        tracing::info!(output = %path.display(), "Initializing configuration file");

        if path.exists() && !self.force {
            println!("Configuration file already exists: {}", path.display());
            println!("   Use --force to overwrite");
            return Ok(EXIT_CONFIG_ERROR);
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        fs::write(&path, CONFIG_TEMPLATE)
            .with_context(|| format!("Failed to write configuration file {}", path.display()))?;

        println!("Configuration file created: {}", path.display());
        println!();
        println!("Next steps:");
        println!("  1. Edit {} if the defaults don't suit you", path.display());
        println!("  2. Validate configuration: notes-today validate-config");
        println!("  3. Run export: notes-today");
        Ok(EXIT_SUCCESS)
    }
}
