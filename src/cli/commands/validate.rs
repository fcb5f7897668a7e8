//! Validate config command implementation

use crate::cli::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};
use crate::config::{NotesTodayConfig, StoreKind};
use crate::domain::Result;
use clap::Args;
use std::path::Path;

/// Arguments for the validate-config command
#[derive(Args, Debug, Clone, Default)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    ///
    /// `loaded` is the outcome of loading `config_path` at startup.
    pub fn execute(&self, config_path: &Path, loaded: Result<NotesTodayConfig>) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path.display(), "Validating configuration");

        println!("Validating configuration: {}", config_path.display());
        if !config_path.exists() {
            println!("  (file not found, built-in defaults apply)");
        }

        let config = match loaded {
            Ok(c) => c,
            Err(e) => {
                println!("Configuration is invalid");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        let output = match config.output.resolved_path() {
            Ok(p) => p,
            Err(e) => {
                println!("Configuration is invalid");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        println!("Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        match config.store.kind {
            StoreKind::AppleNotes => {
                println!("  Store: Apple Notes (via {})", config.store.osascript_path)
            }
            StoreKind::Snapshot => println!(
                "  Store: snapshot {}",
                config.store.snapshot_path.as_deref().unwrap_or_default()
            ),
        }
        println!("  Output: {}", output.display());
        println!("  Timestamp Format: {}", config.output.timestamp_format);
        println!(
            "  File Logging: {}",
            if config.logging.local_enabled {
                config.logging.local_path.as_str()
            } else {
                "disabled"
            }
        );

        Ok(EXIT_SUCCESS)
    }
}
