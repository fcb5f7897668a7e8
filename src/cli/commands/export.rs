//! Export command implementation
//!
//! Runs the export and prints progress and a final status line.

use crate::cli::{exit_code_for, EXIT_CONFIG_ERROR, EXIT_SUCCESS};
use crate::config::{NotesTodayConfig, StoreKind};
use crate::core::export::ExportCoordinator;
use clap::Args;

/// Arguments for the export command
#[derive(Args, Debug, Clone, Default)]
pub struct ExportArgs {
    /// Override the output file path
    #[arg(short, long)]
    pub output: Option<String>,

    /// Override the notes store (apple-notes or snapshot)
    #[arg(long, value_name = "KIND")]
    pub store: Option<StoreKind>,

    /// Read notes from a JSON snapshot instead of Apple Notes
    #[arg(long, value_name = "PATH")]
    pub snapshot: Option<String>,

    /// Print the export to stdout instead of writing the file
    #[arg(long)]
    pub dry_run: bool,
}

impl ExportArgs {
    /// Applies CLI overrides on top of the loaded configuration
    pub fn apply_overrides(&self, config: &mut NotesTodayConfig) {
        if let Some(output) = &self.output {
            tracing::info!(output = %output, "Overriding output path from CLI");
            config.output.path = output.clone();
        }

        if let Some(snapshot) = &self.snapshot {
            tracing::info!(snapshot = %snapshot, "Reading notes from snapshot");
            config.store.snapshot_path = Some(snapshot.clone());
            config.store.kind = StoreKind::Snapshot;
        }

        if let Some(kind) = self.store {
            config.store.kind = kind;
        }
    }

    /// Execute the export command
    pub fn execute(&self, mut config: NotesTodayConfig) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        self.apply_overrides(&mut config);

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(EXIT_CONFIG_ERROR);
        }

        let coordinator = match ExportCoordinator::from_config(&config) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to set up export");
                eprintln!("Failed to initialize export: {e}");
                return Ok(exit_code_for(&e));
            }
        };

        println!("Fetching notes from {}...", coordinator.store().describe());

        let prepared = match coordinator.prepare() {
            Ok(p) => p,
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                eprintln!("Export failed: {e}");
                return Ok(exit_code_for(&e));
            }
        };

        println!("Total notes: {}", prepared.summary.total_notes);
        println!("Found {} note(s) from today", prepared.summary.exported);
        if prepared.summary.skipped_count() > 0 {
            println!(
                "Skipped {} note(s) that could not be read",
                prepared.summary.skipped_count()
            );
        }

        if self.dry_run {
            tracing::info!("Dry run mode enabled - output file not written");
            println!();
            print!("{}", prepared.text);
            return Ok(EXIT_SUCCESS);
        }

        match coordinator.write(prepared) {
            Ok(summary) => {
                println!(
                    "Exported {} note(s) to {}",
                    summary.exported,
                    coordinator.output_path().display()
                );
                Ok(EXIT_SUCCESS)
            }
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                eprintln!("Export failed: {e}");
                Ok(exit_code_for(&e))
            }
        }
    }
}
