//! Configuration schema types

use crate::core::render::Renderer;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the file written into the home directory
pub const OUTPUT_FILE_NAME: &str = "todays_notes.txt";

/// Which notes store to read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StoreKind {
    /// Apple Notes, queried through `osascript`
    #[default]
    AppleNotes,
    /// A JSON snapshot file in the same payload format
    Snapshot,
}

impl std::str::FromStr for StoreKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "apple-notes" | "apple_notes" | "notes" => Ok(StoreKind::AppleNotes),
            "snapshot" => Ok(StoreKind::Snapshot),
            _ => Err(format!(
                "Invalid store kind '{s}'. Must be one of: apple-notes, snapshot"
            )),
        }
    }
}

/// Root configuration
///
/// Every section has defaults, so an empty file (or no file at all) yields
/// the stock behavior: read Apple Notes, write `~/todays_notes.txt`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotesTodayConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Notes store selection
    #[serde(default)]
    pub store: StoreConfig,

    /// Output file settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl NotesTodayConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.store.validate()?;
        self.output.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Notes store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store implementation
    #[serde(default)]
    pub kind: StoreKind,

    /// Snapshot file (required if kind = "snapshot")
    #[serde(default)]
    pub snapshot_path: Option<String>,

    /// `osascript` executable used to talk to Apple Notes
    #[serde(default = "default_osascript_path")]
    pub osascript_path: String,
}

impl StoreConfig {
    fn validate(&self) -> Result<(), String> {
        match self.kind {
            StoreKind::Snapshot => match self.snapshot_path.as_deref() {
                Some(p) if !p.trim().is_empty() => Ok(()),
                _ => Err(
                    "store.snapshot_path is required when store.kind = 'snapshot'".to_string(),
                ),
            },
            StoreKind::AppleNotes => {
                if self.osascript_path.trim().is_empty() {
                    return Err("store.osascript_path cannot be empty".to_string());
                }
                Ok(())
            }
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            kind: StoreKind::default(),
            snapshot_path: None,
            osascript_path: default_osascript_path(),
        }
    }
}

/// Output file configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output file path; a leading `~` is the home directory
    #[serde(default = "default_output_path")]
    pub path: String,

    /// strftime pattern for the `Modified:` line
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

impl OutputConfig {
    fn validate(&self) -> Result<(), String> {
        if self.path.trim().is_empty() {
            return Err("output.path cannot be empty".to_string());
        }

        if self.timestamp_format.is_empty() {
            return Err("output.timestamp_format cannot be empty".to_string());
        }
        Renderer::new(self.timestamp_format.as_str()).map_err(|_| {
            format!(
                "Invalid output.timestamp_format '{}'",
                self.timestamp_format
            )
        })?;

        Ok(())
    }

    /// Resolves [`path`](Self::path) against the home directory
    pub fn resolved_path(&self) -> Result<PathBuf, String> {
        expand_home(&self.path)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            timestamp_format: default_timestamp_format(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

/// Expands a leading `~` to the invoking user's home directory
///
/// Paths without a leading `~` are returned unchanged.
pub fn expand_home(path: &str) -> Result<PathBuf, String> {
    let rest = if path == "~" {
        ""
    } else if let Some(rest) = path.strip_prefix("~/") {
        rest
    } else {
        return Ok(PathBuf::from(path));
    };

    let home = dirs::home_dir().ok_or_else(|| "Could not determine home directory".to_string())?;
    if rest.is_empty() {
        Ok(home)
    } else {
        Ok(home.join(Path::new(rest)))
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_osascript_path() -> String {
    "osascript".to_string()
}

fn default_output_path() -> String {
    format!("~/{OUTPUT_FILE_NAME}")
}

fn default_timestamp_format() -> String {
    // en-US Date.toLocaleString(), e.g. "10/18/2026, 9:05:03 AM"
    "%-m/%-d/%Y, %-I:%M:%S %p".to_string()
}

fn default_local_path() -> String {
    "~/.local/state/notes-today/logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
