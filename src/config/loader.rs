//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::NotesTodayConfig;
use crate::domain::errors::NotesTodayError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file location, relative to the user's config directory
pub const DEFAULT_CONFIG_RELATIVE: &str = "notes-today/config.toml";

/// Returns the default configuration file path
/// (`~/.config/notes-today/config.toml` on Linux)
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_CONFIG_RELATIVE)
}

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into NotesTodayConfig
/// 4. Applies environment variable overrides (NOTES_TODAY_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns [`NotesTodayError::Configuration`] if the file is missing or
/// unreadable, a referenced environment variable is unset, parsing fails,
/// or validation fails.
///
/// # Examples
///
/// ```no_run
/// use notes_today::config::loader::load_config;
///
/// let config = load_config("config.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<NotesTodayConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(NotesTodayError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        NotesTodayError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_config(&contents)
}

/// Loads configuration, falling back to defaults when the file is absent
///
/// Only the implicit default location may be missing. When the caller named
/// a file explicitly (`explicit = true`), a missing file is an error.
pub fn load_config_or_default(path: impl AsRef<Path>, explicit: bool) -> Result<NotesTodayConfig> {
    let path = path.as_ref();
    if !explicit && !path.exists() {
        tracing::debug!(path = %path.display(), "No configuration file, using defaults");
        let mut config = NotesTodayConfig::default();
        apply_env_overrides(&mut config)?;
        validate(&config)?;
        return Ok(config);
    }
    load_config(path)
}

/// Parses configuration text (substitution, overrides, validation)
pub fn parse_config(contents: &str) -> Result<NotesTodayConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: NotesTodayConfig = toml::from_str(&contents)
        .map_err(|e| NotesTodayError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config)?;
    validate(&config)?;

    Ok(config)
}

fn validate(config: &NotesTodayConfig) -> Result<()> {
    config.validate().map_err(|e| {
        NotesTodayError::Configuration(format!("Configuration validation failed: {e}"))
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied through untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| NotesTodayError::Configuration(format!("Invalid pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(NotesTodayError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using NOTES_TODAY_* prefix
///
/// Variables follow the pattern NOTES_TODAY_<SECTION>_<KEY>, e.g.
/// NOTES_TODAY_OUTPUT_PATH or NOTES_TODAY_STORE_KIND.
fn apply_env_overrides(config: &mut NotesTodayConfig) -> Result<()> {
    if let Ok(val) = std::env::var("NOTES_TODAY_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("NOTES_TODAY_STORE_KIND") {
        config.store.kind = val.parse().map_err(NotesTodayError::Configuration)?;
    }
    if let Ok(val) = std::env::var("NOTES_TODAY_STORE_SNAPSHOT_PATH") {
        config.store.snapshot_path = Some(val);
    }
    if let Ok(val) = std::env::var("NOTES_TODAY_STORE_OSASCRIPT_PATH") {
        config.store.osascript_path = val;
    }

    if let Ok(val) = std::env::var("NOTES_TODAY_OUTPUT_PATH") {
        config.output.path = val;
    }
    if let Ok(val) = std::env::var("NOTES_TODAY_OUTPUT_TIMESTAMP_FORMAT") {
        config.output.timestamp_format = val;
    }

    if let Ok(val) = std::env::var("NOTES_TODAY_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.trim().parse().map_err(|_| {
            NotesTodayError::Configuration(format!(
                "NOTES_TODAY_LOGGING_LOCAL_ENABLED must be true or false, got '{val}'"
            ))
        })?;
    }
    if let Ok(val) = std::env::var("NOTES_TODAY_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("NOTES_TODAY_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}
