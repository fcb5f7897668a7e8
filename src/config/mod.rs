//! Configuration management.
//!
//! TOML configuration with:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for every setting (no file is needed at all)
//! - `NOTES_TODAY_<SECTION>_<KEY>` environment overrides
//! - Validation on load
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [store]
//! kind = "apple-notes"
//!
//! [output]
//! path = "~/todays_notes.txt"
//! timestamp_format = "%-m/%-d/%Y, %-I:%M:%S %p"
//!
//! [logging]
//! local_enabled = false
//! ```
//!
//! ```rust,no_run
//! use notes_today::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("config.toml")?;
//! println!("Writing to {}", config.output.path);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;

pub use loader::{default_config_path, load_config, load_config_or_default};
pub use schema::{
    expand_home, ApplicationConfig, LoggingConfig, NotesTodayConfig, OutputConfig, StoreConfig,
    StoreKind, OUTPUT_FILE_NAME,
};
