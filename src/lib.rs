// notes-today - export the notes you touched today
// Copyright (c) 2026 Notes Today Contributors
// Licensed under the MIT License

//! # notes-today
//!
//! Collects the notes you modified today from Apple Notes and writes them,
//! oldest first, to `~/todays_notes.txt`.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - The export pipeline (today window, rendering, writing)
//! - [`adapters`] - Notes stores (Apple Notes via `osascript`, JSON snapshots)
//! - [`domain`] - Note records and error types
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use notes_today::config::NotesTodayConfig;
//! use notes_today::core::export::ExportCoordinator;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = NotesTodayConfig::default();
//!     let coordinator = ExportCoordinator::from_config(&config)?;
//!     let summary = coordinator.run()?;
//!
//!     println!("Exported {} notes", summary.exported);
//!     Ok(())
//! }
//! ```
//!
//! ## Failure model
//!
//! A note that can't be read is skipped and counted in
//! [`ExportSummary::skipped`](core::export::ExportSummary::skipped). Failing
//! to reach the notes store, or to write the output file, aborts the run
//! with a [`domain::NotesTodayError`].
//!
//! ## Testing with your own store
//!
//! The exporter takes its store and clock as arguments, so anything
//! implementing [`adapters::notes::NotesStore`] can be plugged in:
//!
//! ```rust,no_run
//! use chrono::DateTime;
//! use notes_today::adapters::notes::SnapshotNotesStore;
//! use notes_today::core::export::ExportCoordinator;
//! use notes_today::core::render::Renderer;
//! use notes_today::core::window::FixedClock;
//!
//! # fn example() -> notes_today::domain::Result<()> {
//! let now = DateTime::parse_from_rfc3339("2026-10-18T18:00:00+02:00").unwrap();
//! let coordinator = ExportCoordinator::new(
//!     SnapshotNotesStore::new("notes.json"),
//!     FixedClock::new(now),
//!     Renderer::new("%Y-%m-%d %H:%M:%S")?,
//!     "todays_notes.txt",
//! );
//! let summary = coordinator.run()?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
