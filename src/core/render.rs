//! Text rendering of exported notes
//!
//! Each note becomes one block:
//!
//! ```text
//! === Note 1 ===
//! Modified: 10/18/2026, 9:05:03 AM
//! Title: Grocery List
//! ---
//! milk
//! eggs
//!
//!
//! ```
//!
//! The body is copied verbatim and followed by three newlines.

use crate::domain::{NoteRecord, NotesTodayError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{Local, TimeZone};
use std::fmt::Write;

/// Separator written after every body
pub const BLOCK_SEPARATOR: &str = "\n\n\n";

/// Renders notes into the export text
#[derive(Debug, Clone)]
pub struct Renderer {
    timestamp_format: String,
}

impl Renderer {
    /// Creates a renderer using a strftime pattern for the `Modified:` line
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the pattern is not valid strftime.
    pub fn new(timestamp_format: impl Into<String>) -> Result<Self> {
        let timestamp_format = timestamp_format.into();
        if StrftimeItems::new(&timestamp_format).any(|item| matches!(item, Item::Error)) {
            return Err(NotesTodayError::Configuration(format!(
                "Invalid timestamp format '{timestamp_format}'"
            )));
        }
        Ok(Self { timestamp_format })
    }

    /// Renders notes in the order given, timestamps in the local zone
    pub fn render(&self, notes: &[NoteRecord]) -> String {
        self.render_in(notes, &Local)
    }

    /// Renders notes with timestamps shown in `tz`
    pub fn render_in<Tz>(&self, notes: &[NoteRecord], tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let mut out = String::new();
        for (i, note) in notes.iter().enumerate() {
            self.render_block(&mut out, i + 1, note, tz);
        }
        out
    }

    fn render_block<Tz>(&self, out: &mut String, sequence: usize, note: &NoteRecord, tz: &Tz)
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let modified = note
            .modified_at
            .with_timezone(tz)
            .format(&self.timestamp_format);

        // writing to a String can't fail
        let _ = writeln!(out, "=== Note {sequence} ===");
        let _ = writeln!(out, "Modified: {modified}");
        let _ = writeln!(out, "Title: {}", note.title);
        out.push_str("---\n");
        out.push_str(&note.body);
        out.push_str(BLOCK_SEPARATOR);
    }
}
