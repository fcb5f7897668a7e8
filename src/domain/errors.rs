//! Domain error types
//!
//! Two tiers: [`NotesTodayError`] aborts a run, [`NoteAccessError`] only
//! ever causes a single note to be skipped.

use super::note::NoteId;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type
///
/// Every variant is fatal for the run that produced it.
#[derive(Debug, Error)]
pub enum NotesTodayError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The notes store could not be reached or enumerated
    #[error("Notes store error: {0}")]
    StoreAccess(String),

    /// The output file could not be opened, truncated or written
    #[error("Failed to write {}: {message}", .path.display())]
    Write { path: PathBuf, message: String },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl NotesTodayError {
    /// Builds a write failure for `path`
    pub fn write(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        NotesTodayError::Write {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

/// Per-note read failure
///
/// Raised by a [`NotesStore`](crate::adapters::notes::NotesStore) when a
/// single field of a single note can't be read. The exporter records it and
/// moves on to the next note.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteAccessError {
    /// The store has no note with this id
    #[error("note {0} not found")]
    NotFound(NoteId),

    /// The store refused or failed to return a field
    #[error("failed to read {field} of note {id}: {message}")]
    Field {
        id: NoteId,
        field: &'static str,
        message: String,
    },

    /// The modification date could not be parsed
    #[error("note {id} has an unparseable modification date '{value}'")]
    InvalidTimestamp { id: NoteId, value: String },
}

impl NoteAccessError {
    /// Id of the note that failed
    pub fn note_id(&self) -> &NoteId {
        match self {
            NoteAccessError::NotFound(id) => id,
            NoteAccessError::Field { id, .. } => id,
            NoteAccessError::InvalidTimestamp { id, .. } => id,
        }
    }
}

impl From<std::io::Error> for NotesTodayError {
    fn from(err: std::io::Error) -> Self {
        NotesTodayError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for NotesTodayError {
    fn from(err: serde_json::Error) -> Self {
        NotesTodayError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for NotesTodayError {
    fn from(err: toml::de::Error) -> Self {
        NotesTodayError::Configuration(format!("TOML parse error: {err}"))
    }
}
