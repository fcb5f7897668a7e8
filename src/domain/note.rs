//! Note identifiers and records

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a note inside a notes store
///
/// Opaque to the exporter: Apple Notes hands out `x-coredata://` URLs, a
/// snapshot file may use anything. Only used to address per-field reads.
///
/// # Examples
///
/// ```
/// use notes_today::domain::NoteId;
///
/// let id = NoteId::from("x-coredata://ABC/ICNote/p42");
/// assert_eq!(id.as_str(), "x-coredata://ABC/ICNote/p42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Returns the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for NoteId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for NoteId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for NoteId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One note as read from the store
///
/// Only lives for the duration of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRecord {
    /// Note title (`name` in Apple Notes)
    pub title: String,

    /// Full note body, verbatim
    pub body: String,

    /// Last modification instant
    pub modified_at: DateTime<FixedOffset>,
}

impl NoteRecord {
    /// Creates a new record
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        modified_at: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            modified_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_id_display() {
        let id = NoteId::from("note-1".to_string());
        assert_eq!(id.to_string(), "note-1");
        assert_eq!(id.clone().into_inner(), "note-1");
    }

    #[test]
    fn test_note_id_serde_transparent() {
        let id: NoteId = serde_json::from_str("\"note-7\"").unwrap();
        assert_eq!(id, NoteId::from("note-7"));
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"note-7\"");
    }

    #[test]
    fn test_note_record_new() {
        let ts = DateTime::parse_from_rfc3339("2026-10-18T09:30:00+02:00").unwrap();
        let note = NoteRecord::new("Grocery List", "milk\neggs", ts);
        assert_eq!(note.title, "Grocery List");
        assert_eq!(note.body, "milk\neggs");
        assert_eq!(note.modified_at, ts);
    }
}
