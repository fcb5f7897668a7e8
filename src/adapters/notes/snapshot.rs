//! Snapshot store
//!
//! Reads a JSON file in the payload format produced by the Apple Notes
//! dump. Useful away from macOS and for replaying a captured collection.

use super::payload::{parse_payload, NoteIndex};
use super::traits::NotesStore;
use crate::domain::{NoteAccessError, NoteId, NotesTodayError, Result};
use chrono::{DateTime, FixedOffset};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

/// Notes store backed by a JSON snapshot file
pub struct SnapshotNotesStore {
    path: PathBuf,
    index: RefCell<NoteIndex>,
}

impl SnapshotNotesStore {
    /// Creates a store reading `path`; the file is read on each listing
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            index: RefCell::new(NoteIndex::default()),
        }
    }

    /// Snapshot file location
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl NotesStore for SnapshotNotesStore {
    fn describe(&self) -> String {
        format!("snapshot {}", self.path.display())
    }

    fn list_notes(&self) -> Result<Vec<NoteId>> {
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            NotesTodayError::StoreAccess(format!(
                "Failed to read snapshot {}: {e}",
                self.path.display()
            ))
        })?;

        let index = parse_payload(&contents)?;
        let ids = index.ids().to_vec();
        *self.index.borrow_mut() = index;
        Ok(ids)
    }

    fn name(&self, id: &NoteId) -> std::result::Result<String, NoteAccessError> {
        self.index.borrow().name(id)
    }

    fn body(&self, id: &NoteId) -> std::result::Result<String, NoteAccessError> {
        self.index.borrow().body(id)
    }

    fn modification_date(
        &self,
        id: &NoteId,
    ) -> std::result::Result<DateTime<FixedOffset>, NoteAccessError> {
        self.index.borrow().modification_date(id)
    }
}
