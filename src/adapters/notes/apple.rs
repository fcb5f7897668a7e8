//! Apple Notes store
//!
//! Talks to Notes.app through `osascript` running JavaScript for
//! Automation. Listing fetches only ids and modification dates, in bulk.
//! Title and body are read one note at a time, on first access, so a run
//! only pays for the bodies it exports.

use super::payload::{parse_payload, NoteIndex, RawField, RawNote};
use super::traits::NotesStore;
use crate::domain::{NoteAccessError, NoteId, NotesTodayError, Result};
use chrono::{DateTime, FixedOffset};
use std::cell::RefCell;
use std::process::Command;

/// JXA script listing every note's id and modification date
///
/// Both properties are read in bulk. If the bulk date read fails, dates
/// are read per note and a failure becomes an `{"error": ...}` entry.
const LIST_NOTES_SCRIPT: &str = r#"
function field(read) {
    try {
        return { value: String(read()) };
    } catch (e) {
        return { error: String(e) };
    }
}

function run() {
    const notes = Application("Notes").notes;
    const ids = notes.id();
    let dates = null;
    try { dates = notes.modificationDate(); } catch (e) { dates = null; }
    const out = [];
    for (let i = 0; i < ids.length; i++) {
        const id = ids[i];
        out.push({
            id: id,
            modificationDate: dates
                ? field(() => dates[i].toISOString())
                : field(() => notes.byId(id).modificationDate().toISOString())
        });
    }
    return JSON.stringify(out);
}
"#;

/// JXA script reading title and body of the note whose id is `argv[0]`
const READ_NOTE_SCRIPT: &str = r#"
function field(read) {
    try {
        return { value: String(read()) };
    } catch (e) {
        return { error: String(e) };
    }
}

function run(argv) {
    const note = Application("Notes").notes.byId(argv[0]);
    return JSON.stringify({
        name: field(() => note.name()),
        body: field(() => note.body())
    });
}
"#;

/// Notes store backed by Notes.app
pub struct AppleNotesStore {
    osascript: String,
    index: RefCell<NoteIndex>,
}

impl AppleNotesStore {
    /// Creates a store that runs the given `osascript` executable
    pub fn new(osascript: impl Into<String>) -> Self {
        Self {
            osascript: osascript.into(),
            index: RefCell::new(NoteIndex::default()),
        }
    }

    fn osascript(&self, script: &str, args: &[&str]) -> Result<String> {
        let output = Command::new(&self.osascript)
            .args(["-l", "JavaScript", "-e", script])
            .args(args)
            .output()
            .map_err(|e| {
                NotesTodayError::StoreAccess(format!("Failed to run {}: {e}", self.osascript))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(NotesTodayError::StoreAccess(format!(
                "Notes.app query failed ({}): {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Reads title and body of `id` unless already known
    ///
    /// `field` names the read that triggered the fetch, for error reports.
    fn load_details(
        &self,
        id: &NoteId,
        field: &'static str,
    ) -> std::result::Result<(), NoteAccessError> {
        let source_id = {
            let index = self.index.borrow();
            if index.has_details(id)? {
                return Ok(());
            }
            match index.source_id(id)? {
                Some(source_id) => source_id.to_string(),
                None => {
                    return Err(NoteAccessError::Field {
                        id: id.clone(),
                        field,
                        message: "note has no Notes.app id".to_string(),
                    })
                }
            }
        };

        tracing::trace!(note_id = %id, "Reading note from Notes.app");
        let details = self
            .osascript(READ_NOTE_SCRIPT, &[&source_id])
            .and_then(|stdout| {
                serde_json::from_str::<RawNote>(stdout.trim()).map_err(NotesTodayError::from)
            })
            .map_err(|e| NoteAccessError::Field {
                id: id.clone(),
                field,
                message: e.to_string(),
            })?;

        let missing = || RawField::Error("missing from Notes.app response".to_string());
        self.index.borrow_mut().set_details(
            id,
            details.name.unwrap_or_else(missing),
            details.body.unwrap_or_else(missing),
        )
    }
}

impl NotesStore for AppleNotesStore {
    fn describe(&self) -> String {
        "Apple Notes".to_string()
    }

    fn list_notes(&self) -> Result<Vec<NoteId>> {
        tracing::debug!(osascript = %self.osascript, "Listing notes in Notes.app");
        let index = parse_payload(&self.osascript(LIST_NOTES_SCRIPT, &[])?)?;
        let ids = index.ids().to_vec();
        *self.index.borrow_mut() = index;
        Ok(ids)
    }

    fn name(&self, id: &NoteId) -> std::result::Result<String, NoteAccessError> {
        self.load_details(id, "name")?;
        self.index.borrow().name(id)
    }

    fn body(&self, id: &NoteId) -> std::result::Result<String, NoteAccessError> {
        self.load_details(id, "body")?;
        self.index.borrow().body(id)
    }

    fn modification_date(
        &self,
        id: &NoteId,
    ) -> std::result::Result<DateTime<FixedOffset>, NoteAccessError> {
        self.index.borrow().modification_date(id)
    }
}
