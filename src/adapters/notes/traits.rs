//! Notes store trait definition
//!
//! The exporter only needs two capabilities from a notes store: enumerate
//! every note, and read the fields of one note. Each field read can fail on
//! its own so that one locked or damaged note never takes the run down.

use crate::domain::{NoteAccessError, NoteId, Result};
use chrono::{DateTime, FixedOffset};

/// Read-only access to a collection of notes
///
/// # Example
///
/// ```no_run
/// use notes_today::adapters::notes::{AppleNotesStore, NotesStore};
///
/// # fn example() -> notes_today::domain::Result<()> {
/// let store = AppleNotesStore::new("osascript");
/// for id in store.list_notes()? {
///     match store.name(&id) {
///         Ok(name) => println!("{name}"),
///         Err(e) => eprintln!("skipping: {e}"),
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub trait NotesStore {
    /// Short human-readable name of the store, used in logs
    fn describe(&self) -> String;

    /// Enumerate every note in the store
    ///
    /// # Errors
    ///
    /// Returns [`NotesTodayError::StoreAccess`](crate::domain::NotesTodayError::StoreAccess)
    /// if the store can't be reached at all. This is fatal for the run.
    fn list_notes(&self) -> Result<Vec<NoteId>>;

    /// Title of a note
    fn name(&self, id: &NoteId) -> std::result::Result<String, NoteAccessError>;

    /// Full body of a note, verbatim
    fn body(&self, id: &NoteId) -> std::result::Result<String, NoteAccessError>;

    /// Last modification instant of a note
    fn modification_date(
        &self,
        id: &NoteId,
    ) -> std::result::Result<DateTime<FixedOffset>, NoteAccessError>;
}

impl<S: NotesStore + ?Sized> NotesStore for Box<S> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn list_notes(&self) -> Result<Vec<NoteId>> {
        (**self).list_notes()
    }

    fn name(&self, id: &NoteId) -> std::result::Result<String, NoteAccessError> {
        (**self).name(id)
    }

    fn body(&self, id: &NoteId) -> std::result::Result<String, NoteAccessError> {
        (**self).body(id)
    }

    fn modification_date(
        &self,
        id: &NoteId,
    ) -> std::result::Result<DateTime<FixedOffset>, NoteAccessError> {
        (**self).modification_date(id)
    }
}
