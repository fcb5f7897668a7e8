//! Domain models and types.
//!
//! - **Records** ([`NoteRecord`]) and their store-side identifier ([`NoteId`])
//! - **Error types** ([`NotesTodayError`], [`NoteAccessError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! Fallible operations return [`Result<T, NotesTodayError>`]. Per-note read
//! failures use [`NoteAccessError`] and never abort a run:
//!
//! ```rust
//! use notes_today::domain::{NoteAccessError, NoteId};
//!
//! let err = NoteAccessError::NotFound(NoteId::from("note-1"));
//! assert_eq!(err.note_id().as_str(), "note-1");
//! ```

pub mod errors;
pub mod note;
pub mod result;

pub use errors::{NoteAccessError, NotesTodayError};
pub use note::{NoteId, NoteRecord};
pub use result::Result;
