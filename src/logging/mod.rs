//! Logging and observability
//!
//! Structured logging through `tracing`:
//! - console output on stderr (stdout is left to the export itself)
//! - optional JSON log files with rotation
//! - level from `--log-level`, the config file, or `RUST_LOG`

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log a note skipped because it couldn't be read
///
/// # Example
///
/// ```no_run
/// use notes_today::log_note_skipped;
/// use notes_today::domain::{NoteAccessError, NoteId};
///
/// let id = NoteId::from("n1");
/// let err = NoteAccessError::NotFound(id.clone());
/// log_note_skipped!(&id, err);
/// ```
#[macro_export]
macro_rules! log_note_skipped {
    ($note_id:expr, $reason:expr) => {
        tracing::debug!(
            note_id = %$note_id,
            reason = %$reason,
            "Skipping unreadable note"
        );
    };
}
