//! Export summary and reporting

use crate::domain::{NoteAccessError, NoteId};
use std::path::PathBuf;
use std::time::Duration;

/// A note left out because one of its fields couldn't be read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedNote {
    /// Note that was skipped
    pub note_id: NoteId,

    /// Why
    pub reason: String,
}

impl From<NoteAccessError> for SkippedNote {
    fn from(err: NoteAccessError) -> Self {
        Self {
            note_id: err.note_id().clone(),
            reason: err.to_string(),
        }
    }
}

/// Summary of an export run
#[derive(Debug, Clone, Default)]
pub struct ExportSummary {
    /// Notes found in the store
    pub total_notes: usize,

    /// Notes modified today that made it into the output
    pub exported: usize,

    /// Notes skipped because of per-note read failures
    pub skipped: Vec<SkippedNote>,

    /// Where the output went (unset until written)
    pub output_path: Option<PathBuf>,

    /// Duration of the run
    pub duration: Duration,
}

impl ExportSummary {
    /// Create a new empty export summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Record a skipped note
    pub fn add_skipped(&mut self, skipped: impl Into<SkippedNote>) {
        self.skipped.push(skipped.into());
    }

    /// Number of skipped notes
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            total_notes = self.total_notes,
            exported = self.exported,
            skipped = self.skipped_count(),
            output_path = ?self.output_path,
            duration_ms = self.duration.as_millis() as u64,
            "Export completed"
        );

        if !self.skipped.is_empty() {
            tracing::warn!(
                skipped = self.skipped_count(),
                "Some notes could not be read and were skipped"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_summary_creation() {
        let summary = ExportSummary::new();

        assert_eq!(summary.total_notes, 0);
        assert_eq!(summary.exported, 0);
        assert_eq!(summary.skipped_count(), 0);
        assert!(summary.output_path.is_none());
        assert_eq!(summary.duration, Duration::from_secs(0));
    }

    #[test]
    fn test_export_summary_with_duration() {
        let summary = ExportSummary::new().with_duration(Duration::from_millis(250));
        assert_eq!(summary.duration, Duration::from_millis(250));
    }

    #[test]
    fn test_add_skipped_from_access_error() {
        let mut summary = ExportSummary::new();
        summary.add_skipped(NoteAccessError::Field {
            id: NoteId::from("n2"),
            field: "name",
            message: "Error: -1728".to_string(),
        });

        assert_eq!(summary.skipped_count(), 1);
        assert_eq!(summary.skipped[0].note_id, NoteId::from("n2"));
        assert!(summary.skipped[0].reason.contains("-1728"));
    }
}
