//! Export coordinator - runs the export pipeline
//!
//! list notes -> keep today's -> sort oldest first -> render -> write.
//! The text is rendered completely before the output file is touched, so a
//! failure before the write leaves the previous export in place.

use crate::adapters::notes::{create_notes_store, NotesStore};
use crate::config::NotesTodayConfig;
use crate::core::export::summary::ExportSummary;
use crate::core::export::writer::write_output;
use crate::core::render::Renderer;
use crate::core::window::{Clock, SystemClock, TodayWindow};
use crate::domain::{NoteAccessError, NoteId, NoteRecord, NotesTodayError, Result};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Rendered export, ready to be written
#[derive(Debug, Clone)]
pub struct PreparedExport {
    /// Today's notes, oldest first
    pub notes: Vec<NoteRecord>,

    /// Rendered output text
    pub text: String,

    /// Counts so far; `output_path` is unset
    pub summary: ExportSummary,

    started: Instant,
}

/// Export coordinator
pub struct ExportCoordinator<S, C = SystemClock> {
    store: S,
    clock: C,
    renderer: Renderer,
    output_path: PathBuf,
}

impl ExportCoordinator<Box<dyn NotesStore>, SystemClock> {
    /// Builds a coordinator from configuration using the wall clock
    pub fn from_config(config: &NotesTodayConfig) -> Result<Self> {
        let store = create_notes_store(&config.store)?;
        let renderer = Renderer::new(config.output.timestamp_format.clone())?;
        let output_path = config
            .output
            .resolved_path()
            .map_err(NotesTodayError::Configuration)?;

        Ok(Self::new(store, SystemClock, renderer, output_path))
    }
}

impl<S: NotesStore, C: Clock> ExportCoordinator<S, C> {
    /// Create a new export coordinator
    pub fn new(store: S, clock: C, renderer: Renderer, output_path: impl Into<PathBuf>) -> Self {
        Self {
            store,
            clock,
            renderer,
            output_path: output_path.into(),
        }
    }

    /// The store notes are read from
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Where [`write`](Self::write) puts the text
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Runs the whole export and writes the output file
    ///
    /// # Errors
    ///
    /// [`NotesTodayError::StoreAccess`] if the store can't be enumerated,
    /// [`NotesTodayError::Write`] if the output can't be written. Unreadable
    /// individual notes are skipped and reported in the summary.
    pub fn run(&self) -> Result<ExportSummary> {
        let prepared = self.prepare()?;
        self.write(prepared)
    }

    /// Reads, filters, sorts and renders without writing anything
    pub fn prepare(&self) -> Result<PreparedExport> {
        let started = Instant::now();
        let mut summary = ExportSummary::new();

        tracing::info!(store = %self.store.describe(), "Fetching notes");
        let ids = self.store.list_notes()?;
        summary.total_notes = ids.len();
        tracing::info!(total_notes = ids.len(), "Notes found in store");

        let window = self.clock.window();
        tracing::debug!(
            today_start = %window.start(),
            now = %window.now(),
            "Filtering notes modified today"
        );

        let mut notes = Vec::new();
        for id in &ids {
            match self.read_if_today(id, &window) {
                Ok(Some(note)) => notes.push(note),
                Ok(None) => {}
                Err(err) => {
                    crate::log_note_skipped!(err.note_id(), err);
                    summary.add_skipped(err);
                }
            }
        }

        // stable: equal timestamps keep store order
        notes.sort_by_key(|note| note.modified_at);
        summary.exported = notes.len();
        tracing::info!(
            matched = notes.len(),
            skipped = summary.skipped_count(),
            "Notes modified today"
        );

        let text = self.renderer.render(&notes);

        Ok(PreparedExport {
            notes,
            text,
            summary,
            started,
        })
    }

    /// Writes a prepared export to the output path, replacing its contents
    pub fn write(&self, prepared: PreparedExport) -> Result<ExportSummary> {
        write_output(&self.output_path, &prepared.text)?;

        let mut summary = prepared.summary.with_duration(prepared.started.elapsed());
        summary.output_path = Some(self.output_path.clone());
        summary.log_summary();
        Ok(summary)
    }

    fn read_if_today(
        &self,
        id: &NoteId,
        window: &TodayWindow,
    ) -> std::result::Result<Option<NoteRecord>, NoteAccessError> {
        let modified_at = self.store.modification_date(id)?;
        if !window.contains(&modified_at) {
            return Ok(None);
        }

        let title = self.store.name(id)?;
        let body = self.store.body(id)?;
        Ok(Some(NoteRecord::new(title, body, modified_at)))
    }
}
