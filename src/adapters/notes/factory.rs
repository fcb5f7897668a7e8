//! Notes store factory
//!
//! Builds the configured [`NotesStore`] implementation.

use super::apple::AppleNotesStore;
use super::snapshot::SnapshotNotesStore;
use super::traits::NotesStore;
use crate::config::{expand_home, StoreConfig, StoreKind};
use crate::domain::{NotesTodayError, Result};

/// Create a notes store from configuration
///
/// # Errors
///
/// Returns a configuration error if a snapshot store is selected without a
/// usable path.
pub fn create_notes_store(config: &StoreConfig) -> Result<Box<dyn NotesStore>> {
    match config.kind {
        StoreKind::AppleNotes => {
            tracing::debug!(osascript = %config.osascript_path, "Using Apple Notes store");
            Ok(Box::new(AppleNotesStore::new(config.osascript_path.clone())))
        }
        StoreKind::Snapshot => {
            let raw = config.snapshot_path.as_deref().ok_or_else(|| {
                NotesTodayError::Configuration(
                    "store.snapshot_path is required when store.kind = 'snapshot'".to_string(),
                )
            })?;
            let path = expand_home(raw).map_err(NotesTodayError::Configuration)?;
            tracing::debug!(path = %path.display(), "Using snapshot store");
            Ok(Box::new(SnapshotNotesStore::new(path)))
        }
    }
}
