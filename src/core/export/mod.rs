//! Export pipeline
//!
//! - [`ExportCoordinator`] - reads, filters, sorts, renders and writes
//! - [`ExportSummary`] - counts and skipped notes for one run
//! - [`write_output`] - truncating file writer

pub mod coordinator;
pub mod summary;
pub mod writer;

pub use coordinator::{ExportCoordinator, PreparedExport};
pub use summary::{ExportSummary, SkippedNote};
pub use writer::write_output;
