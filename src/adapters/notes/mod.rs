//! Notes store adapters
//!
//! - [`AppleNotesStore`] - Notes.app via `osascript`
//! - [`SnapshotNotesStore`] - a JSON snapshot on disk
//!
//! Both speak the same JSON payload ([`payload`]) and implement the
//! [`NotesStore`] capability trait.

pub mod apple;
pub mod factory;
pub mod payload;
pub mod snapshot;
pub mod traits;

pub use apple::AppleNotesStore;
pub use factory::create_notes_store;
pub use payload::{parse_modification_date, RawField, RawNote};
pub use snapshot::SnapshotNotesStore;
pub use traits::NotesStore;
