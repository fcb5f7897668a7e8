//! External system adapters
//!
//! - `notes` - notes stores (Apple Notes, JSON snapshots)

pub mod notes;
