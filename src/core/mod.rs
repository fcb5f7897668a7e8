//! Core business logic
//!
//! - `window` - which notes count as today's
//! - `render` - the text layout of the export
//! - `export` - the pipeline tying store, window, renderer and output together

pub mod export;
pub mod render;
pub mod window;
