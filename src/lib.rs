// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. editor::EditorBuffer)
    clippy::module_name_repetitions
)]

//! # Markform
//!
//! Markdown toolbar actions for plain text editors.
//!
//! Markform takes a buffer and a selection and returns the buffer with a
//! Markdown edit applied:
//! - Inline styles on the selected span (bold, italic, strikethrough,
//!   underline, link)
//! - Row styles on every selected row (headings, bullets, checklists,
//!   numbered items, quotes), replacing whatever style the row had
//! - Page breaks and fenced code blocks around the selected rows
//! - Clearing row styles
//!
//! ## Architecture
//!
//! Transforms are pure functions of `(text, selection)`. They keep no
//! state and never touch the editor. An editor implements
//! [`editor::TextHost`] and [`editor::apply_and_commit`] reads the text and
//! selection, runs the transform and writes the result back, or leaves the
//! text alone when the transform is rejected.
//!
//! ## Modules
//!
//! - [`selection`]: 1-based positions, selections and their geometry
//! - [`rows`]: Row addressing over newline separated text
//! - [`prefix`]: Recognizing and replacing row style prefixes
//! - [`transform`]: The transforms and toolbar actions
//! - [`editor`]: Host trait, commit wrapper and a rope-backed host
//! - [`error`]: Why a transform was rejected
//! - [`config`]: Saved command line defaults

pub mod config;
pub mod editor;
pub mod error;
pub mod prefix;
pub mod rows;
pub mod selection;
pub mod transform;

pub use error::TransformError;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::editor::{EditorBuffer, TextHost, apply_and_commit};
    pub use crate::error::TransformError;
    pub use crate::selection::{Position, Selection};
    pub use crate::transform::Action;
}
