//! Errors returned by buffer transforms.
//!
//! Every failure is recoverable: the caller keeps its buffer untouched and
//! reports the message. Nothing is retried; a stale selection has to be
//! captured again.

/// Why a transform refused to produce a new buffer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    /// A 1-based row number is 0 or beyond the last row.
    #[error("row {row} is out of range: text has {rows} rows")]
    RowOutOfRange { row: usize, rows: usize },

    /// The selection extends past the end of its row.
    #[error("selection column {col} exceeds row length {len}")]
    SelectionOutOfBounds { col: usize, len: usize },

    /// The text at the selection span no longer matches what was selected.
    #[error("current selection does not match the text: selected '{expected}', found '{found}'")]
    SelectionMismatch { expected: String, found: String },

    /// An inline style was requested on a selection spanning several rows.
    #[error("multiple line selection not supported")]
    MultilineNotSupported,

    /// A row insertion index falls outside the text.
    #[error("row index {index} out of range: text has {rows} rows")]
    RowIndexOutOfRange { index: usize, rows: usize },
}

pub type Result<T, E = TransformError> = std::result::Result<T, E>;
