//! Cursor and selection value types.
//!
//! Positions are 1-based in both row and column, matching what an editor
//! shows in its status line. Hosts that count from zero translate at the
//! boundary with [`Position::from_zero_based`].

use std::fmt;
use std::str::FromStr;

/// A row/column position in a buffer. Both values start at 1.
///
/// Positions order by row, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a position from 1-based row and column.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Translate a 0-based host coordinate into a 1-based position.
    pub const fn from_zero_based(line: usize, col: usize) -> Self {
        Self {
            row: line + 1,
            col: col + 1,
        }
    }

    /// The 0-based `(line, col)` pair for this position.
    ///
    /// Rows or columns of 0 saturate to 0.
    pub const fn to_zero_based(self) -> (usize, usize) {
        (self.row.saturating_sub(1), self.col.saturating_sub(1))
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}

/// Error returned when a `ROW:COL` string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParsePositionError {
    #[error("expected ROW:COL, got '{0}'")]
    Format(String),
    #[error("invalid number '{0}'")]
    Number(String),
    #[error("rows and columns start at 1, got '{0}'")]
    Zero(String),
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| ParsePositionError::Format(s.to_string()))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|_| ParsePositionError::Number(part.to_string()))
        };
        let (row, col) = (parse(row)?, parse(col)?);
        if row == 0 || col == 0 {
            return Err(ParsePositionError::Zero(s.to_string()));
        }
        Ok(Self::new(row, col))
    }
}

/// Snapshot of the host's cursor and selection.
///
/// `content` is the text the host reports as selected. When it is empty
/// the selection is just a cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub cursor_position: Position,
    pub selection_start: Position,
    pub content: String,
}

impl Selection {
    /// A selection from `selection_start` to `cursor_position`.
    pub fn new(
        selection_start: Position,
        cursor_position: Position,
        content: impl Into<String>,
    ) -> Self {
        Self {
            cursor_position,
            selection_start,
            content: content.into(),
        }
    }

    /// A bare cursor with nothing selected.
    pub fn cursor(position: Position) -> Self {
        Self::new(position, position, String::new())
    }

    /// Whether any text is selected.
    pub fn has_selection(&self) -> bool {
        !self.content.is_empty()
    }

    /// The selection's endpoints in document order.
    pub fn start_and_end(&self) -> (Position, Position) {
        start_and_end_positions(self)
    }

    /// The inclusive row span covered by the selection.
    pub fn rows(&self) -> RowRange {
        row_range(self)
    }

    /// Whether the selection spans more than one row.
    pub fn is_multiline(&self) -> bool {
        is_multiline(self)
    }
}

/// An inclusive, 1-based span of rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRange {
    pub start_row: usize,
    pub end_row: usize,
}

impl RowRange {
    /// Iterate the row numbers in the range.
    pub fn iter(self) -> std::ops::RangeInclusive<usize> {
        self.start_row..=self.end_row
    }
}

/// Order the anchor and cursor so the first is never after the second.
///
/// Row is compared first, then column, so reversed selections yield the
/// same pair as forward ones.
pub fn start_and_end_positions(sel: &Selection) -> (Position, Position) {
    let (cur, anchor) = (sel.cursor_position, sel.selection_start);
    if cur < anchor { (cur, anchor) } else { (anchor, cur) }
}

/// The first and last row touched by the selection.
pub fn row_range(sel: &Selection) -> RowRange {
    let (start, end) = start_and_end_positions(sel);
    RowRange {
        start_row: start.row,
        end_row: end.row,
    }
}

/// True iff the anchor and cursor sit on different rows.
pub fn is_multiline(sel: &Selection) -> bool {
    sel.selection_start.row != sel.cursor_position.row
}
