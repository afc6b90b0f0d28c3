//! Row addressing over a newline separated buffer.
//!
//! Rows are numbered from 1. A buffer always has at least one row: the
//! empty string is a single empty row, and a trailing newline adds an empty
//! last row.

use crate::error::{Result, TransformError};
use crate::selection::RowRange;

/// Split `text` into rows on `'\n'`.
pub fn to_rows(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Number of rows in `text`.
pub fn row_count(text: &str) -> usize {
    text.matches('\n').count() + 1
}

/// The text of row `n` (1-based), without its newline.
///
/// # Errors
/// [`TransformError::RowOutOfRange`] if `n` is 0 or past the last row.
pub fn get_row(n: usize, text: &str) -> Result<&str> {
    let rows = row_count(text);
    if n == 0 || n > rows {
        return Err(TransformError::RowOutOfRange { row: n, rows });
    }
    text.split('\n')
        .nth(n - 1)
        .ok_or(TransformError::RowOutOfRange { row: n, rows })
}

/// `text` with row `n` (1-based) replaced by `new_row`. Other rows are kept
/// verbatim.
///
/// # Errors
/// [`TransformError::RowOutOfRange`] if `n` is 0 or past the last row.
pub fn replace_row(n: usize, text: &str, new_row: &str) -> Result<String> {
    let mut rows = to_rows(text);
    let count = rows.len();
    let slot = n
        .checked_sub(1)
        .and_then(|i| rows.get_mut(i))
        .ok_or(TransformError::RowOutOfRange { row: n, rows: count })?;
    *slot = new_row;
    Ok(rows.join("\n"))
}

/// `text` with `new_row` inserted so that it becomes row `n` (1-based).
///
/// `n` may be one past the last row, which appends.
///
/// # Errors
/// [`TransformError::RowOutOfRange`] if `n` is 0 or more than one past the
/// last row.
pub fn insert_row(n: usize, text: &str, new_row: &str) -> Result<String> {
    let mut rows = to_rows(text);
    if n == 0 || n > rows.len() + 1 {
        return Err(TransformError::RowOutOfRange {
            row: n,
            rows: rows.len(),
        });
    }
    rows.insert(n - 1, new_row);
    Ok(rows.join("\n"))
}

/// Rewrite every row in `range` with `f`, leaving the rest untouched.
///
/// # Errors
/// [`TransformError::RowOutOfRange`] if the range starts at 0 or ends past
/// the last row. The text is not touched in that case.
pub fn map_rows<F>(text: &str, range: RowRange, mut f: F) -> Result<String>
where
    F: FnMut(&str) -> String,
{
    let rows = to_rows(text);
    let count = rows.len();
    if range.start_row == 0 {
        return Err(TransformError::RowOutOfRange { row: 0, rows: count });
    }
    if range.end_row > count {
        return Err(TransformError::RowOutOfRange {
            row: range.end_row,
            rows: count,
        });
    }
    let mapped: Vec<String> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            if range.iter().contains(&(i + 1)) {
                f(row)
            } else {
                (*row).to_string()
            }
        })
        .collect();
    Ok(mapped.join("\n"))
}
