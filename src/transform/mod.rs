//! Selection transforms.
//!
//! Each transform takes the full text and a selection snapshot and returns
//! a new text, or an error with the input left alone. There are four kinds:
//!
//! - inline replacement of the selected span within one row
//! - prefixing every row the selection touches
//! - inserting a literal row before the selection
//! - bracketing the selected rows with delimiter rows

mod actions;

pub use actions::{
    Action, CODE_FENCE, Markers, PAGE_BREAK, bold, checklist, clear_formatting, code_block, h1, h2,
    h3, h4, italic, link, ordered_list, page_break, quote_block, strikethrough, underline,
    unordered_list,
};

use crate::error::{Result, TransformError};
use crate::prefix::{apply_prefix, strip_prefix};
use crate::rows::{get_row, insert_row, map_rows, replace_row, row_count, to_rows};
use crate::selection::Selection;

/// Replace the selected span of a single-row selection with `replace_with`.
///
/// Columns are character positions, so the span never splits a multi-byte
/// character.
///
/// # Errors
/// - [`TransformError::MultilineNotSupported`] if the selection spans rows.
/// - [`TransformError::RowOutOfRange`] if its row is not in `text`.
/// - [`TransformError::SelectionOutOfBounds`] if it ends past the row.
/// - [`TransformError::SelectionMismatch`] if the span no longer holds the
///   selected text.
pub fn replace_selection(text: &str, sel: &Selection, replace_with: &str) -> Result<String> {
    if sel.is_multiline() {
        return Err(TransformError::MultilineNotSupported);
    }
    let (start, end) = sel.start_and_end();
    let row = get_row(start.row, text)?;

    let len = row.chars().count();
    let end_col = end.col.saturating_sub(1);
    if end_col > len {
        return Err(TransformError::SelectionOutOfBounds { col: end.col, len });
    }
    let start_byte = char_to_byte(row, start.col.saturating_sub(1));
    let end_byte = char_to_byte(row, end_col);

    let selected = &row[start_byte..end_byte];
    if selected != sel.content {
        return Err(TransformError::SelectionMismatch {
            expected: sel.content.clone(),
            found: selected.to_string(),
        });
    }

    let new_row = format!("{}{replace_with}{}", &row[..start_byte], &row[end_byte..]);
    replace_row(start.row, text, &new_row)
}

/// Give every row the selection touches the style `new_prefix`, replacing
/// whatever style it had.
///
/// All rows get the same literal, so ordered lists are not renumbered.
///
/// # Errors
/// [`TransformError::RowOutOfRange`] if the selection reaches past the text.
pub fn prefix_selected_rows(text: &str, sel: &Selection, new_prefix: &str) -> Result<String> {
    map_rows(text, sel.rows(), |row| apply_prefix(row, new_prefix))
}

/// Strip the row style from every row the selection touches.
///
/// # Errors
/// [`TransformError::RowOutOfRange`] if the selection reaches past the text.
pub fn strip_selected_rows(text: &str, sel: &Selection) -> Result<String> {
    map_rows(text, sel.rows(), |row| strip_prefix(row).to_string())
}

/// Insert `to_insert` as a new row directly above the first selected row.
///
/// # Errors
/// [`TransformError::RowOutOfRange`] if the first selected row is more than
/// one past the end of the text.
pub fn insert_row_before_selection(text: &str, sel: &Selection, to_insert: &str) -> Result<String> {
    insert_row(sel.rows().start_row, text, to_insert)
}

/// Put `delimiter` on its own row above and below the selected rows.
///
/// An empty text has nothing to bracket, so it becomes two delimiter rows
/// and a trailing newline.
///
/// # Errors
/// [`TransformError::RowIndexOutOfRange`] if the selected rows fall outside
/// the text.
pub fn wrap_rows(text: &str, sel: &Selection, delimiter: &str) -> Result<String> {
    if text.is_empty() {
        return Ok(format!("{delimiter}\n{delimiter}\n"));
    }
    let range = sel.rows();
    let rows = row_count(text);
    if range.start_row == 0 {
        return Err(TransformError::RowIndexOutOfRange { index: 0, rows });
    }
    // Index of the closing row once the opening one is in place.
    let post = range.end_row + 1;
    if post > rows + 1 {
        return Err(TransformError::RowIndexOutOfRange { index: post, rows });
    }

    let mut out = to_rows(text);
    out.insert(range.start_row - 1, delimiter);
    out.insert(post, delimiter);
    Ok(out.join("\n"))
}

/// Byte offset of the `idx`th character of `row`, or its length when `idx`
/// is at or past the end.
fn char_to_byte(row: &str, idx: usize) -> usize {
    row.char_indices().nth(idx).map_or(row.len(), |(i, _)| i)
}
