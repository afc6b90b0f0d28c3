use ropey::Rope;

use super::TextHost;
use crate::selection::{Position, Selection};

/// Cursor position in the editor buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based column, in characters.
    pub col: usize,
}

impl Cursor {
    /// Create a cursor at a specific position.
    pub const fn at(line: usize, col: usize) -> Self {
        Self { line, col }
    }

    /// The 1-based position reported to transforms.
    pub const fn position(self) -> Position {
        Position::from_zero_based(self.line, self.col)
    }
}

impl From<Position> for Cursor {
    fn from(pos: Position) -> Self {
        let (line, col) = pos.to_zero_based();
        Self { line, col }
    }
}

/// A text buffer backed by a rope, with a cursor and an optional selection
/// anchor.
///
/// Coordinates are 0-based internally, like most widgets. [`TextHost`]
/// reports them 1-based.
pub struct EditorBuffer {
    rope: Rope,
    cursor: Cursor,
    anchor: Option<Cursor>,
    dirty: bool,
}

impl EditorBuffer {
    /// Create a new buffer from a string.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            cursor: Cursor::default(),
            anchor: None,
            dirty: false,
        }
    }

    /// Create an empty buffer.
    pub fn empty() -> Self {
        Self::from_text("")
    }

    /// The current cursor position.
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Where the selection started, if anything is selected.
    pub const fn anchor(&self) -> Option<Cursor> {
        self.anchor
    }

    /// Whether an action has replaced the text since the buffer was created.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Total number of lines in the buffer.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Get the content of a line (without trailing newline).
    pub fn line_at(&self, line_idx: usize) -> Option<String> {
        if line_idx >= self.rope.len_lines() {
            return None;
        }
        let line = self.rope.line(line_idx).to_string();
        Some(line.trim_end_matches('\n').to_string())
    }

    /// Length of a line in characters (without trailing newline).
    pub fn line_len(&self, line_idx: usize) -> usize {
        self.line_at(line_idx).map_or(0, |s| s.chars().count())
    }

    /// The full text content of the buffer.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Move the cursor, dropping any selection. Out of range values clamp.
    pub fn move_to(&mut self, line: usize, col: usize) {
        self.cursor = self.clamp(Cursor::at(line, col));
        self.anchor = None;
    }

    /// Select from `anchor` to `cursor`. Either may come first.
    pub fn select(&mut self, anchor: Cursor, cursor: Cursor) {
        self.anchor = Some(self.clamp(anchor));
        self.cursor = self.clamp(cursor);
    }

    /// Select the whole buffer, leaving the cursor at the end.
    pub fn select_all(&mut self) {
        let last_line = self.line_count().saturating_sub(1);
        self.select(Cursor::at(0, 0), Cursor::at(last_line, self.line_len(last_line)));
    }

    /// Drop the selection, keeping the cursor where it is.
    pub const fn clear_selection(&mut self) {
        self.anchor = None;
    }

    /// The selected text, empty when nothing is selected.
    pub fn selected_text(&self) -> String {
        let Some(anchor) = self.anchor else {
            return String::new();
        };
        let a = self.char_idx(anchor);
        let b = self.char_idx(self.cursor);
        self.rope.slice(a.min(b)..a.max(b)).to_string()
    }

    /// Replace the whole content.
    ///
    /// The cursor is clamped into the new text and the selection dropped.
    pub fn replace_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.cursor = self.clamp(self.cursor);
        self.anchor = None;
        self.dirty = true;
    }

    // --- Private helpers ---

    fn clamp(&self, cursor: Cursor) -> Cursor {
        let line = cursor.line.min(self.line_count().saturating_sub(1));
        let col = cursor.col.min(self.line_len(line));
        Cursor::at(line, col)
    }

    /// Convert a (clamped) cursor to a rope char index.
    fn char_idx(&self, cursor: Cursor) -> usize {
        let cursor = self.clamp(cursor);
        self.rope.line_to_char(cursor.line) + cursor.col
    }
}

impl Default for EditorBuffer {
    fn default() -> Self {
        Self::empty()
    }
}

impl TextHost for EditorBuffer {
    fn text(&self) -> String {
        Self::text(self)
    }

    fn selection(&self) -> Selection {
        let cursor = self.cursor.position();
        let start = self.anchor.map_or(cursor, Cursor::position);
        Selection::new(start, cursor, self.selected_text())
    }

    fn set_text(&mut self, text: String) {
        self.replace_text(&text);
    }
}

impl std::fmt::Debug for EditorBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorBuffer")
            .field(
                "rope",
                &format_args!("Rope({} lines)", self.rope.len_lines()),
            )
            .field("cursor", &self.cursor)
            .field("anchor", &self.anchor)
            .field("dirty", &self.dirty)
            .finish()
    }
}
