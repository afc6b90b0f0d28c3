//! Row prefix normalization.
//!
//! A row's Markdown block style lives in a leading token: heading marks,
//! list bullets, checklist boxes, ordered list numbers or a quote marker.
//! Restyling a row strips the existing token before adding the new one, so
//! styles replace each other instead of piling up.

/// Recognized row prefixes, most specific first.
///
/// Checklist boxes come before the bare bullet they start with, and deeper
/// headings before shallower ones. Matching happens after leading
/// whitespace is trimmed, so indented bullets like `" - "` are covered by
/// `"- "`.
pub const ROW_PREFIXES: &[&str] = &[
    // checklists
    "- [ ] ", "- [x] ", "- [X] ",
    // headings
    "##### ", "#### ", "### ", "## ", "# ",
    // ordered lists
    "10. ", "1. ", "2. ", "3. ", "4. ", "5. ", "6. ", "7. ", "8. ", "9. ",
    // quote
    "> ",
    // unordered lists
    "- ",
];

/// The recognized prefix `row` starts with, ignoring leading whitespace.
pub fn known_prefix(row: &str) -> Option<&'static str> {
    let trimmed = row.trim_start();
    ROW_PREFIXES
        .iter()
        .copied()
        .find(|prefix| trimmed.starts_with(prefix))
}

/// Remove one recognized style prefix from `row`.
///
/// Leading whitespace goes with the prefix. A row without a recognized
/// prefix comes back unchanged, indentation included.
pub fn strip_prefix(row: &str) -> &str {
    let trimmed = row.trim_start();
    known_prefix(trimmed)
        .and_then(|prefix| trimmed.strip_prefix(prefix))
        .unwrap_or(row)
}

/// Restyle `row` with `new_prefix`, replacing any recognized prefix.
pub fn apply_prefix(row: &str, new_prefix: &str) -> String {
    format!("{new_prefix}{}", strip_prefix(row))
}
