//! Toolbar actions.
//!
//! One function per Markdown action, all with the same shape so a host
//! can bind them to buttons, plus [`Action`] for picking one at runtime.

use super::{
    insert_row_before_selection, prefix_selected_rows, replace_selection, strip_selected_rows,
    wrap_rows,
};
use crate::error::Result;
use crate::selection::Selection;

/// Fence row used for code blocks.
pub const CODE_FENCE: &str = "```";
/// Row inserted for a page break.
pub const PAGE_BREAK: &str = "-----";

/// Literal rows inserted by the row-inserting actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub fence: String,
    pub page_break: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            fence: CODE_FENCE.to_string(),
            page_break: PAGE_BREAK.to_string(),
        }
    }
}

/// `foo` becomes `**foo**`.
pub fn bold(text: &str, sel: &Selection) -> Result<String> {
    replace_selection(text, sel, &format!("**{}**", sel.content))
}

/// `foo` becomes `_foo_`.
pub fn italic(text: &str, sel: &Selection) -> Result<String> {
    replace_selection(text, sel, &format!("_{}_", sel.content))
}

/// `foo` becomes `~~foo~~`.
pub fn strikethrough(text: &str, sel: &Selection) -> Result<String> {
    replace_selection(text, sel, &format!("~~{}~~", sel.content))
}

/// `foo` becomes `<u>foo</u>`.
pub fn underline(text: &str, sel: &Selection) -> Result<String> {
    replace_selection(text, sel, &format!("<u>{}</u>", sel.content))
}

/// `foo` becomes `[foo]()`, leaving the target for the user to fill in.
pub fn link(text: &str, sel: &Selection) -> Result<String> {
    replace_selection(text, sel, &format!("[{}]()", sel.content))
}

pub fn h1(text: &str, sel: &Selection) -> Result<String> {
    prefix_selected_rows(text, sel, "# ")
}

pub fn h2(text: &str, sel: &Selection) -> Result<String> {
    prefix_selected_rows(text, sel, "## ")
}

pub fn h3(text: &str, sel: &Selection) -> Result<String> {
    prefix_selected_rows(text, sel, "### ")
}

pub fn h4(text: &str, sel: &Selection) -> Result<String> {
    prefix_selected_rows(text, sel, "#### ")
}

pub fn unordered_list(text: &str, sel: &Selection) -> Result<String> {
    prefix_selected_rows(text, sel, " - ")
}

pub fn checklist(text: &str, sel: &Selection) -> Result<String> {
    prefix_selected_rows(text, sel, " - [ ] ")
}

/// Every selected row gets `1. `; items are not renumbered.
pub fn ordered_list(text: &str, sel: &Selection) -> Result<String> {
    prefix_selected_rows(text, sel, "1. ")
}

pub fn quote_block(text: &str, sel: &Selection) -> Result<String> {
    prefix_selected_rows(text, sel, "> ")
}

/// Insert a `-----` row above the selection.
pub fn page_break(text: &str, sel: &Selection) -> Result<String> {
    insert_row_before_selection(text, sel, PAGE_BREAK)
}

/// Fence the selected rows with code fence rows.
pub fn code_block(text: &str, sel: &Selection) -> Result<String> {
    wrap_rows(text, sel, CODE_FENCE)
}

/// Remove heading, list, checklist and quote styling from the selected rows.
pub fn clear_formatting(text: &str, sel: &Selection) -> Result<String> {
    strip_selected_rows(text, sel)
}

/// A Markdown toolbar action.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Bold,
    Italic,
    Strikethrough,
    Underline,
    Link,
    H1,
    H2,
    H3,
    H4,
    UnorderedList,
    Checklist,
    OrderedList,
    QuoteBlock,
    PageBreak,
    CodeBlock,
    ClearFormatting,
}

impl Action {
    pub const ALL: [Self; 16] = [
        Self::Bold,
        Self::Italic,
        Self::Strikethrough,
        Self::Underline,
        Self::Link,
        Self::H1,
        Self::H2,
        Self::H3,
        Self::H4,
        Self::UnorderedList,
        Self::Checklist,
        Self::OrderedList,
        Self::QuoteBlock,
        Self::PageBreak,
        Self::CodeBlock,
        Self::ClearFormatting,
    ];

    /// Run the action with the default markers.
    ///
    /// # Errors
    /// Whatever the underlying transform rejects; see [`crate::TransformError`].
    pub fn apply(self, text: &str, sel: &Selection) -> Result<String> {
        self.apply_with(text, sel, &Markers::default())
    }

    /// Run the action, taking code fence and page break rows from `markers`.
    ///
    /// # Errors
    /// Whatever the underlying transform rejects; see [`crate::TransformError`].
    pub fn apply_with(self, text: &str, sel: &Selection, markers: &Markers) -> Result<String> {
        match self {
            Self::Bold => bold(text, sel),
            Self::Italic => italic(text, sel),
            Self::Strikethrough => strikethrough(text, sel),
            Self::Underline => underline(text, sel),
            Self::Link => link(text, sel),
            Self::H1 => h1(text, sel),
            Self::H2 => h2(text, sel),
            Self::H3 => h3(text, sel),
            Self::H4 => h4(text, sel),
            Self::UnorderedList => unordered_list(text, sel),
            Self::Checklist => checklist(text, sel),
            Self::OrderedList => ordered_list(text, sel),
            Self::QuoteBlock => quote_block(text, sel),
            Self::PageBreak => insert_row_before_selection(text, sel, &markers.page_break),
            Self::CodeBlock => wrap_rows(text, sel, &markers.fence),
            Self::ClearFormatting => clear_formatting(text, sel),
        }
    }

    /// Whether the action styles a span inside one row rather than whole rows.
    pub const fn is_inline(self) -> bool {
        matches!(
            self,
            Self::Bold | Self::Italic | Self::Strikethrough | Self::Underline | Self::Link
        )
    }

    /// Human readable name, as shown on a toolbar tooltip.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bold => "Bold",
            Self::Italic => "Italic",
            Self::Strikethrough => "Strikethrough",
            Self::Underline => "Underline",
            Self::Link => "Link",
            Self::H1 => "Heading 1",
            Self::H2 => "Heading 2",
            Self::H3 => "Heading 3",
            Self::H4 => "Heading 4",
            Self::UnorderedList => "Bulleted list",
            Self::Checklist => "Checklist",
            Self::OrderedList => "Numbered list",
            Self::QuoteBlock => "Quote",
            Self::PageBreak => "Page break",
            Self::CodeBlock => "Code block",
            Self::ClearFormatting => "Clear formatting",
        }
    }
}
