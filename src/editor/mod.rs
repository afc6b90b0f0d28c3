//! Hosting the transforms inside an editor.
//!
//! An editor exposes its text and selection through [`TextHost`]. Running
//! an action reads both, transforms the text and installs the result, or
//! leaves the editor untouched when the transform is rejected.

mod buffer;

pub use buffer::{Cursor, EditorBuffer};

use crate::error::TransformError;
use crate::selection::Selection;
use crate::transform::{Action, Markers};

/// What an editor widget has to provide to run toolbar actions.
pub trait TextHost {
    /// The full current text.
    fn text(&self) -> String;

    /// The current cursor and selection, with 1-based rows and columns.
    fn selection(&self) -> Selection;

    /// Replace the whole text.
    fn set_text(&mut self, text: String);
}

/// Run `action` against `host` with the default markers.
///
/// # Errors
/// The transform's error; the host's text is left as it was.
pub fn apply_and_commit<H>(host: &mut H, action: Action) -> Result<(), TransformError>
where
    H: TextHost + ?Sized,
{
    apply_and_commit_with(host, action, &Markers::default())
}

/// Run `action` against `host`, installing the new text on success.
///
/// # Errors
/// The transform's error; the host's text is left as it was.
pub fn apply_and_commit_with<H>(
    host: &mut H,
    action: Action,
    markers: &Markers,
) -> Result<(), TransformError>
where
    H: TextHost + ?Sized,
{
    let text = host.text();
    let selection = host.selection();
    match action.apply_with(&text, &selection, markers) {
        Ok(new_text) => {
            tracing::debug!(
                action = action.label(),
                rows = ?selection.rows(),
                "text operation applied"
            );
            host.set_text(new_text);
            Ok(())
        }
        Err(err) => {
            tracing::warn!(action = action.label(), %err, "text operation failed");
            Err(err)
        }
    }
}
