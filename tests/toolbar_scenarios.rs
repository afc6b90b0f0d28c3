use markform::prelude::*;
use markform::editor::Cursor;
use markform::transform::{bold, code_block, h1, unordered_list};

const EXAMPLE: &str =
    "example line 1\nexample line 2\nexample line 3\nexample line 4\nexample line 5";

#[test]
fn test_bold_word_on_row_three() {
    let sel = Selection::new(Position::new(3, 9), Position::new(3, 13), "line");
    assert_eq!(
        bold(EXAMPLE, &sel).unwrap(),
        "example line 1\nexample line 2\nexample **line** 3\nexample line 4\nexample line 5"
    );
}

#[test]
fn test_h1_over_rows_two_and_three() {
    let sel = Selection::new(Position::new(2, 9), Position::new(3, 8), "line 2\nexample");
    assert_eq!(
        h1(EXAMPLE, &sel).unwrap(),
        "example line 1\n# example line 2\n# example line 3\nexample line 4\nexample line 5"
    );
}

#[test]
fn test_unordered_list_normalizes_any_prior_style() {
    let sel = Selection::new(Position::new(1, 1), Position::new(3, 1), "");
    let texts = [
        "line 1\nline 2\nline 3\nline 4",
        "# line 1\n## line 2\n### line 3\nline 4",
        " - line 1\n- line 2\n - line 3\nline 4",
        " - [ ] line 1\n- [x] line 2\n1. line 3\nline 4",
    ];
    for text in texts {
        assert_eq!(
            unordered_list(text, &sel).unwrap(),
            " - line 1\n - line 2\n - line 3\nline 4",
            "restyling {text:?}"
        );
    }
}

#[test]
fn test_code_block_on_empty_text() {
    for sel in [
        Selection::default(),
        Selection::new(Position::new(4, 2), Position::new(9, 1), "anything"),
    ] {
        assert_eq!(code_block("", &sel).unwrap(), "```\n```\n");
    }
}

#[test]
fn test_stale_selection_is_rejected() {
    let mut buffer = EditorBuffer::from_text(EXAMPLE);
    buffer.select(Cursor::at(2, 8), Cursor::at(2, 12));
    let sel = buffer.selection();

    // Someone edits row 3 between capturing the selection and applying it.
    let edited = EXAMPLE.replace("example line 3", "an example line 3");
    assert!(matches!(
        Action::Bold.apply(&edited, &sel),
        Err(TransformError::SelectionMismatch { .. })
    ));
}

#[test]
fn test_editor_session() {
    let mut buffer = EditorBuffer::from_text("Title\nfirst\nsecond\nthird");

    buffer.move_to(0, 0);
    apply_and_commit(&mut buffer, Action::H1).unwrap();

    buffer.select(Cursor::at(1, 0), Cursor::at(3, 2));
    apply_and_commit(&mut buffer, Action::Checklist).unwrap();

    buffer.select(Cursor::at(2, 7), Cursor::at(2, 13));
    apply_and_commit(&mut buffer, Action::Italic).unwrap();

    buffer.move_to(1, 0);
    apply_and_commit(&mut buffer, Action::PageBreak).unwrap();

    assert_eq!(
        buffer.text(),
        "# Title\n-----\n - [ ] first\n - [ ] _second_\n - [ ] third"
    );

    buffer.select(Cursor::at(2, 0), Cursor::at(4, 0));
    apply_and_commit(&mut buffer, Action::ClearFormatting).unwrap();
    assert_eq!(buffer.text(), "# Title\n-----\nfirst\n_second_\nthird");
}

#[test]
fn test_failed_commit_keeps_buffer() {
    let mut buffer = EditorBuffer::from_text("one\ntwo");
    buffer.select(Cursor::at(0, 1), Cursor::at(1, 2));
    let err = apply_and_commit(&mut buffer, Action::Link).unwrap_err();
    assert_eq!(err, TransformError::MultilineNotSupported);
    assert_eq!(err.to_string(), "multiple line selection not supported");
    assert_eq!(buffer.text(), "one\ntwo");
    assert!(!buffer.is_dirty());
}
