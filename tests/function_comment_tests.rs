//! Tests for the function comment insertion command.
//!
//! Tests cover: selected-text capture, indent prefixes, multi-selection
//! handling, and the skip rules for unusable selections.

use commentstamp::commands::file_header::COMMENT_BORDER;
use commentstamp::commands::{FunctionCommentCommand, SourceCommand};
use commentstamp::{Invocation, LineBuffer, Position, SelectionRange};
use pretty_assertions::assert_eq;

fn insert(text: &str, selections: Vec<SelectionRange>) -> LineBuffer {
    let mut invocation = Invocation::with_selections(LineBuffer::from_str(text), selections);
    FunctionCommentCommand
        .perform(&mut invocation)
        .expect("no failure path");
    invocation.buffer
}

/// Test the full block for a selection inside an indented line.
#[test]
fn test_indented_selection_block() {
    let buffer = insert(
        "  func doWork() {\n  }\n",
        vec![SelectionRange::on_line(0, 2, 10)],
    );

    assert_eq!(buffer.len(), 8, "Six lines inserted above the selection");
    assert_eq!(buffer.line(0), Some(format!("  {COMMENT_BORDER}\n").as_str()));
    assert_eq!(buffer.line(1), Some("  //\n"));
    assert_eq!(
        buffer.line(2),
        Some("  //      Function: func doWo\n"),
        "Columns 2 through 10 inclusive, nine characters"
    );
    assert_eq!(buffer.line(3), Some("  //   Description: \n"));
    assert_eq!(buffer.line(4), Some("  //\n"));
    assert_eq!(buffer.line(5), Some(format!("  {COMMENT_BORDER}\n").as_str()));
    assert_eq!(
        buffer.line(6),
        Some("  func doWork() {\n"),
        "Selected line survives, shifted down by six"
    );
}

/// Test that an unindented line gets an empty prefix.
#[test]
fn test_unindented_line_empty_prefix() {
    let buffer = insert("fn main() {}\n", vec![SelectionRange::on_line(0, 3, 6)]);

    assert_eq!(buffer.line(0), Some(format!("{COMMENT_BORDER}\n").as_str()));
    assert_eq!(buffer.line(2), Some("//      Function: main\n"));
}

/// Test that comment markers count as indentation.
#[test]
fn test_comment_marker_prefix() {
    let buffer = insert("//  inner\n", vec![SelectionRange::on_line(0, 4, 8)]);

    assert_eq!(buffer.line(2), Some("//  //      Function: inner\n"));
}

/// Test that a multi-line selection leaves the buffer unchanged.
#[test]
fn test_multi_line_selection_skipped() {
    let text = "fn a() {}\nfn b() {}\n";
    let buffer = insert(
        text,
        vec![SelectionRange::new(Position::new(0, 0), Position::new(1, 4))],
    );

    assert_eq!(buffer.text(), text, "Multi-line selection is a no-op");
}

/// Test that an out-of-range selection line is skipped.
#[test]
fn test_out_of_range_selection_skipped() {
    let text = "fn a() {}\n";
    let buffer = insert(text, vec![SelectionRange::on_line(9, 0, 3)]);

    assert_eq!(buffer.text(), text);
}

/// Test that multiple selections each get a block at the right line.
#[test]
fn test_multiple_selections() {
    let buffer = insert(
        "fn alpha() {}\n\nfn beta() {}\n",
        vec![
            SelectionRange::on_line(0, 3, 7),
            SelectionRange::on_line(2, 3, 6),
        ],
    );

    assert_eq!(buffer.len(), 15, "Two six-line blocks inserted");
    assert_eq!(buffer.line(2), Some("//      Function: alpha\n"));
    assert_eq!(
        buffer.line(6),
        Some("fn alpha() {}\n"),
        "First selected line sits below its block"
    );
    assert_eq!(
        buffer.line(10),
        Some("//      Function: beta\n"),
        "Later insertion point is not shifted by the earlier one"
    );
    assert_eq!(buffer.line(14), Some("fn beta() {}\n"));
}

/// Test selections over multi-byte text.
#[test]
fn test_multibyte_selection() {
    let buffer = insert("  fn héllo() {}\n", vec![SelectionRange::on_line(0, 5, 9)]);

    assert_eq!(buffer.line(2), Some("  //      Function: héllo\n"));
}

/// Test that no selections means no mutation.
#[test]
fn test_no_selections() {
    let text = "fn main() {}\n";
    let buffer = insert(text, Vec::new());

    assert_eq!(buffer.text(), text);
}
