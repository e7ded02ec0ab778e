//! Function comment block insertion.
//!
//! For every single-line selection, inserts a six-line comment block above
//! the selected line, using the selected text as the function name and
//! matching the line's leading whitespace and comment markers.

use super::file_header::{COMMENT_BLANK, COMMENT_BORDER};
use super::{CommandError, Invocation, SourceCommand};
use crate::selection::SelectionRange;
use crate::text;

/// Inserts a function comment block at each single-line selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct FunctionCommentCommand;

impl FunctionCommentCommand {
    /// Renders the six-line block for a selected name and indent prefix.
    fn render(prefix: &str, selected: &str) -> Vec<String> {
        vec![
            format!("{prefix}{COMMENT_BORDER}"),
            format!("{prefix}{COMMENT_BLANK}"),
            format!("{prefix}//      Function: {selected}"),
            format!("{prefix}//   Description: "),
            format!("{prefix}{COMMENT_BLANK}"),
            format!("{prefix}{COMMENT_BORDER}"),
        ]
    }

    /// Computes the indent prefix for a line: every character strictly
    /// before the first non-space/non-slash character, or nothing when the
    /// line starts with content or has none.
    fn indent_prefix(line: &str) -> &str {
        match text::first_content_index(line) {
            Some(idx) if idx > 0 => text::slice(line, 0, idx),
            _ => "",
        }
    }
}

impl SourceCommand for FunctionCommentCommand {
    fn identifier(&self) -> &'static str {
        "function-comment"
    }

    fn perform(&self, invocation: &mut Invocation) -> Result<(), CommandError> {
        let mut targets: Vec<SelectionRange> = invocation
            .selections
            .iter()
            .copied()
            .filter(SelectionRange::is_single_line)
            .filter(|sel| sel.start.line < invocation.buffer.len())
            .collect();
        // Bottom-up, so an insertion never shifts a later target line.
        targets.sort_by_key(|sel| sel.start.line);

        for sel in targets.iter().rev() {
            let Some(line) = invocation.buffer.line(sel.start.line) else {
                continue;
            };
            let line = line.strip_suffix('\n').unwrap_or(line);

            // Selected columns are inclusive on both ends.
            let selected = text::slice(line, sel.start.col, sel.end.col + 1).to_string();
            let prefix = Self::indent_prefix(line).to_string();
            tracing::debug!(
                line = sel.start.line,
                function = %selected,
                "inserting function comment"
            );

            let block = Self::render(&prefix, &selected);
            invocation.buffer.insert_lines(sel.start.line, block);
        }

        Ok(())
    }
}
