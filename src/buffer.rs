//! Line buffer implementation.
//!
//! Stores text as an ordered sequence of whole lines and supports the two
//! mutations commands need: batched removal of a set of line indices and
//! contiguous block insertion. Lines keep their terminating newline (the
//! final line may lack one), so payload extraction can address the exact
//! characters the host editor reported.

use std::collections::BTreeSet;

/// Mutable ordered sequence of text lines.
///
/// Lines are never edited in place; every mutation removes or inserts whole
/// lines, and surviving lines are renumbered sequentially from 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    /// The lines, each including its trailing newline when it has one.
    lines: Vec<String>,
}

impl LineBuffer {
    /// Creates a new empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Creates a buffer from a string, preserving line terminators.
    #[must_use]
    pub fn from_str(text: &str) -> Self {
        let mut lines = Vec::new();
        let mut start = 0;
        for (idx, ch) in text.char_indices() {
            if ch == '\n' {
                lines.push(text[start..=idx].to_string());
                start = idx + 1;
            }
        }
        if start < text.len() {
            lines.push(text[start..].to_string());
        }
        Self { lines }
    }

    /// Returns the number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the buffer has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns a line by index.
    #[must_use]
    pub fn line(&self, idx: usize) -> Option<&str> {
        self.lines.get(idx).map(String::as_str)
    }

    /// Returns an iterator over the lines.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Removes every listed index in one batch.
    ///
    /// Indices refer to the buffer before the call; out-of-range entries are
    /// ignored. Surviving lines are renumbered sequentially from 0.
    pub fn remove_indices(&mut self, indices: &BTreeSet<usize>) {
        if indices.is_empty() {
            return;
        }
        let mut idx = 0;
        self.lines.retain(|_| {
            let keep = !indices.contains(&idx);
            idx += 1;
            keep
        });
    }

    /// Inserts a contiguous block of lines at the given index.
    ///
    /// Existing lines from `at` onward shift down by the block length. The
    /// index is clamped to the end of the buffer. Inserted lines without a
    /// trailing newline get one appended, keeping the newline-per-line
    /// invariant the extraction rules depend on.
    pub fn insert_lines(&mut self, at: usize, block: Vec<String>) {
        let at = at.min(self.lines.len());
        let normalized = block.into_iter().map(|mut line| {
            if !line.ends_with('\n') {
                line.push('\n');
            }
            line
        });
        self.lines.splice(at..at, normalized);
    }

    /// Returns the full text of the buffer.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines.concat()
    }
}

impl std::fmt::Display for LineBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in &self.lines {
            f.write_str(line)?;
        }
        Ok(())
    }
}
