//! Grapheme-based text scanning and slicing.
//!
//! Commands address buffer text by user-perceptible characters (extended
//! grapheme clusters), never raw bytes, so host-reported columns line up
//! with what the user sees.

use unicode_segmentation::UnicodeSegmentation;

/// Returns the grapheme index of the first character that is neither a
/// space nor a slash.
///
/// Returns `None` when every character is a space or slash, including the
/// empty string.
#[must_use]
pub fn first_content_index(line: &str) -> Option<usize> {
    line.graphemes(true).position(|g| g != " " && g != "/")
}

/// Returns the number of graphemes in a string.
#[must_use]
pub fn grapheme_len(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Returns the substring covering graphemes `[start, end)`.
///
/// Both bounds are clamped to the string; an empty or inverted range yields
/// an empty string.
#[must_use]
pub fn slice(s: &str, start: usize, end: usize) -> &str {
    if start >= end {
        return "";
    }
    let mut byte_start = s.len();
    let mut byte_end = s.len();
    for (count, (idx, _)) in s.grapheme_indices(true).enumerate() {
        if count == start {
            byte_start = idx;
        }
        if count == end {
            byte_end = idx;
            break;
        }
    }
    &s[byte_start..byte_end]
}

/// Returns all but the final grapheme of a string.
#[must_use]
pub fn trim_last(s: &str) -> &str {
    match s.grapheme_indices(true).last() {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
