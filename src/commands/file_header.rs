//! Whole-file header rewriting.
//!
//! Replaces any leading block of `//` comment lines with a freshly
//! formatted header, carrying over whatever metadata the old header held.

use std::collections::BTreeSet;

use super::{CommandError, Invocation, SourceCommand};
use crate::buffer::LineBuffer;
use crate::text;

/// Asterisk border line shared by the generated comment blocks.
pub const COMMENT_BORDER: &str =
    "//**************************************************************************************";
/// Blank comment line.
pub const COMMENT_BLANK: &str = "//";

const FILENAME_PREFIX: &str = "//    Filename: ";
const PROJECT_PREFIX: &str = "//     Project: ";
const AUTHOR_PREFIX: &str = "//      Author: ";
const COPYRIGHT_PREFIX: &str = "//   Copyright: ";
const DESCRIPTION_LINE: &str = "// Description: ";
const MAINTENANCE_HEADING: &str = "//  Maintenance History";
const CREATED_PAD: &str = "//          ";
const CREATED_SUFFIX: &str = "      File Created";

/// Metadata recovered from an existing header.
///
/// Every field defaults to empty; extraction is best-effort and the first
/// match per field wins. A missing creation date falls back to today when
/// the header is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderFields {
    /// Source file name, e.g. `MyFile.swift`.
    pub filename: String,
    /// Project the file belongs to.
    pub project_name: String,
    /// Original author.
    pub created_by: String,
    /// Creation date as found in the old header, or `yyyy-MM-dd` today.
    pub created_date: String,
    /// Copyright notice.
    pub copyright: String,
}

impl HeaderFields {
    fn harvest_line(&mut self, buffer: &LineBuffer, line_num: usize, line: &str) {
        // Lines the rewriter itself emitted carry labels; reading those
        // first keeps a second run byte-identical to the first.
        if self.filename.is_empty() {
            if let Some(rest) = line.strip_prefix(FILENAME_PREFIX) {
                self.filename = strip_newline(rest).to_string();
                return;
            }
        }
        if self.project_name.is_empty() {
            if let Some(rest) = line.strip_prefix(PROJECT_PREFIX) {
                self.project_name = strip_newline(rest).to_string();
                return;
            }
        }
        if self.created_by.is_empty() {
            if let Some(rest) = line.strip_prefix(AUTHOR_PREFIX) {
                self.created_by = strip_newline(rest).to_string();
                return;
            }
        }
        if self.copyright.is_empty() {
            if let Some(rest) = line.strip_prefix(COPYRIGHT_PREFIX) {
                self.copyright = strip_newline(rest).to_string();
                return;
            }
        }
        if self.created_date.is_empty() {
            if let Some(rest) = line.strip_prefix(CREATED_PAD) {
                if let Some(pos) = rest.find(CREATED_SUFFIX) {
                    self.created_date = rest[..pos].to_string();
                    return;
                }
            }
        }

        // Legacy Xcode-style header patterns.
        if self.filename.is_empty() && line.ends_with("swift\n") {
            if let Some(payload) = line_payload(line) {
                self.filename = payload.to_string();
            }
            // The line after the filename names the project.
            if self.project_name.is_empty() {
                if let Some(next) = buffer.line(line_num + 1) {
                    if let Some(payload) = line_payload(next) {
                        self.project_name = payload.to_string();
                    }
                }
            }
        }
        if line.contains("Created by") {
            if self.created_by.is_empty() {
                if let Some(author) = author_between(line) {
                    self.created_by = author;
                }
            }
            if self.created_date.is_empty() {
                if let Some(date) = date_between(line) {
                    self.created_date = date;
                }
            }
        }
        if self.copyright.is_empty() && line.contains("Copyright") {
            if let Some(payload) = line_payload(line) {
                self.copyright = payload.to_string();
            }
        }
    }
}

/// Returns the line's payload: first non-space/non-slash character through
/// the second-to-last character.
fn line_payload(line: &str) -> Option<&str> {
    let start = text::first_content_index(line)?;
    let len = text::grapheme_len(line);
    Some(text::slice(line, start, len.saturating_sub(1)))
}

/// Author name: everything after `Created by ` up to and including the
/// character at the start of the following ` on `.
fn author_between(line: &str) -> Option<String> {
    let start = line.find("Created by ")? + "Created by ".len();
    let rest = &line[start..];
    let end = rest.find(" on ")?;
    Some(rest[..=end].to_string())
}

/// Creation date: everything strictly between ` on ` and the next `.`.
fn date_between(line: &str) -> Option<String> {
    let start = line.find(" on ")? + " on ".len();
    let rest = &line[start..];
    let end = rest.find('.')?;
    Some(rest[..end].to_string())
}

fn strip_newline(s: &str) -> &str {
    s.strip_suffix('\n').unwrap_or(s)
}

/// Rewrites the leading comment header of a buffer.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileHeaderCommand;

impl FileHeaderCommand {
    /// Scans the leading `//` block, collecting line indices to delete and
    /// harvesting reusable fields.
    fn scan(buffer: &LineBuffer) -> (BTreeSet<usize>, HeaderFields) {
        let mut doomed = BTreeSet::new();
        let mut fields = HeaderFields::default();

        for line_num in 0..buffer.len() {
            let Some(line) = buffer.line(line_num) else {
                break;
            };
            // First non-comment line ends the header region.
            if !line.starts_with("//") {
                break;
            }
            doomed.insert(line_num);
            fields.harvest_line(buffer, line_num, line);
        }

        (doomed, fields)
    }

    /// Renders the 14-line header block for the given fields.
    fn render(fields: &HeaderFields) -> Vec<String> {
        vec![
            COMMENT_BORDER.to_string(),
            COMMENT_BLANK.to_string(),
            format!("{FILENAME_PREFIX}{}", fields.filename),
            format!("{PROJECT_PREFIX}{}", fields.project_name),
            COMMENT_BLANK.to_string(),
            format!("{AUTHOR_PREFIX}{}", fields.created_by),
            format!("{COPYRIGHT_PREFIX}{}", fields.copyright),
            COMMENT_BLANK.to_string(),
            DESCRIPTION_LINE.to_string(),
            COMMENT_BLANK.to_string(),
            MAINTENANCE_HEADING.to_string(),
            format!("{CREATED_PAD}{}{CREATED_SUFFIX}", fields.created_date),
            COMMENT_BLANK.to_string(),
            COMMENT_BORDER.to_string(),
        ]
    }
}

impl SourceCommand for FileHeaderCommand {
    fn identifier(&self) -> &'static str {
        "file-header"
    }

    fn perform(&self, invocation: &mut Invocation) -> Result<(), CommandError> {
        let (doomed, mut fields) = Self::scan(&invocation.buffer);
        tracing::debug!(
            removed = doomed.len(),
            filename = %fields.filename,
            author = %fields.created_by,
            "replacing file header"
        );

        invocation.buffer.remove_indices(&doomed);

        if fields.created_date.is_empty() {
            fields.created_date = chrono::Local::now().format("%Y-%m-%d").to_string();
        }

        invocation.buffer.insert_lines(0, Self::render(&fields));
        Ok(())
    }
}
