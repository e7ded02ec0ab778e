//! Editor command contract.
//!
//! A command receives one invocation (a line buffer plus the current
//! selections), mutates the buffer in place, and signals completion exactly
//! once. Malformed headers and unusable selections are normal inputs, not
//! errors; the error channel exists for hosts that hand over an unusable
//! buffer.

pub mod file_header;
pub mod function_comment;

use thiserror::Error;

use crate::buffer::LineBuffer;
use crate::selection::SelectionRange;

pub use file_header::{FileHeaderCommand, HeaderFields};
pub use function_comment::FunctionCommentCommand;

/// Command failure channel.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The host handed over a buffer the command could not use.
    #[error("invalid buffer: {0}")]
    InvalidBuffer(String),
}

/// One host invocation: a buffer and the selections active in it.
///
/// Supplied fresh per command run and discarded after; the core keeps no
/// state between invocations.
#[derive(Debug, Default)]
pub struct Invocation {
    /// The text buffer, mutated in place.
    pub buffer: LineBuffer,
    /// Selections active at invocation time.
    pub selections: Vec<SelectionRange>,
}

impl Invocation {
    /// Creates an invocation with no selections.
    #[must_use]
    pub fn new(buffer: LineBuffer) -> Self {
        Self {
            buffer,
            selections: Vec::new(),
        }
    }

    /// Creates an invocation with selections.
    #[must_use]
    pub fn with_selections(buffer: LineBuffer, selections: Vec<SelectionRange>) -> Self {
        Self { buffer, selections }
    }
}

/// An editor command the host can run against a buffer.
pub trait SourceCommand {
    /// Stable identifier used for dispatch and logging.
    fn identifier(&self) -> &'static str;

    /// Runs the command, mutating the invocation's buffer in place.
    ///
    /// # Errors
    /// Returns an error only when the buffer itself is unusable; missing or
    /// malformed content never fails.
    fn perform(&self, invocation: &mut Invocation) -> Result<(), CommandError>;
}

/// Runs a command and signals completion exactly once.
///
/// The completion callback receives `None` on success and the error
/// otherwise, mirroring the host editor's completion handler. The result is
/// also returned for callers that propagate with `?`.
pub fn run_command<F>(
    command: &dyn SourceCommand,
    invocation: &mut Invocation,
    on_complete: F,
) -> Result<(), CommandError>
where
    F: FnOnce(Option<&CommandError>),
{
    tracing::debug!(
        command = command.identifier(),
        lines = invocation.buffer.len(),
        selections = invocation.selections.len(),
        "running command"
    );
    let result = command.perform(invocation);
    if let Err(err) = &result {
        tracing::warn!(command = command.identifier(), error = %err, "command failed");
    }
    on_complete(result.as_ref().err());
    result
}
