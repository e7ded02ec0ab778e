//! Host-side plumbing for running commands.
//!
//! The core owns no files or presentation; hosts do. A host produces a
//! fresh invocation per command run, receives the mutated buffer back, and
//! observes the completion outcome. `FileHost` is the host behind the CLI:
//! it materializes a file as a line buffer and writes the result back only
//! when the command succeeded.

use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use crate::buffer::LineBuffer;
use crate::commands::{CommandError, Invocation, SourceCommand};
use crate::selection::SelectionRange;

/// Host error type.
#[derive(Debug, Error)]
pub enum HostError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Command failure surfaced through the completion signal.
    #[error("command error: {0}")]
    Command(#[from] CommandError),
}

/// Host interface commands are run through.
pub trait CommandHost {
    /// Produces a fresh invocation for the next command run.
    ///
    /// # Errors
    /// Returns an error when the host cannot supply a buffer.
    fn invocation(&mut self) -> Result<Invocation, HostError>;

    /// Receives the completed invocation back along with the completion
    /// outcome. Called exactly once per run.
    ///
    /// # Errors
    /// Returns an error when the host cannot apply the result.
    fn complete(
        &mut self,
        invocation: Invocation,
        error: Option<&CommandError>,
    ) -> Result<(), HostError>;
}

/// Runs one command through a host, routing the completion signal back.
///
/// # Errors
/// Propagates host failures and the command's own error, if any.
pub fn run_on_host(
    host: &mut dyn CommandHost,
    command: &dyn SourceCommand,
) -> Result<(), HostError> {
    let mut invocation = host.invocation()?;
    tracing::debug!(command = command.identifier(), "dispatching to host buffer");
    let result = command.perform(&mut invocation);
    host.complete(invocation, result.as_ref().err())?;
    result?;
    Ok(())
}

/// File-backed host used by the CLI.
#[derive(Debug, Clone)]
pub struct FileHost {
    /// File presented as the buffer.
    path: PathBuf,
    /// Selections to report with the invocation.
    selections: Vec<SelectionRange>,
    /// Write a `.bak` copy before overwriting.
    backup: bool,
}

impl FileHost {
    /// Creates a file host for the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            selections: Vec::new(),
            backup: false,
        }
    }

    /// Sets the selections reported with each invocation.
    #[must_use]
    pub fn with_selections(mut self, selections: Vec<SelectionRange>) -> Self {
        self.selections = selections;
        self
    }

    /// Enables or disables `.bak` backups before writing.
    #[must_use]
    pub fn with_backup(mut self, backup: bool) -> Self {
        self.backup = backup;
        self
    }

    fn backup_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".bak");
        PathBuf::from(name)
    }
}

impl CommandHost for FileHost {
    fn invocation(&mut self) -> Result<Invocation, HostError> {
        let text = fs::read_to_string(&self.path)?;
        Ok(Invocation::with_selections(
            LineBuffer::from_str(&text),
            self.selections.clone(),
        ))
    }

    fn complete(
        &mut self,
        invocation: Invocation,
        error: Option<&CommandError>,
    ) -> Result<(), HostError> {
        if let Some(err) = error {
            tracing::warn!(path = %self.path.display(), error = %err, "file left untouched");
            return Ok(());
        }
        if self.backup {
            fs::copy(&self.path, self.backup_path())?;
        }
        fs::write(&self.path, invocation.buffer.text())?;
        tracing::info!(path = %self.path.display(), "buffer written back");
        Ok(())
    }
}

/// In-memory host for tests.
#[derive(Debug, Default)]
pub struct StubHost {
    /// Buffer text handed to the next invocation.
    pub text: String,
    /// Selections handed to the next invocation.
    pub selections: Vec<SelectionRange>,
    /// Buffer text received back on completion.
    pub completed: Option<String>,
    /// Number of completion signals observed.
    pub completions: usize,
    /// Whether the last completion carried an error.
    pub failed: bool,
}

impl StubHost {
    /// Creates a stub host over the given text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

impl CommandHost for StubHost {
    fn invocation(&mut self) -> Result<Invocation, HostError> {
        Ok(Invocation::with_selections(
            LineBuffer::from_str(&self.text),
            self.selections.clone(),
        ))
    }

    fn complete(
        &mut self,
        invocation: Invocation,
        error: Option<&CommandError>,
    ) -> Result<(), HostError> {
        self.completions += 1;
        self.failed = error.is_some();
        self.completed = Some(invocation.buffer.text());
        Ok(())
    }
}
