//! Commentstamp
//!
//! Editor commands that stamp standardized comment blocks into source
//! buffers: a whole-file header rewriter and a function comment inserter.
//!
//! # Architecture
//!
//! - **Buffer Module**: line-oriented text buffer with batched splices
//! - **Commands Module**: the two stateless command handlers
//! - **Host Module**: host contract plus the file-backed CLI host
//!
//! The core mutates a host-supplied buffer in place and signals completion
//! exactly once; it owns no files, persistence, or presentation.
//!
//! # Usage
//!
//! ```
//! use commentstamp::{FileHeaderCommand, Invocation, LineBuffer, SourceCommand};
//!
//! let buffer = LineBuffer::from_str("//  Old.swift\n//  Demo\nfn main() {}\n");
//! let mut invocation = Invocation::new(buffer);
//! FileHeaderCommand.perform(&mut invocation).expect("no failure path");
//! assert!(invocation.buffer.text().contains("//    Filename: Old.swift"));
//! ```

// Clippy configuration - allow common patterns
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

pub mod buffer;
pub mod commands;
pub mod config;
pub mod host;
pub mod logging;
pub mod selection;
pub mod text;

// Re-export main types
pub use buffer::LineBuffer;
pub use commands::{
    CommandError, FileHeaderCommand, FunctionCommentCommand, HeaderFields, Invocation,
    SourceCommand, run_command,
};
pub use config::Config;
pub use host::{CommandHost, FileHost, HostError, StubHost, run_on_host};
pub use selection::{Position, SelectionRange};
