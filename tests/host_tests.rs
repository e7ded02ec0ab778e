//! Tests for the host layer: file-backed runs and the completion contract.

use std::fs;

use commentstamp::commands::file_header::COMMENT_BORDER;
use commentstamp::commands::{FileHeaderCommand, FunctionCommentCommand};
use commentstamp::host::{CommandHost, FileHost, StubHost, run_on_host};
use commentstamp::{LineBuffer, SelectionRange, run_command};
use tempfile::tempdir;

/// Test that the file host rewrites a file in place.
#[test]
fn test_file_host_rewrites_file() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("demo.swift");
    fs::write(&path, "//  Demo.swift\n//  Proj\nlet x = 1\n").expect("seed file");

    let mut host = FileHost::new(&path);
    run_on_host(&mut host, &FileHeaderCommand).expect("run succeeds");

    let written = fs::read_to_string(&path).expect("file readable");
    assert!(written.starts_with(COMMENT_BORDER), "Header written back");
    assert!(written.contains("//    Filename: Demo.swift\n"));
    assert!(written.ends_with("let x = 1\n"), "Code preserved");
    assert!(
        !path.with_extension("swift.bak").exists(),
        "No backup by default"
    );
}

/// Test that backups keep the original content.
#[test]
fn test_file_host_backup() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("demo.swift");
    let original = "// old header\nlet x = 1\n";
    fs::write(&path, original).expect("seed file");

    let mut host = FileHost::new(&path).with_backup(true);
    run_on_host(&mut host, &FileHeaderCommand).expect("run succeeds");

    let backup = dir.path().join("demo.swift.bak");
    assert_eq!(
        fs::read_to_string(&backup).expect("backup exists"),
        original,
        "Backup holds the pre-rewrite content"
    );
}

/// Test that a missing file surfaces as an error without writes.
#[test]
fn test_file_host_missing_file() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("absent.swift");

    let mut host = FileHost::new(&path);
    assert!(
        run_on_host(&mut host, &FileHeaderCommand).is_err(),
        "Missing file is a host error"
    );
    assert!(!path.exists(), "Nothing was created");
}

/// Test running the function comment command through a file host.
#[test]
fn test_file_host_function_comment() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("lib.rs");
    fs::write(&path, "  fn work() {}\n").expect("seed file");

    let mut host =
        FileHost::new(&path).with_selections(vec![SelectionRange::on_line(0, 5, 8)]);
    run_on_host(&mut host, &FunctionCommentCommand).expect("run succeeds");

    let written = fs::read_to_string(&path).expect("file readable");
    assert!(written.contains("  //      Function: work\n"));
    assert!(written.ends_with("  fn work() {}\n"));
}

/// Test that the stub host observes exactly one completion per run.
#[test]
fn test_stub_host_single_completion() {
    let mut host = StubHost::new("code\n");
    run_on_host(&mut host, &FileHeaderCommand).expect("run succeeds");

    assert_eq!(host.completions, 1);
    assert!(!host.failed);
    assert!(
        host.completed.expect("buffer returned").ends_with("code\n"),
        "Mutated buffer comes back through completion"
    );
}

/// Test the raw completion-callback contract.
#[test]
fn test_run_command_callback_contract() {
    let mut invocation =
        commentstamp::Invocation::new(LineBuffer::from_str("fn main() {}\n"));
    let mut calls = 0;
    run_command(&FileHeaderCommand, &mut invocation, |err| {
        calls += 1;
        assert!(err.is_none());
    })
    .expect("run succeeds");

    assert_eq!(calls, 1, "Completion callback fires exactly once");
    assert_eq!(invocation.buffer.len(), 15, "Header landed in the buffer");
}

/// Test that a stub host invocation carries the configured selections.
#[test]
fn test_stub_host_reports_selections() {
    let mut host = StubHost::new("fn a() {}\n");
    host.selections = vec![SelectionRange::on_line(0, 3, 3)];

    let invocation = host.invocation().expect("invocation");
    assert_eq!(invocation.selections.len(), 1);
}
