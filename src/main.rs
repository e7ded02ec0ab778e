//! cstamp - Main entry point.
//!
//! Command-line host for the commentstamp editor commands.
//!
//! Usage: cstamp <COMMAND> [OPTIONS] FILE...
//!
//! Commands:
//!   header                   Rewrite the file header of each file
//!   func --sel L:S-E FILE    Insert a function comment at each selection
//!
//! Options:
//!   --version, -v    Show version
//!   --no-backup      Skip .bak backups even if configured
//!
//! Selections are given as 0-indexed line and inclusive character columns,
//! e.g. `--sel 12:4-9`.

use std::env;
use std::process;

use commentstamp::commands::{FileHeaderCommand, FunctionCommentCommand, SourceCommand};
use commentstamp::host::{FileHost, run_on_host};
use commentstamp::selection::SelectionRange;
use commentstamp::{Config, logging};

/// Crate version reported by --version.
const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.iter().any(|a| a == "--version" || a == "-v") {
        println!("cstamp v{}", VERSION);
        return;
    }

    let Some(command_name) = args.first() else {
        usage();
        process::exit(1);
    };

    // Load config; a broken rc file falls back to defaults
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("warning: could not load config: {}", e);
        Config::default()
    });

    if let Err(e) = logging::init(&config.log_config) {
        eprintln!("warning: could not initialize logging: {}", e);
    }

    let backup = config.backup && !args.iter().any(|a| a == "--no-backup");

    let result = match command_name.as_str() {
        "header" => run_header(&args[1..], backup),
        "func" => run_func(&args[1..], backup),
        other => {
            eprintln!("error: unknown command '{}'", other);
            usage();
            process::exit(1);
        }
    };

    if let Err(message) = result {
        eprintln!("error: {}", message);
        process::exit(1);
    }
}

/// Rewrites the file header of every listed file.
fn run_header(args: &[String], backup: bool) -> Result<(), String> {
    let files: Vec<&String> = args.iter().filter(|a| !a.starts_with('-')).collect();
    if files.is_empty() {
        return Err("header: no files given".to_string());
    }

    for path in files {
        apply(
            FileHost::new(path.as_str()).with_backup(backup),
            &FileHeaderCommand,
            path,
        )?;
        println!("rewrote header: {}", path);
    }
    Ok(())
}

/// Inserts function comments at the given selections of one file.
fn run_func(args: &[String], backup: bool) -> Result<(), String> {
    let mut selections = Vec::new();
    let mut files = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--sel" {
            let spec = iter
                .next()
                .ok_or_else(|| "func: --sel needs a LINE:START-END argument".to_string())?;
            let sel = parse_selection(spec)
                .ok_or_else(|| format!("func: invalid selection '{}'", spec))?;
            selections.push(sel);
        } else if !arg.starts_with('-') {
            files.push(arg);
        }
    }

    if selections.is_empty() {
        return Err("func: at least one --sel LINE:START-END is required".to_string());
    }
    let [path] = files.as_slice() else {
        return Err("func: exactly one file is required".to_string());
    };

    apply(
        FileHost::new(path.as_str())
            .with_selections(selections)
            .with_backup(backup),
        &FunctionCommentCommand,
        path,
    )?;
    println!("inserted function comment(s): {}", path);
    Ok(())
}

/// Runs one command through a file host, mapping failures to messages.
fn apply(mut host: FileHost, command: &dyn SourceCommand, path: &str) -> Result<(), String> {
    run_on_host(&mut host, command).map_err(|e| format!("{}: {}", path, e))
}

/// Parses a selection spec of the form `LINE:START-END`.
fn parse_selection(spec: &str) -> Option<SelectionRange> {
    let (line, cols) = spec.split_once(':')?;
    let (start, end) = cols.split_once('-')?;
    Some(SelectionRange::on_line(
        line.parse().ok()?,
        start.parse().ok()?,
        end.parse().ok()?,
    ))
}

/// Prints usage to stderr.
fn usage() {
    eprintln!("cstamp v{}", VERSION);
    eprintln!();
    eprintln!("Usage: cstamp <COMMAND> [OPTIONS] FILE...");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  header FILE...                  Rewrite the file header of each file");
    eprintln!("  func --sel L:S-E [...] FILE     Insert a function comment per selection");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --version, -v    Show version");
    eprintln!("  --no-backup      Skip .bak backups even if configured");
}
