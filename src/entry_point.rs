//! Shared CLI entry point.
//!
//! `main.rs` delegates here so the whole argument-to-exit-code path can be
//! exercised in tests with a captured writer.

use crate::cli::Cli;
use crate::commands::{run_sweep, SweepOptions};
use crate::config::Config;
use crate::patterns::{PatternSet, DEFAULT_KEYWORDS};
use crate::report::ConsoleReporter;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Runs logsweep with the given arguments, writing output to stdout.
///
/// # Errors
///
/// Returns an error if command execution fails.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    run_with_args_to(args, &mut std::io::stdout())
}

/// Runs logsweep with the given arguments, writing output to the specified
/// writer. This is the testable version of [`run_with_args`].
///
/// # Errors
///
/// Returns an error if command execution fails.
pub fn run_with_args_to<W: std::io::Write>(args: Vec<String>, writer: &mut W) -> Result<i32> {
    let mut program_args = vec!["logsweep".to_owned()];
    program_args.extend(args);
    let cli = match Cli::try_parse_from(program_args) {
        Ok(c) => c,
        Err(e) => {
            match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    write!(writer, "{e}")?;
                    writer.flush()?;
                    return Ok(0);
                }
                _ => {
                    eprint!("{e}");
                    return Ok(1);
                }
            }
        }
    };

    let paths = if cli.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        cli.paths
    };

    for path in &paths {
        if !path.exists() {
            eprintln!(
                "Error: The file or directory '{}' does not exist.",
                path.display()
            );
            return Ok(1);
        }
    }

    let config = Config::load_from_path(&paths[0]);

    // CLI flags override the config file, which overrides built-ins.
    let keywords = resolve_list(cli.keywords, config.logsweep.keywords, DEFAULT_KEYWORDS);
    let extensions = resolve_list(cli.extensions, config.logsweep.extensions, &["dart"]);
    let mut exclude_folders = config.logsweep.exclude_folders.unwrap_or_default();
    exclude_folders.extend(cli.exclude_folders);

    let patterns = PatternSet::new(&keywords)?;

    if cli.verbose && !cli.json {
        eprintln!("[VERBOSE] logsweep v{}", env!("CARGO_PKG_VERSION"));
        if let Some(ref path) = config.config_file_path {
            eprintln!("[VERBOSE] Config: {}", path.display());
        }
        eprintln!("[VERBOSE] Keywords: {keywords:?}");
        eprintln!("[VERBOSE] Extensions: {extensions:?}");
    }

    let options = SweepOptions {
        apply: cli.apply,
        extensions,
        exclude_folders,
        verbose: cli.verbose,
    };

    if cli.json {
        // Skip and error messages must still be surfaced in JSON mode;
        // route them to stderr so stdout stays machine-readable.
        let mut reporter = ConsoleReporter::new(std::io::stderr(), true);
        let outcomes = run_sweep(&paths, &patterns, &options, &mut reporter)?;
        writeln!(writer, "{}", serde_json::to_string_pretty(&outcomes)?)?;
    } else {
        let mut reporter = ConsoleReporter::new(&mut *writer, cli.quiet);
        run_sweep(&paths, &patterns, &options, &mut reporter)?;
    }

    Ok(0)
}

fn resolve_list(
    cli_values: Vec<String>,
    config_values: Option<Vec<String>>,
    defaults: &[&str],
) -> Vec<String> {
    if !cli_values.is_empty() {
        return cli_values;
    }
    match config_values {
        Some(values) if !values.is_empty() => values,
        _ => defaults.iter().map(|s| (*s).to_owned()).collect(),
    }
}
