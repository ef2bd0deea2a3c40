//! Sweep execution over files and directories.
//!
//! Both modes run the exact same scan; apply mode additionally feeds the
//! deletion batch back into the file, dry-run mode only renders the
//! findings. A file's edits are computed against its full snapshot and
//! written back in one piece, so a failed batch leaves the file untouched.

use crate::edit::EditError;
use crate::patterns::PatternSet;
use crate::report::Reporter;
use crate::scan::{scan, Finding};
use crate::utils::{is_excluded, normalize_display_path};

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Options for a sweep run.
#[derive(Debug, Clone)]
pub struct SweepOptions {
    /// Apply deletions to files; without this the run is a dry-run preview.
    pub apply: bool,
    /// Extensions scanned during directory walks.
    pub extensions: Vec<String>,
    /// Folder names excluded from directory walks.
    pub exclude_folders: Vec<String>,
    /// Verbose output (report clean files too).
    pub verbose: bool,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            apply: false,
            extensions: vec!["dart".to_owned()],
            exclude_folders: Vec::new(),
            verbose: false,
        }
    }
}

/// Per-file result of a sweep run.
#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    /// Normalized display path of the file.
    pub file: String,
    /// Number of statements found in the file.
    pub statements: usize,
    /// The findings, in document order.
    pub findings: Vec<Finding>,
    /// Whether deletions were applied to the file.
    pub applied: bool,
}

/// Runs a sweep over the given paths.
///
/// Returns one [`FileOutcome`] per file with at least one finding (in apply
/// mode, only files whose batch landed). Files that cannot be read are
/// skipped with a message; a batch failure is surfaced as an error message
/// and the file is left untouched.
///
/// # Errors
///
/// Returns an error if the reporter's sink fails.
pub fn run_sweep(
    paths: &[PathBuf],
    patterns: &PatternSet,
    options: &SweepOptions,
    reporter: &mut dyn Reporter,
) -> Result<Vec<FileOutcome>> {
    if options.apply {
        reporter.show_message(&"Removing log statements...".cyan().to_string())?;
    } else {
        reporter.show_message(
            &"[DRY-RUN] Log statements that would be removed:"
                .yellow()
                .to_string(),
        )?;
    }

    let targets = collect_targets(paths, options);
    let mut outcomes = Vec::new();
    let mut total = 0usize;

    for path in targets {
        let display = normalize_display_path(&path);
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                reporter.show_message(&format!("  {} {display}: {e}", "Skip:".yellow()))?;
                continue;
            }
        };

        let outcome = scan(&content, patterns);
        if outcome.is_empty() {
            if options.verbose {
                reporter.show_message(&format!("  {display}: clean"))?;
            }
            continue;
        }

        if options.apply {
            match sweep_file(&path, &content, &outcome.deletions) {
                Ok(()) => {
                    total += outcome.count();
                    reporter.show_message(&format!(
                        "  {} {display} ({} removed)",
                        "Swept:".green(),
                        outcome.count()
                    ))?;
                    outcomes.push(FileOutcome {
                        file: display,
                        statements: outcome.count(),
                        findings: outcome.findings,
                        applied: true,
                    });
                }
                Err(e) => {
                    reporter.show_message(&format!("  {} {display}: {e}", "Error:".red()))?;
                }
            }
        } else {
            total += outcome.count();
            reporter.append_line(&format!("{display}:"))?;
            for finding in &outcome.findings {
                reporter.append_line(&format!("  Line {}: {}", finding.line, finding.text))?;
            }
            outcomes.push(FileOutcome {
                file: display,
                statements: outcome.count(),
                findings: outcome.findings,
                applied: false,
            });
        }
    }

    if total == 0 {
        reporter.show_message("No log statements found to remove.")?;
    } else if options.apply {
        reporter.show_message(
            &format!("Removed {total} log statement(s).")
                .green()
                .to_string(),
        )?;
    } else {
        reporter.show_message(
            &format!("Found {total} log statement(s) that would be removed.")
                .yellow()
                .to_string(),
        )?;
    }
    reporter.reveal()?;

    Ok(outcomes)
}

/// Applies a deletion batch to one file. The batch is validated and applied
/// against the in-memory snapshot first; only a fully successful result is
/// written back.
fn sweep_file(
    path: &Path,
    content: &str,
    deletions: &crate::edit::EditBatch,
) -> std::result::Result<(), SweepFileError> {
    let swept = deletions.apply(content)?;
    fs::write(path, swept)?;
    Ok(())
}

#[derive(Debug, thiserror::Error)]
enum SweepFileError {
    #[error("{0}")]
    Edit(#[from] EditError),
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Expands the target paths into a sorted list of files to scan.
///
/// Explicitly named files are always included; directories are walked
/// gitignore-aware, filtered by extension and the exclusion list.
fn collect_targets(paths: &[PathBuf], options: &SweepOptions) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            files.push(path.clone());
            continue;
        }
        if !path.is_dir() {
            continue;
        }
        for entry in ignore::WalkBuilder::new(path).build().flatten() {
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            let candidate = entry.path();
            let excluded = candidate.components().any(|c| {
                is_excluded(&c.as_os_str().to_string_lossy(), &options.exclude_folders)
            });
            if excluded {
                continue;
            }
            if matches_extension(candidate, &options.extensions) {
                files.push(candidate.to_path_buf());
            }
        }
    }

    files.sort();
    files.dedup();
    files
}

fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(std::ffi::OsStr::to_str)
        .is_some_and(|ext| extensions.iter().any(|e| e == ext))
}
