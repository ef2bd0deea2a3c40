//! Core library for the `logsweep` debug-statement sweeper.
//!
//! This library provides the matching and range-computation logic for
//! stripping leftover `print(...);` and `log(...);` statements from source
//! text, plus the CLI plumbing around it.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

/// Module defining the command-line interface arguments and structs.
pub mod cli;

/// Module for executing the sweep over files and directories.
pub mod commands;

/// Module for loading configuration from `.logsweep.toml`.
pub mod config;

/// Module defining deletion ranges and the atomic edit batch.
pub mod edit;

/// Module containing the shared CLI entry point logic.
pub mod entry_point;

/// Module mapping flat byte offsets to line/column positions.
pub mod line_index;

/// Module containing the statement recognizer patterns.
pub mod patterns;

/// Module defining the reporting interface and console implementation.
pub mod report;

/// Module containing the scan-and-classify engine.
pub mod scan;

/// Module containing test utilities.
pub mod test_utils;

/// Module containing small path/display helpers.
pub mod utils;
