//! Command-line interface definition.

use clap::Parser;
use std::path::PathBuf;

/// Help text for configuration file options, shown at the bottom of --help.
const CONFIG_HELP: &str = "\
CONFIGURATION FILE (.logsweep.toml):
  Create this file in your project root to set defaults.

  [logsweep]
  keywords = [\"print\", \"log\"]      # Statement keywords to sweep
  extensions = [\"dart\"]            # File extensions scanned in directories
  exclude_folders = [\"build\", \".dart_tool\"]
";

/// Command line interface configuration using `clap`.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "logsweep - Strip leftover print()/log() debug statements from source files",
    long_about = None,
    after_help = CONFIG_HELP
)]
pub struct Cli {
    /// Files or directories to sweep.
    /// Directories are walked gitignore-aware and filtered by extension;
    /// files named explicitly are always scanned.
    /// When no paths are provided, defaults to the current directory.
    pub paths: Vec<PathBuf>,

    /// Apply the deletions to files.
    /// Without this flag the run is a dry-run preview that lists every
    /// statement that would be removed, modifying nothing.
    #[arg(short = 'a', long)]
    pub apply: bool,

    /// File extensions to scan in directory walks (repeatable).
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Statement keywords to sweep instead of the built-in print/log set
    /// (repeatable).
    #[arg(long = "keyword", value_name = "NAME")]
    pub keywords: Vec<String>,

    /// Folders to exclude from directory walks.
    #[arg(long, alias = "exclude-folder")]
    pub exclude_folders: Vec<String>,

    /// Output raw JSON instead of the console report.
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output (shows files being scanned).
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode: show only summary messages, no per-line findings.
    #[arg(long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["logsweep"]).unwrap();
        assert!(cli.paths.is_empty());
        assert!(!cli.apply);
        assert!(!cli.json);
        assert!(cli.keywords.is_empty());
    }

    #[test]
    fn test_apply_and_paths() {
        let cli = Cli::try_parse_from(["logsweep", "--apply", "lib", "test"]).unwrap();
        assert!(cli.apply);
        assert_eq!(cli.paths.len(), 2);
    }

    #[test]
    fn test_repeatable_flags() {
        let cli = Cli::try_parse_from([
            "logsweep",
            "--ext",
            "dart",
            "--ext",
            "js",
            "--keyword",
            "debugPrint",
            "--exclude-folder",
            "build",
        ])
        .unwrap();
        assert_eq!(cli.extensions, vec!["dart", "js"]);
        assert_eq!(cli.keywords, vec!["debugPrint"]);
        assert_eq!(cli.exclude_folders, vec!["build"]);
    }
}
