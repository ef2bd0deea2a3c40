//! Configuration loading for `logsweep`.
//!
//! Settings live in a `.logsweep.toml` found by walking up from the first
//! target path. Every key is optional; CLI flags override file settings.

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Name of the configuration file searched for in target ancestors.
pub const CONFIG_FILENAME: &str = ".logsweep.toml";

/// Top-level configuration struct.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct Config {
    /// The main configuration section for logsweep.
    #[serde(default)]
    pub logsweep: LogsweepConfig,
    /// The path to the configuration file this was loaded from.
    /// `None` if using defaults or programmatic config.
    #[serde(skip)]
    pub config_file_path: Option<std::path::PathBuf>,
}

/// Configuration options for logsweep.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct LogsweepConfig {
    /// Statement keywords to sweep (default: `print`, `log`).
    pub keywords: Option<Vec<String>>,
    /// File extensions scanned during directory walks (default: `dart`).
    pub extensions: Option<Vec<String>>,
    /// Folders to exclude from directory walks.
    pub exclude_folders: Option<Vec<String>>,
}

impl Config {
    /// Loads configuration from the current directory upward.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from_path(Path::new("."))
    }

    /// Loads configuration starting from a specific path and traversing up.
    /// Returns defaults when no readable configuration file is found.
    #[must_use]
    pub fn load_from_path(path: &Path) -> Self {
        let mut current = path.to_path_buf();
        if current.is_file() {
            current.pop();
        }

        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                if let Ok(content) = fs::read_to_string(&candidate) {
                    if let Ok(mut config) = toml::from_str::<Config>(&content) {
                        config.config_file_path = Some(candidate);
                        return config;
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        Config::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_path_no_config() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from_path(dir.path());
        assert!(config.logsweep.keywords.is_none());
        assert!(config.config_file_path.is_none());
    }

    #[test]
    fn test_load_from_path_with_config() {
        let dir = TempDir::new().unwrap();
        let mut file = std::fs::File::create(dir.path().join(CONFIG_FILENAME)).unwrap();
        writeln!(
            file,
            r#"[logsweep]
keywords = ["print", "log", "debugPrint"]
extensions = ["dart", "txt"]
"#
        )
        .unwrap();

        let config = Config::load_from_path(dir.path());
        assert_eq!(
            config.logsweep.keywords.as_deref(),
            Some(&["print".to_owned(), "log".to_owned(), "debugPrint".to_owned()][..])
        );
        assert_eq!(
            config.logsweep.extensions.as_deref(),
            Some(&["dart".to_owned(), "txt".to_owned()][..])
        );
        assert!(config.config_file_path.is_some());
    }

    #[test]
    fn test_load_from_path_traverses_up() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("lib").join("src");
        std::fs::create_dir_all(&nested).unwrap();

        let mut file = std::fs::File::create(dir.path().join(CONFIG_FILENAME)).unwrap();
        writeln!(
            file,
            r#"[logsweep]
exclude_folders = ["generated"]
"#
        )
        .unwrap();

        let config = Config::load_from_path(&nested);
        assert_eq!(
            config.logsweep.exclude_folders.as_deref(),
            Some(&["generated".to_owned()][..])
        );
    }

    #[test]
    fn test_load_from_file_path() {
        let dir = TempDir::new().unwrap();
        let mut file = std::fs::File::create(dir.path().join(CONFIG_FILENAME)).unwrap();
        writeln!(file, "[logsweep]\nkeywords = [\"trace\"]").unwrap();

        let target = dir.path().join("main.dart");
        std::fs::write(&target, "trace('x');\n").unwrap();

        let config = Config::load_from_path(&target);
        assert_eq!(
            config.logsweep.keywords.as_deref(),
            Some(&["trace".to_owned()][..])
        );
    }

    #[test]
    fn test_malformed_config_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "not [valid toml").unwrap();

        let config = Config::load_from_path(dir.path());
        assert!(config.logsweep.keywords.is_none());
    }
}
