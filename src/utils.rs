//! Small path and exclusion helpers shared across commands.

use std::path::Path;

/// Normalizes a path for display: forward slashes, no leading `./`.
///
/// ```
/// use std::path::Path;
/// use logsweep::utils::normalize_display_path;
///
/// assert_eq!(normalize_display_path(Path::new("./src/main.dart")), "src/main.dart");
/// assert_eq!(normalize_display_path(Path::new(".\\lib\\app.dart")), "lib/app.dart");
/// ```
#[must_use]
pub fn normalize_display_path(path: &Path) -> String {
    let s = path.to_string_lossy();
    let normalized = s.replace('\\', "/");
    normalized
        .strip_prefix("./")
        .unwrap_or(&normalized)
        .to_owned()
}

/// Checks if a name matches any exclusion pattern.
/// Supports exact matching and wildcard patterns starting with `*.`.
#[must_use]
pub fn is_excluded(name: &str, excludes: &[String]) -> bool {
    for exclude in excludes {
        if exclude.starts_with("*.") {
            if name.ends_with(&exclude[1..]) {
                return true;
            }
        } else if name == exclude {
            return true;
        }
    }
    false
}
