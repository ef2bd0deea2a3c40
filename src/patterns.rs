//! Lexical recognizers for removable logging statements.
//!
//! A removable statement is a full source line (possibly with leading and
//! trailing whitespace) of the form `<keyword>(<anything>);`. The argument
//! span is matched non-greedily and may contain arbitrary characters,
//! including line breaks, so statements wrapped across several lines match
//! as one occurrence. The recognizer is purely lexical: it does not balance
//! parentheses, so an argument whose text contains `);` at the end of a line
//! can be mis-matched. That is a documented limitation, not a bug.

use regex::Regex;
use std::sync::OnceLock;

/// Statement keywords swept by default.
pub const DEFAULT_KEYWORDS: &[&str] = &["print", "log"];

/// Regex source for a single keyword's statement rule.
///
/// Anchored to line start with only whitespace before the keyword, and to
/// line end with only whitespace after the semicolon. The anchoring is what
/// keeps `// print(...);` from matching (the `//` is non-whitespace before
/// the keyword); there is no comment awareness beyond that.
fn statement_source(keyword: &str) -> String {
    format!(r"^\s*{}\s*\([\s\S]*?\)\s*;\s*$", regex::escape(keyword))
}

/// A compiled set of statement recognizers, combined into one alternation
/// so the document is scanned in a single pass.
#[derive(Debug, Clone)]
pub struct PatternSet {
    combined: Regex,
}

impl PatternSet {
    /// Builds a pattern set for the given keywords.
    ///
    /// Keywords are regex-escaped, so any literal function name is safe.
    /// An empty list falls back to [`DEFAULT_KEYWORDS`].
    ///
    /// # Errors
    ///
    /// Returns an error if the combined pattern fails to compile.
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Result<Self, regex::Error> {
        let arms: Vec<String> = if keywords.is_empty() {
            DEFAULT_KEYWORDS.iter().map(|k| statement_source(k)).collect()
        } else {
            keywords
                .iter()
                .map(|k| statement_source(k.as_ref()))
                .collect()
        };
        let combined = format!("(?m)(?:{})", arms.join(")|(?:"));
        Ok(Self {
            combined: Regex::new(&combined)?,
        })
    }

    /// The combined alternation used for scanning.
    #[must_use]
    pub fn regex(&self) -> &Regex {
        &self.combined
    }
}

/// The built-in `print`/`log` pattern set.
///
/// # Panics
///
/// Panics if the built-in pattern is invalid (cannot happen with the
/// hardcoded keywords).
pub fn default_set() -> &'static PatternSet {
    static SET: OnceLock<PatternSet> = OnceLock::new();
    #[allow(clippy::expect_used)]
    SET.get_or_init(|| {
        PatternSet::new(DEFAULT_KEYWORDS).expect("Invalid built-in statement pattern")
    })
}
