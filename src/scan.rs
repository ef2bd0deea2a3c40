//! Scan-and-classify engine.
//!
//! One pass over the snapshot produces both the findings list (for the
//! dry-run report) and the deletion batch (for apply mode), so the two
//! modes can never disagree about which spans would be removed.

use crate::edit::{Deletion, EditBatch};
use crate::line_index::LineIndex;
use crate::patterns::PatternSet;
use serde::Serialize;

/// A located statement, described by its containing line.
///
/// The containing line is the line holding the match's start offset only;
/// intermediate and end lines of a multi-line statement are never consulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// 1-based line number of the statement's first line.
    pub line: usize,
    /// Trimmed text of the containing line.
    pub text: String,
}

/// Result of scanning one snapshot: findings in document order plus the
/// deletion batch that would remove them.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    /// Located statements, in document order.
    pub findings: Vec<Finding>,
    /// Deletions to apply, one per finding, offsets against the snapshot.
    pub deletions: EditBatch,
}

impl ScanOutcome {
    /// Whether the scan found nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Number of statements found.
    #[must_use]
    pub fn count(&self) -> usize {
        self.findings.len()
    }
}

/// Scans a snapshot for removable statements and computes deletion ranges.
///
/// For each non-overlapping match, in document order:
/// - if the trimmed containing-line text equals the trimmed match text, the
///   statement is the line's only content and the whole line is removed:
///   from the line's start to the next line's start (absorbing the
///   terminator), or just the line's content span on the last line;
/// - otherwise only the matched span is removed, leaving the rest of the
///   line untouched.
#[must_use]
pub fn scan(text: &str, patterns: &PatternSet) -> ScanOutcome {
    let index = LineIndex::new(text);
    let mut outcome = ScanOutcome::default();

    for m in patterns.regex().find_iter(text) {
        let line_number = index.line_of_offset(m.start());
        let line = index.line(line_number);

        if line.text.trim() == m.as_str().trim() {
            if index.is_last_line(line_number) {
                outcome.deletions.push(Deletion::new(line.start, line.end));
            } else {
                outcome
                    .deletions
                    .push(Deletion::new(line.start, line.next_start));
            }
        } else {
            outcome.deletions.push(Deletion::new(m.start(), m.end()));
        }

        outcome.findings.push(Finding {
            line: line_number + 1,
            text: line.text.trim().to_owned(),
        });
    }

    outcome
}
