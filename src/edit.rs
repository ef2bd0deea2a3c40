//! Byte-range deletion batch.
//!
//! All deletion ranges are computed against the original snapshot, then
//! applied as one batch in reverse start order so earlier deletions never
//! invalidate later offsets. The batch is all-or-nothing: validation
//! failures leave the snapshot untouched.

use thiserror::Error;

/// A single byte range to remove from the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deletion {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Deletion {
    /// Creates a deletion covering `start..end`.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the range being removed.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the range is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether this range overlaps another.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Error during batch validation or application.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// Two deletion ranges overlap.
    #[error("overlapping deletions at indices {first} and {second}")]
    Overlap {
        /// Index of the first overlapping deletion.
        first: usize,
        /// Index of the second overlapping deletion.
        second: usize,
    },
    /// A deletion range reaches past the end of the snapshot.
    #[error("deletion {index} out of bounds: end {end} > snapshot length {len}")]
    OutOfBounds {
        /// Index of the bad deletion.
        index: usize,
        /// End offset of the bad deletion.
        end: usize,
        /// Snapshot length.
        len: usize,
    },
    /// A deletion range does not fall on character boundaries.
    #[error("deletion {index} does not fall on a character boundary")]
    NotCharBoundary {
        /// Index of the bad deletion.
        index: usize,
    },
}

/// An ordered batch of deletions applied atomically against one snapshot.
#[derive(Debug, Clone, Default)]
pub struct EditBatch {
    deletions: Vec<Deletion>,
}

impl EditBatch {
    /// Creates an empty batch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a deletion.
    pub fn push(&mut self, deletion: Deletion) {
        self.deletions.push(deletion);
    }

    /// Number of queued deletions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.deletions.len()
    }

    /// Whether the batch is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deletions.is_empty()
    }

    /// The queued deletions, in insertion order.
    #[must_use]
    pub fn deletions(&self) -> &[Deletion] {
        &self.deletions
    }

    /// Validates the batch against a snapshot without applying it.
    ///
    /// # Errors
    ///
    /// Returns an error if any range is out of bounds, off a character
    /// boundary, or overlaps another range.
    pub fn validate(&self, text: &str) -> Result<(), EditError> {
        for (i, d) in self.deletions.iter().enumerate() {
            if d.end > text.len() {
                return Err(EditError::OutOfBounds {
                    index: i,
                    end: d.end,
                    len: text.len(),
                });
            }
            if !text.is_char_boundary(d.start) || !text.is_char_boundary(d.end) {
                return Err(EditError::NotCharBoundary { index: i });
            }
        }
        for i in 0..self.deletions.len() {
            for j in (i + 1)..self.deletions.len() {
                if self.deletions[i].overlaps(&self.deletions[j]) {
                    return Err(EditError::Overlap { first: i, second: j });
                }
            }
        }
        Ok(())
    }

    /// Applies the batch and returns the modified snapshot.
    ///
    /// Deletions are applied in reverse start order so the offsets, all
    /// computed against the original snapshot, remain valid throughout.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails; the snapshot is not modified.
    pub fn apply(&self, text: &str) -> Result<String, EditError> {
        self.validate(text)?;

        let mut sorted = self.deletions.clone();
        sorted.sort_by(|a, b| b.start.cmp(&a.start));

        let mut result = text.to_owned();
        for d in sorted {
            result.replace_range(d.start..d.end, "");
        }
        Ok(result)
    }
}
