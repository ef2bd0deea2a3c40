//! Offset-to-position mapping over an immutable text snapshot.
//!
//! This is a small pure-data utility with no hidden cursor state: line
//! starts are computed once from the snapshot, and every query is answered
//! from that table. Offsets are byte offsets into the snapshot.

/// A physical line of the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// 0-based line number.
    pub number: usize,
    /// Byte offset of the line's first character.
    pub start: usize,
    /// Byte offset one past the line's content, excluding the terminator.
    pub end: usize,
    /// Byte offset of the following line's start. On the last line this is
    /// the snapshot length, so `start..next_start` never reaches past it.
    pub next_start: usize,
    /// The line's text, terminator excluded.
    pub text: &'a str,
}

/// Precomputed line-start table for one text snapshot.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    text: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    /// Indexes the given snapshot.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        let mut line_starts = vec![0];
        for (i, b) in text.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self { text, line_starts }
    }

    /// Number of physical lines. Text ending in a terminator counts a final
    /// empty line, matching how editors number lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// 0-based line number containing `offset`.
    #[must_use]
    pub fn line_of_offset(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(n) => n,
            Err(n) => n - 1,
        }
    }

    /// Maps a flat byte offset to a 0-based (line, column) pair.
    #[must_use]
    pub fn position_of_offset(&self, offset: usize) -> (usize, usize) {
        let line = self.line_of_offset(offset);
        (line, offset - self.line_starts[line])
    }

    /// Maps a 0-based (line, column) pair back to a flat byte offset.
    #[must_use]
    pub fn offset_of_position(&self, line: usize, column: usize) -> usize {
        self.line_starts[line] + column
    }

    /// Descriptor for the given 0-based line number.
    #[must_use]
    pub fn line(&self, number: usize) -> Line<'a> {
        let start = self.line_starts[number];
        let next_start = self
            .line_starts
            .get(number + 1)
            .copied()
            .unwrap_or(self.text.len());
        let bytes = self.text.as_bytes();
        let mut end = next_start;
        if end > start && bytes[end - 1] == b'\n' {
            end -= 1;
            if end > start && bytes[end - 1] == b'\r' {
                end -= 1;
            }
        }
        Line {
            number,
            start,
            end,
            next_start,
            text: &self.text[start..end],
        }
    }

    /// Whether the given 0-based line number is the snapshot's last line.
    #[must_use]
    pub fn is_last_line(&self, number: usize) -> bool {
        number + 1 == self.line_starts.len()
    }
}
