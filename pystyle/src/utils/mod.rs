//! Utilities module for pystyle.
//!
//! This module provides helpers shared by the styler and the file driver.

mod paths;

pub use paths::{collect_source_files, is_excluded, normalize_display_path};

use ruff_text_size::TextSize;

/// A utility struct to convert byte offsets to line/column positions.
///
/// The parser works with byte offsets, while the styler reasons about
/// 1-based lines and 0-based byte columns.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Stores the byte index of the start of each line.
    line_starts: Vec<usize>,
    /// Total length of the indexed source in bytes.
    len: usize,
}

impl LineIndex {
    /// Creates a new `LineIndex` by scanning the source code for newlines.
    /// Uses byte iteration since '\n' is always a single byte in UTF-8.
    #[must_use]
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, byte) in source.as_bytes().iter().enumerate() {
            if *byte == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self {
            line_starts,
            len: source.len(),
        }
    }

    /// Converts a `TextSize` (byte offset) to a 1-indexed line number.
    #[must_use]
    pub fn line_index(&self, offset: TextSize) -> usize {
        let offset = offset.to_usize();
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line + 1,
            Err(line) => line,
        }
    }

    /// Converts a `TextSize` to a `(line, column)` pair, where the line is
    /// 1-indexed and the column is the 0-indexed byte offset within the line.
    ///
    /// Returns `None` when the offset lies past the end of the source.
    #[must_use]
    pub fn line_column(&self, offset: TextSize) -> Option<(usize, usize)> {
        if offset.to_usize() > self.len {
            return None;
        }
        let line = self.line_index(offset);
        let line_start = self.line_starts[line - 1];
        Some((line, offset.to_usize() - line_start))
    }

    /// Number of physical lines in the indexed source.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
