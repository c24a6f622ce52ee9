//! Line-oriented view of a source file and the span slicing helper.

use super::node::Position;

/// The input file as an ordered sequence of lines, addressed by 1-based line
/// numbers. Line terminators are not part of the stored lines.
#[derive(Debug, Clone)]
pub struct SourceLines<'a> {
    lines: Vec<&'a str>,
    line_ending: &'static str,
}

/// Text between two positions, anchored at its first retained line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slice<'a> {
    /// Absolute line number of `lines[0]`.
    pub line: usize,
    /// The retained lines, in order.
    pub lines: Vec<&'a str>,
}

impl<'a> SourceLines<'a> {
    /// Splits `source` into lines.
    ///
    /// The line ending used to rebuild the document is taken from the first
    /// line: `\r\n` if it ends that way, `\n` otherwise.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        let line_ending = match source.split_once('\n') {
            Some((first, _)) if first.ends_with('\r') => "\r\n",
            _ => "\n",
        };
        let lines = source
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        Self { lines, line_ending }
    }

    /// Number of lines. A source ending with a newline has a final empty line.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Always false: even an empty source has one (empty) line.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The line terminator output should be joined with.
    #[must_use]
    pub fn line_ending(&self) -> &'static str {
        self.line_ending
    }

    /// Returns the 1-based `line`, or an empty string past the end.
    #[must_use]
    pub fn line(&self, line: usize) -> &'a str {
        line.checked_sub(1)
            .and_then(|i| self.lines.get(i))
            .copied()
            .unwrap_or("")
    }

    /// Position just past the last character of the file.
    #[must_use]
    pub fn end(&self) -> Position {
        Position::new(self.len(), self.line(self.len()).len())
    }

    /// Slices the text between `from` (inclusive) and `to` (exclusive).
    ///
    /// Within a single line the column-bounded substring is taken. Across
    /// lines: the tail of the first line, every interior line in full, and the
    /// head of the last line. An empty first-line tail is dropped and the
    /// anchor moves to the next line; an empty last-line head is dropped.
    #[must_use]
    pub fn slice(&self, from: Position, to: Position) -> Slice<'a> {
        let mut slice = Slice {
            line: from.line,
            lines: Vec::new(),
        };
        if to <= from {
            return slice;
        }

        if from.line == to.line {
            let text = columns(self.line(from.line), from.column, to.column);
            if !text.is_empty() {
                slice.lines.push(text);
            }
            return slice;
        }

        let head = columns(self.line(from.line), from.column, usize::MAX);
        if head.is_empty() {
            slice.line += 1;
        } else {
            slice.lines.push(head);
        }
        slice
            .lines
            .extend((from.line + 1..to.line).map(|line| self.line(line)));
        let tail = columns(self.line(to.line), 0, to.column);
        if !tail.is_empty() {
            slice.lines.push(tail);
        }
        slice
    }
}

/// Byte-column substring of `line`, clamped to the line and to char boundaries.
fn columns(line: &str, start: usize, end: usize) -> &str {
    let end = floor_char_boundary(line, end.min(line.len()));
    let start = floor_char_boundary(line, start.min(end));
    &line[start..end]
}

fn floor_char_boundary(line: &str, mut index: usize) -> usize {
    while !line.is_char_boundary(index) {
        index -= 1;
    }
    index
}
