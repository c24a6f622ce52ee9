//! Forward-only replay of gap text.

use super::gaps::Gap;

#[derive(Debug, Clone, Copy)]
struct PendingLine<'a> {
    line: usize,
    text: &'a str,
}

impl PendingLine<'_> {
    fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Flattened gap lines, consumed strictly in increasing line order.
///
/// Once a line has been handed out (or skipped over) it is never returned
/// again, which keeps every comment in the output exactly once.
#[derive(Debug, Clone)]
pub struct CommentCursor<'a> {
    pending: Vec<PendingLine<'a>>,
    next: usize,
}

impl<'a> CommentCursor<'a> {
    /// Flattens `gaps`: a gap of `k` lines anchored at `L` yields lines `L..L+k`.
    #[must_use]
    pub fn new(gaps: &[Gap<'a>]) -> Self {
        let pending = gaps
            .iter()
            .flat_map(|gap| {
                gap.lines
                    .iter()
                    .enumerate()
                    .map(move |(i, &text)| PendingLine {
                        line: gap.line + i,
                        text,
                    })
            })
            .collect();
        Self { pending, next: 0 }
    }

    /// Returns the same-line comment on `line`, trimmed, if the next pending
    /// entry sits on that line.
    ///
    /// A leading `;` statement separator is dropped; an entry with nothing
    /// else on `line` is consumed but yields `None`.
    pub fn at(&mut self, line: usize) -> Option<&'a str> {
        let entry = *self
            .pending
            .get(self.next)
            .filter(|entry| entry.line == line)?;
        self.next += 1;
        let text = entry.text.trim().trim_start_matches(';').trim_start();
        (!text.is_empty()).then_some(text)
    }

    /// Consumes every entry before `line` and returns it with blank runs
    /// collapsed.
    ///
    /// `previous` is the last line already emitted, `None` if nothing was.
    /// A leading blank run is dropped when `previous` is blank or absent, and
    /// becomes one blank line otherwise. A blank run between comments becomes
    /// one blank line, and so does a trailing run: the caller is about to
    /// emit the statement on `line`.
    pub fn before(&mut self, line: usize, previous: Option<&str>) -> Vec<&'a str> {
        let end = self.pending[self.next..]
            .iter()
            .position(|entry| entry.line >= line)
            .map_or(self.pending.len(), |offset| self.next + offset);
        let consumed = &self.pending[self.next..end];
        self.next = end;
        collapse(consumed, previous, true)
    }

    /// Consumes everything still pending, collapsing blank runs like
    /// [`CommentCursor::before`] but without a trailing blank line.
    pub fn remaining(&mut self, previous: Option<&str>) -> Vec<&'a str> {
        let consumed = &self.pending[self.next..];
        self.next = self.pending.len();
        collapse(consumed, previous, false)
    }

    /// Whether every entry has been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.next == self.pending.len()
    }
}

fn collapse<'a>(
    entries: &[PendingLine<'a>],
    previous: Option<&str>,
    keep_trailing_blank: bool,
) -> Vec<&'a str> {
    let follows_text = previous.is_some_and(|line| !line.trim().is_empty());
    let mut lines = Vec::new();
    let mut blank_run = false;

    for entry in entries {
        if entry.is_blank() {
            blank_run = true;
            continue;
        }
        if blank_run && (!lines.is_empty() || follows_text) {
            lines.push("");
        }
        blank_run = false;
        lines.push(entry.text);
    }

    if blank_run && keep_trailing_blank && (!lines.is_empty() || follows_text) {
        lines.push("");
    }
    lines
}
