//! Discovery of the raw text the syntax tree does not cover.
//!
//! Comments and blank lines between top-level statements are invisible in the
//! tree. Everything between the end of one statement and the start of the next
//! is collected as a [`Gap`] so it can be replayed later.

use super::node::{Position, SyntaxNode};
use super::source::SourceLines;

/// A span of raw text between two statements, anchored at its first line.
///
/// Each entry is either comment text (possibly after code, for a same-line
/// comment) or an empty/whitespace-only string for a blank line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gap<'a> {
    /// Absolute line number of `lines[0]`.
    pub line: usize,
    /// Raw lines of the gap, in order.
    pub lines: Vec<&'a str>,
}

/// Extracts every gap between consecutive top-level statements, plus the text
/// before the first statement and after the last one.
///
/// Definitions start at their first decorator. Every statement, whatever its
/// kind, moves the cursor past its own span, so no character lands both in a
/// gap and in a statement.
#[must_use]
pub fn find_gaps<'a>(nodes: &[SyntaxNode], lines: &SourceLines<'a>) -> Vec<Gap<'a>> {
    let mut gaps = Vec::new();
    let cursor = nodes.iter().fold(Position::START, |cursor, node| {
        gaps.extend(gap_between(lines, cursor, node.effective_start()));
        node.end.max(cursor)
    });
    gaps.extend(gap_between(lines, cursor, lines.end()));
    gaps
}

fn gap_between<'a>(lines: &SourceLines<'a>, from: Position, to: Position) -> Option<Gap<'a>> {
    let slice = lines.slice(from, to);
    (!slice.lines.is_empty()).then_some(Gap {
        line: slice.line,
        lines: slice.lines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::node::parse_nodes;

    fn gaps_of(source: &str) -> Vec<(usize, Vec<String>)> {
        let lines = SourceLines::new(source);
        let nodes = parse_nodes(source).unwrap();
        find_gaps(&nodes, &lines)
            .into_iter()
            .map(|gap| {
                (
                    gap.line,
                    gap.lines.into_iter().map(str::to_owned).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_comment_between_functions() {
        let gaps = gaps_of("def a():\n    pass\n# hello\ndef b():\n    pass\n");
        assert_eq!(gaps, vec![(3, vec!["# hello".to_owned()])]);
    }

    #[test]
    fn test_leading_comment_and_blank_lines() {
        let gaps = gaps_of("# header\n\nx = 1\n\n\ny = 2\n");
        assert_eq!(
            gaps,
            vec![
                (1, vec!["# header".to_owned(), String::new()]),
                (4, vec![String::new(), String::new()]),
            ]
        );
    }

    #[test]
    fn test_inline_comment_starts_gap_on_statement_line() {
        let gaps = gaps_of("from os import path  # paths\nx = 1\n");
        assert_eq!(gaps, vec![(1, vec!["  # paths".to_owned()])]);
    }

    #[test]
    fn test_decorator_is_not_part_of_gap() {
        let gaps = gaps_of("x = 1\n# about f\n@dec\ndef f():\n    pass\n");
        assert_eq!(gaps, vec![(2, vec!["# about f".to_owned()])]);
    }

    #[test]
    fn test_trailing_comments_after_last_statement() {
        let gaps = gaps_of("x = 1\n\n# end\n");
        assert_eq!(gaps, vec![(2, vec![String::new(), "# end".to_owned()])]);
    }

    #[test]
    fn test_comment_only_file() {
        let gaps = gaps_of("# only\n# comments\n");
        assert_eq!(
            gaps,
            vec![(1, vec!["# only".to_owned(), "# comments".to_owned()])]
        );
    }

    #[test]
    fn test_empty_file_has_no_gaps() {
        assert!(gaps_of("").is_empty());
    }

    #[test]
    fn test_gaps_and_spans_partition_the_text() {
        let source = "\"\"\"Doc.\"\"\"\n\n# c\nX: int = 1  # x\nfrom os import y\n\ndef f():\n    pass\n# tail\n";
        let lines = SourceLines::new(source);
        let nodes = parse_nodes(source).unwrap();
        let gaps = find_gaps(&nodes, &lines);

        let gap_text: usize = gaps
            .iter()
            .flat_map(|gap| gap.lines.iter())
            .map(|line| line.len())
            .sum();
        let node_text: usize = nodes
            .iter()
            .flat_map(|node| lines.slice(node.effective_start(), node.end).lines)
            .map(str::len)
            .sum();
        let newlines = source.matches('\n').count();
        assert_eq!(gap_text + node_text + newlines, source.len());
    }
}
