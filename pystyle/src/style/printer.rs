//! Rebuilds a file from its top-level statements and the replayed gap text.

use super::cursor::CommentCursor;
use super::gaps::Gap;
use super::node::{ImportName, NodeKind, Position, SyntaxNode};
use super::source::SourceLines;

/// The output under construction.
///
/// Imports are bucketed apart from the body and only placed in front of it
/// when the document is rendered.
#[derive(Debug, Default, Clone)]
pub struct StyledDocument {
    /// Formatted `from` imports without leading dots.
    pub absolute_imports: Vec<String>,
    /// Formatted relative (`from .x`) imports.
    pub local_imports: Vec<String>,
    /// Everything that is not an import, in source order.
    pub body: Vec<String>,
    /// Comments and blank lines left after the last statement.
    pub trailing: Vec<String>,
}

impl StyledDocument {
    fn last_body_line(&self) -> Option<&str> {
        self.body.last().map(String::as_str)
    }

    /// Appends a blank line unless the body is empty or already ends with one.
    fn ensure_blank_line(&mut self) {
        if self.last_body_line().is_some_and(|line| !line.is_empty()) {
            self.body.push(String::new());
        }
    }

    fn append_inline_comment(&mut self, comment: Option<&str>) {
        if let (Some(comment), Some(last)) = (comment, self.body.last_mut()) {
            last.push_str("  ");
            last.push_str(comment);
        }
    }

    /// Renders the final text: absolute imports, local imports, a blank
    /// separator if there were any imports, the body, the trailing comments,
    /// and exactly one final newline.
    #[must_use]
    pub fn render(mut self, line_ending: &str) -> String {
        self.absolute_imports.sort();
        self.local_imports.sort();

        let mut lines = self.absolute_imports;
        lines.append(&mut self.local_imports);
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.append(&mut self.body);
        lines.append(&mut self.trailing);
        if lines.last().is_none_or(|line| !line.is_empty()) {
            lines.push(String::new());
        }
        lines.join(line_ending)
    }
}

struct Reprinter<'s, 'a> {
    source: &'s SourceLines<'a>,
    comments: CommentCursor<'a>,
    document: StyledDocument,
}

/// Styles one file given its lines, top-level statements and gaps.
#[must_use]
pub fn style(source: &SourceLines<'_>, nodes: &[SyntaxNode], gaps: &[Gap<'_>]) -> String {
    let mut printer = Reprinter {
        source,
        comments: CommentCursor::new(gaps),
        document: StyledDocument::default(),
    };
    for node in nodes {
        printer.visit(node);
    }
    printer.finish()
}

impl Reprinter<'_, '_> {
    fn visit(&mut self, node: &SyntaxNode) {
        match &node.kind {
            NodeKind::ImportFrom {
                module,
                names,
                level,
            } => self.style_import_from(node, module.as_deref(), names, *level),
            NodeKind::FunctionDef | NodeKind::ClassDef => self.style_definition(node),
            NodeKind::AnnotatedAssignment | NodeKind::ConstantExpr | NodeKind::Other => {
                self.style_other(node);
            }
        }
    }

    fn style_import_from(
        &mut self,
        node: &SyntaxNode,
        module: Option<&str>,
        names: &[ImportName],
        level: u32,
    ) {
        let span = self.source.slice(node.start, node.end).lines;
        // Comments inside a parenthesized import only survive verbatim.
        let mut styled = if span.iter().any(|line| line.contains('#')) {
            span.join(self.source.line_ending())
        } else {
            let names = names
                .iter()
                .map(ImportName::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "from {}{} import {names}",
                ".".repeat(level as usize),
                module.unwrap_or_default()
            )
        };
        if let Some(comment) = self.comments.at(node.end.line) {
            styled.push_str("  ");
            styled.push_str(comment);
        }

        if level == 0 {
            self.document.absolute_imports.push(styled);
        } else {
            self.document.local_imports.push(styled);
        }
    }

    fn style_definition(&mut self, node: &SyntaxNode) {
        let start = node.effective_start();
        let leading = self
            .comments
            .before(start.line, self.document.last_body_line());
        if leading.first().is_none_or(|line| !line.is_empty()) {
            self.document.ensure_blank_line();
        }
        self.push_lines(&leading);
        self.push_span(node, start);
    }

    fn style_other(&mut self, node: &SyntaxNode) {
        let leading = self
            .comments
            .before(node.start.line, self.document.last_body_line());
        self.push_lines(&leading);
        self.push_span(node, node.start);
    }

    fn push_lines(&mut self, lines: &[&str]) {
        self.document
            .body
            .extend(lines.iter().map(|&line| line.to_owned()));
    }

    fn push_span(&mut self, node: &SyntaxNode, start: Position) {
        let span = self.source.slice(start, node.end).lines;
        self.push_lines(&span);
        let comment = self.comments.at(node.end.line);
        self.document.append_inline_comment(comment);
    }

    fn finish(mut self) -> String {
        let trailing = self.comments.remaining(self.document.last_body_line());
        self.document.trailing = trailing.into_iter().map(str::to_owned).collect();
        self.document.render(self.source.line_ending())
    }
}
