//! Top-level syntax nodes as seen by the styler.
//!
//! The parser's statement tree is reduced to a flat list of [`SyntaxNode`]s,
//! one per top-level statement, carrying only what styling needs: a closed
//! kind tag, line/column positions, and decorator starts for definitions.
//! Nested statements are never visited; they travel inside their enclosing
//! node's verbatim span.

use std::fmt;

use ruff_python_ast::{Decorator, Expr, Stmt};
use ruff_python_parser::parse_module;
use ruff_text_size::{Ranged, TextSize};

use super::StyleError;
use crate::utils::LineIndex;

/// A position in the source: 1-based line, 0-based byte column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// 1-based line number.
    pub line: usize,
    /// 0-based byte offset within the line.
    pub column: usize,
}

impl Position {
    /// Start of the document.
    pub const START: Self = Self { line: 1, column: 0 };

    /// Creates a position.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// One imported name of a `from ... import ...` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportName {
    /// The imported name (`*` for star imports).
    pub name: String,
    /// The `as` alias, if any.
    pub alias: Option<String>,
}

impl fmt::Display for ImportName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.alias {
            Some(alias) => write!(f, "{} as {alias}", self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// Kind of a top-level statement.
///
/// Anything the styler does not treat specially folds into [`NodeKind::Other`]
/// and is copied verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// `from <dots><module> import <names>`.
    ImportFrom {
        /// Dotted module path, absent for `from . import x`.
        module: Option<String>,
        /// Imported names in source order.
        names: Vec<ImportName>,
        /// Relative import level (number of leading dots).
        level: u32,
    },
    /// `def` or `async def`.
    FunctionDef,
    /// `class`.
    ClassDef,
    /// `name: annotation [= value]`.
    AnnotatedAssignment,
    /// A bare literal expression statement, typically a docstring.
    ConstantExpr,
    /// Any other statement.
    Other,
}

/// A top-level statement with its source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    /// What kind of statement this is.
    pub kind: NodeKind,
    /// Start of the statement as reported by the parser.
    pub start: Position,
    /// End of the statement (exclusive column).
    pub end: Position,
    /// Start positions of the decorators, in source order.
    pub decorators: Vec<Position>,
}

impl SyntaxNode {
    /// Position of the first decorator if there is one, else the node's own start.
    #[must_use]
    pub fn effective_start(&self) -> Position {
        self.decorators
            .first()
            .map_or(self.start, |&first| first.min(self.start))
    }
}

/// Parses `source` and returns its top-level statements as [`SyntaxNode`]s.
///
/// # Errors
///
/// Returns [`StyleError::Parse`] on invalid syntax and
/// [`StyleError::InvalidPosition`] if the parser reports a range outside the
/// source text.
pub fn parse_nodes(source: &str) -> Result<Vec<SyntaxNode>, StyleError> {
    let index = LineIndex::new(source);
    let parsed = parse_module(source).map_err(|err| {
        let (line, column) = index
            .line_column(err.location.start())
            .unwrap_or((index.line_count(), 0));
        StyleError::Parse {
            line,
            column,
            message: err.error.to_string(),
        }
    })?;

    parsed
        .syntax()
        .body
        .iter()
        .map(|stmt| convert_stmt(stmt, &index))
        .collect()
}

fn convert_stmt(stmt: &Stmt, index: &LineIndex) -> Result<SyntaxNode, StyleError> {
    let kind = match stmt {
        Stmt::ImportFrom(node) => NodeKind::ImportFrom {
            module: node.module.as_ref().map(|module| module.as_str().to_owned()),
            names: node
                .names
                .iter()
                .map(|alias| ImportName {
                    name: alias.name.as_str().to_owned(),
                    alias: alias.asname.as_ref().map(|name| name.as_str().to_owned()),
                })
                .collect(),
            level: node.level,
        },
        Stmt::FunctionDef(_) => NodeKind::FunctionDef,
        Stmt::ClassDef(_) => NodeKind::ClassDef,
        Stmt::AnnAssign(_) => NodeKind::AnnotatedAssignment,
        Stmt::Expr(node) if is_literal(&node.value) => NodeKind::ConstantExpr,
        _ => NodeKind::Other,
    };

    let decorators: &[Decorator] = match stmt {
        Stmt::FunctionDef(node) => &node.decorator_list[..],
        Stmt::ClassDef(node) => &node.decorator_list[..],
        _ => &[],
    };

    Ok(SyntaxNode {
        kind,
        start: position(index, stmt.start(), "start")?,
        end: position(index, stmt.end(), "end")?,
        decorators: decorators
            .iter()
            .map(|decorator| position(index, decorator.start(), "decorator"))
            .collect::<Result<_, _>>()?,
    })
}

fn is_literal(expr: &Expr) -> bool {
    matches!(
        expr,
        Expr::StringLiteral(_)
            | Expr::BytesLiteral(_)
            | Expr::NumberLiteral(_)
            | Expr::BooleanLiteral(_)
            | Expr::NoneLiteral(_)
            | Expr::EllipsisLiteral(_)
    )
}

fn position(
    index: &LineIndex,
    offset: TextSize,
    what: &'static str,
) -> Result<Position, StyleError> {
    index
        .line_column(offset)
        .map(|(line, column)| Position::new(line, column))
        .ok_or(StyleError::InvalidPosition {
            what,
            offset: offset.to_usize(),
        })
}
