//! Comment-preserving source styling.
//!
//! Styling happens in three steps over the top-level statements of a file:
//!
//! 1. [`gaps::find_gaps`] collects the raw text between statements (comments
//!    and blank lines the syntax tree does not record).
//! 2. [`cursor::CommentCursor`] replays that text strictly forward, so every
//!    comment is emitted exactly once.
//! 3. [`printer::style`] rebuilds the file: `from` imports are sorted into an
//!    absolute and a relative block at the top, definitions get a blank line
//!    in front of them, blank runs collapse to one, and every statement's own
//!    source span is copied verbatim.
//!
//! # Usage
//!
//! ```
//! let styled = pystyle::style::format_source("x = 1\nfrom os import path\n").unwrap();
//! assert_eq!(styled, "from os import path\n\nx = 1\n");
//! ```

pub mod cursor;
pub mod gaps;
pub mod node;
pub mod printer;
pub mod source;

pub use cursor::CommentCursor;
pub use gaps::{find_gaps, Gap};
pub use node::{parse_nodes, ImportName, NodeKind, Position, SyntaxNode};
pub use printer::{style, StyledDocument};
pub use source::{SourceLines, Slice};

/// Errors raised while styling a single source text.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// The source is not valid syntax.
    #[error("syntax error at {line}:{column}: {message}")]
    Parse {
        /// 1-based line of the error.
        line: usize,
        /// 0-based byte column of the error.
        column: usize,
        /// Parser message.
        message: String,
    },
    /// The parser reported a node position outside the source text.
    #[error("node {what} position (byte {offset}) lies outside the source")]
    InvalidPosition {
        /// Which position was bad (`start`, `end`, `decorator`).
        what: &'static str,
        /// The offending byte offset.
        offset: usize,
    },
}

/// Styles `source` and returns the new text.
///
/// The result is deterministic and idempotent: styling the output again
/// returns it unchanged.
///
/// # Errors
///
/// Returns a [`StyleError`] if `source` cannot be parsed.
pub fn format_source(source: &str) -> Result<String, StyleError> {
    let nodes = parse_nodes(source)?;
    let lines = SourceLines::new(source);
    let gaps = find_gaps(&nodes, &lines);
    Ok(style(&lines, &nodes, &gaps))
}
