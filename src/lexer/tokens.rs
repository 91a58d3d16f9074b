//! Token types produced by the scanner

use crate::ast::Position;
use std::fmt;

/// The kinds of token in the scanner's output stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Placeholder for a token that has not been populated. Never emitted.
    Invalid,
    /// A line of content, with indentation and trailing whitespace removed.
    Line,
    /// A blank line. Blank lines inherit the current indent level.
    Blank,
    /// A raw literal-block line, leading whitespace retained. The consumer
    /// trims the common prefix once it has collected the whole run.
    Literal,
    /// The start of a deeper indentation level.
    Indent,
    /// The end of the innermost open indentation level.
    Dedent,
    /// An indentation level discovered late: the indent decreased to a
    /// depth not on the indent stack, revealing an implied intermediate
    /// level (a block quote that itself began with a nested block quote).
    /// The parser must move everything accumulated in the current scope
    /// into a new block quote before continuing.
    LateIndent,
    /// End of input, repeated forever once reached.
    Eof,
    /// A line-framing failure, repeated forever once it occurs. The token
    /// text carries the error description.
    Error,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Invalid => "INVALID",
            TokenKind::Line => "LINE",
            TokenKind::Blank => "BLANK",
            TokenKind::Literal => "LITERAL",
            TokenKind::Indent => "INDENT",
            TokenKind::Dedent => "DEDENT",
            TokenKind::LateIndent => "LATE_INDENT",
            TokenKind::Eof => "EOF",
            TokenKind::Error => "ERROR",
        };
        f.write_str(name)
    }
}

/// One token of scanner output. Ownership transfers to the consumer on
/// `read`.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }
}
