//! Parse entry points

use std::io::{BufRead, Cursor};

use super::model::Parser;
use crate::ast::{Document, Fragment};
use crate::lexer::Scanner;

/// Parses a self-contained chunk of markup into a [Fragment]. The filename
/// is only used in reported positions.
///
/// A fragment always comes back: malformed markup is recorded as error
/// nodes inside the tree, never as a failed parse. Callers inspect the
/// tree for embedded errors to decide whether the input was well-formed.
pub fn parse_fragment<R: BufRead>(reader: R, filename: &str) -> Fragment {
    let scanner = Scanner::new(reader, filename);
    Parser::new(scanner).parse_fragment()
}

/// Parses markup held in memory. See [parse_fragment].
pub fn parse_fragment_str(source: &str, filename: &str) -> Fragment {
    parse_fragment(Cursor::new(source.as_bytes()), filename)
}

/// Parses a whole input as a [Document].
pub fn parse_document<R: BufRead>(reader: R, filename: &str) -> Document {
    Document::from_fragment(parse_fragment(reader, filename))
}

/// Parses markup held in memory as a [Document]. See [parse_document].
pub fn parse_document_str(source: &str, filename: &str) -> Document {
    Document::from_fragment(parse_fragment_str(source, filename))
}
