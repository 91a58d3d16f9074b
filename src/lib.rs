//! # rst
//!
//! A parser for reStructuredText-style markup.
//!
//! The crate turns a stream of plain-text markup (indentation, bullet and
//! enumerated lists, literal blocks, block quotations) into a typed document
//! tree. Parsing happens in two pull-driven stages: an indentation-aware
//! [scanner](lexer) that frames lines and emits a token stream with
//! synthetic block-boundary markers, and a [structural-model parser](parser)
//! that consumes the tokens and builds the [tree](ast).
//!
//! Malformed markup never aborts a parse; it is recorded in place as
//! [`ast::Error`] nodes, and callers inspect the returned tree to decide
//! whether the input was fully well-formed.
//!
//! ## Testing
//!
//! Parser tests assert full expected trees or use the fluent helpers in the
//! [testing] module.

pub mod ast;
pub mod formats;
pub mod lexer;
pub mod parser;
pub mod testing;

pub use parser::{parse_document, parse_document_str, parse_fragment, parse_fragment_str};
