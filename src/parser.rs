//! Structural-model parser
//!
//! Pulls tokens from the scanner and builds the document tree. One
//! recursive loop parses the "structure model" — body elements followed by
//! structural elements — parameterized by the token kind that terminates
//! the scope (EOF at top level, DEDENT for any nested scope). The loop
//! appends into a scope [accumulator](model) that enforces what the scope
//! admits: top-level scopes switch one-way from body to structural
//! accumulation, list items admit body content only, and block-quote
//! bodies additionally accept attributions.

pub mod api;
pub mod inline;
mod lists;
mod model;

#[cfg(test)]
mod tests;

pub use api::{parse_document, parse_document_str, parse_fragment, parse_fragment_str};
