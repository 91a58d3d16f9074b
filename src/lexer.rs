//! Lexing pipeline
//!
//! Raw bytes are framed into logical [lines], then the [scanner] turns
//! framed lines into a pull-driven stream of [tokens] carrying synthetic
//! block-boundary markers (INDENT, DEDENT, LATE_INDENT). The scanner keeps
//! exactly one line and one token of lookahead, and exposes a narrow
//! feedback protocol (`push_indent`, `lazy_indent`) that lets the parser
//! impose additional indentation contracts mid-stream.

pub mod lines;
pub mod scanner;
pub mod tokens;

pub use lines::Lines;
pub use scanner::Scanner;
pub use tokens::{Token, TokenKind};
