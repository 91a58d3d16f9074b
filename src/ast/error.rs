//! Error nodes
//!
//! An `Error` element stands in for a construct that failed to parse. It can
//! appear in body and structural context, so malformed markup is reported in
//! place without aborting the surrounding parse.

use super::position::Position;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Error {
    pub message: String,
    pub position: Position,
}

impl Error {
    pub fn new(message: impl Into<String>, position: Position) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.position, self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_position() {
        let err = Error::new("unexpected end of input", Position::new(2, 1, "doc.rst"));
        assert_eq!(err.to_string(), "doc.rst:2:1: unexpected end of input");
    }
}
