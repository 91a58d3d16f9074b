//! Line framing
//!
//! Splits a raw byte stream into logical lines for the scanner. Trailing
//! whitespace and the control characters that behave like it (backspace,
//! vertical tab, form feed) are stripped from every line; leading
//! whitespace survives untouched because indentation is significant.

use std::io::{self, BufRead};

/// Iterator over the logical lines of a reader.
///
/// Empty input yields no lines, and a trailing newline does not produce an
/// extra empty line. `\r\n` endings are normalized. After end of input or
/// the first read error the iterator is fused and keeps returning `None`.
pub struct Lines<R> {
    reader: R,
    done: bool,
}

impl<R: BufRead> Lines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                while line
                    .as_bytes()
                    .last()
                    .is_some_and(|b| matches!(b, 0x08 | b'\t' | b' ' | 0x0b | 0x0c))
                {
                    line.pop();
                }
                Some(Ok(line))
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}
