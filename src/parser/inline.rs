//! Inline-markup delegate
//!
//! The block parser does not interpret inline markup itself. It hands the
//! raw text of consecutive plain lines across this seam and receives the
//! inline tree back, order preserved. The delegate never fails:
//! unrecognized markup degrades to literal text by the inline parser's own
//! contract.
//!
//! The current implementation is a placeholder that performs no
//! interpretation: each line becomes one `CharData` node.

use crate::ast::{InlineElement, Text};

pub fn parse_inline(lines: &[String]) -> Text {
    lines
        .iter()
        .map(|line| InlineElement::CharData(line.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_chardata_per_line() {
        let lines = vec!["*not* emphasis".to_string(), "second".to_string()];
        assert_eq!(
            parse_inline(&lines),
            vec![
                InlineElement::CharData("*not* emphasis".to_string()),
                InlineElement::CharData("second".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_input_is_empty_text() {
        assert_eq!(parse_inline(&[]), Vec::<InlineElement>::new());
    }
}
