//! Inline markup
//!
//! A `Text` is a mixture of plain character data and inline markup elements.
//! Only `CharData` is produced today; the inline-markup parser behind
//! [`crate::parser::inline`] will add emphasis, references and friends
//! without changing this family's shape.

use serde::Serialize;

/// Inline markup: an ordered sequence of inline elements.
pub type Text = Vec<InlineElement>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum InlineElement {
    /// A run of plain character data, one per source line today.
    CharData(String),
}

impl InlineElement {
    pub fn as_str(&self) -> &str {
        match self {
            InlineElement::CharData(s) => s,
        }
    }
}

/// Join the character data of a text into one displayable string.
pub fn plain_text(text: &Text) -> String {
    text.iter()
        .map(InlineElement::as_str)
        .collect::<Vec<_>>()
        .join("\n")
}
