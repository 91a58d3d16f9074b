//! Body markup
//!
//! Body elements make up the content of a section: paragraphs, block quotes,
//! lists, transitions, and error placeholders.

use super::error::Error;
use super::list::{BulletList, EnumeratedList};
use super::structure::Transition;
use super::text::{plain_text, Text};
use serde::Serialize;

/// Body markup: an ordered sequence of body elements.
pub type Body = Vec<BodyElement>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum BodyElement {
    Paragraph(Paragraph),
    BlockQuote(BlockQuote),
    BulletList(BulletList),
    EnumeratedList(EnumeratedList),
    Transition(Transition),
    Error(Error),
}

impl BodyElement {
    pub fn node_type(&self) -> &'static str {
        match self {
            BodyElement::Paragraph(_) => "Paragraph",
            BodyElement::BlockQuote(_) => "BlockQuote",
            BodyElement::BulletList(_) => "BulletList",
            BodyElement::EnumeratedList(_) => "EnumeratedList",
            BodyElement::Transition(_) => "Transition",
            BodyElement::Error(_) => "Error",
        }
    }

    /// A short one-line label for tree displays.
    pub fn display_label(&self) -> String {
        match self {
            BodyElement::Paragraph(p) => plain_text(&p.text),
            BodyElement::BlockQuote(q) => format!("{} elements", q.quote.len()),
            BodyElement::BulletList(l) => format!("{} items", l.items.len()),
            BodyElement::EnumeratedList(l) => format!(
                "{} items ({}{}{})",
                l.items.len(),
                l.prefix,
                l.enum_type.as_str(),
                l.suffix
            ),
            BodyElement::Transition(_) => String::new(),
            BodyElement::Error(e) => e.message.clone(),
        }
    }
}

/// A paragraph of inline text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paragraph {
    pub text: Text,
}

impl Paragraph {
    pub fn new(text: Text) -> Self {
        Self { text }
    }
}

/// A block quotation, introduced by indentation alone.
///
/// The optional attribution is the trailing `-- source` text; when an
/// attribution appears mid-scope it closes the quote, and any further
/// content opens a sibling quote.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct BlockQuote {
    pub quote: Body,
    pub attribution: Option<Text>,
}

impl BlockQuote {
    pub fn new(quote: Body) -> Self {
        Self {
            quote,
            attribution: None,
        }
    }
}
