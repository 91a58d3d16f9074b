//! Structural markup
//!
//! Structural elements define the overall shape of a document. A well-formed
//! structure sequence is a list of sections, with each sequential pair
//! optionally separated by one transition.

use super::body::Body;
use super::error::Error;
use super::position::Position;
use super::text::{plain_text, Text};
use serde::Serialize;

/// Structural markup: an ordered sequence of structure elements.
pub type Structure = Vec<StructureElement>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum StructureElement {
    Section(Section),
    Transition(Transition),
    Error(Error),
}

impl StructureElement {
    pub fn node_type(&self) -> &'static str {
        match self {
            StructureElement::Section(_) => "Section",
            StructureElement::Transition(_) => "Transition",
            StructureElement::Error(_) => "Error",
        }
    }

    /// A short one-line label for tree displays.
    pub fn display_label(&self) -> String {
        match self {
            StructureElement::Section(s) => plain_text(&s.title),
            StructureElement::Transition(_) => String::new(),
            StructureElement::Error(e) => e.message.clone(),
        }
    }
}

/// A titled section: its own body content followed by child sections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub title: Text,
    pub body: Body,
    pub children: Structure,
}

/// A change in topic without a new section, the idea normally communicated
/// by a horizontal rule. Transitions can separate body elements within a
/// section as well as subsections, so the type appears in both element
/// families.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transition {
    pub position: Position,
}
