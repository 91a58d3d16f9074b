//! Parse results: fragments and documents

use super::body::Body;
use super::structure::Structure;
use super::text::Text;
use serde::Serialize;

/// The root result of parsing a self-contained chunk of markup: body
/// content followed by structural content. Also produced for sub-parses
/// bounded by a dedent, not only for whole inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Fragment {
    pub body: Body,
    pub structure: Structure,
}

/// A whole document: a fragment plus the title and subtitle a top-level
/// caller may want promoted out of the structure.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Document {
    pub title: Option<Text>,
    pub subtitle: Option<Text>,
    pub body: Body,
    pub structure: Structure,
}

impl Document {
    /// Wrap a fragment as a document. Title and subtitle promotion depends
    /// on section recognition and is not performed yet.
    pub fn from_fragment(fragment: Fragment) -> Self {
        Self {
            title: None,
            subtitle: None,
            body: fragment.body,
            structure: fragment.structure,
        }
    }
}
