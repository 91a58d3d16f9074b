//! List elements

use super::body::Body;
use serde::Serialize;

/// A bullet list. Consecutive lines sharing the same marker character fold
/// into one list; a different marker starts a sibling list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BulletList {
    pub items: Vec<ListItem>,
}

/// An enumerated list.
///
/// `prefix` and `suffix` record the literal punctuation style of the
/// markers (`""`/`"."`, `"("`/`")"`, `""`/`")"`), and `first_index` the
/// ordinal of the first item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumeratedList {
    pub enum_type: EnumType,
    pub prefix: String,
    pub suffix: String,
    pub first_index: usize,
    pub items: Vec<ListItem>,
}

/// One marker-aligned block of a list; owns its body exclusively.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct ListItem {
    pub body: Body,
}

impl ListItem {
    pub fn new(body: Body) -> Self {
        Self { body }
    }
}

/// Enumeration sequence kinds. Only arabic numbering is recognized by the
/// parser today; the remaining kinds are reserved for the marker styles the
/// format defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EnumType {
    Arabic,
    LowerAlpha,
    UpperAlpha,
    LowerRoman,
    UpperRoman,
}

impl EnumType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnumType::Arabic => "arabic",
            EnumType::LowerAlpha => "loweralpha",
            EnumType::UpperAlpha => "upperalpha",
            EnumType::LowerRoman => "lowerroman",
            EnumType::UpperRoman => "upperroman",
        }
    }
}
