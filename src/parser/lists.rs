//! List marker classification and list parsing
//!
//! Lines are classified against lazily compiled patterns, and each list
//! style runs its own item loop: a bullet run continues only on the
//! identical marker glyph, an enumerated run only on the identical
//! punctuation style and consecutive ordinals. A mismatching marker line
//! ends the run without being consumed, so it starts a sibling list.

use std::io::BufRead;

use once_cell::sync::Lazy;
use regex::Regex;

use super::model::Parser;
use crate::ast::{BodyElement, BulletList, EnumType, EnumeratedList, ListItem};
use crate::lexer::TokenKind;

/// A bullet glyph followed by end of line or a single whitespace character.
static BULLET_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([*+\-•‣⁃])(\s|$)").expect("bullet marker pattern is valid"));

/// An arabic ordinal with `1.`, `(1)` or `1)` punctuation, followed by end
/// of line or a space.
static ENUMERATED_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\()?([0-9]+)([.)])( |$)").expect("enumerated marker pattern is valid"));

/// Two dashes followed by one whitespace character.
static ATTRIBUTION_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^--(\s)").expect("attribution marker pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct BulletMarker {
    pub glyph: char,
    /// Byte width of the marker plus its separating whitespace; the indent
    /// continuation lines must align past.
    pub width: usize,
}

/// Attempts to interpret a line as the beginning of a bullet list item.
pub(super) fn bullet_marker(text: &str) -> Option<BulletMarker> {
    let caps = BULLET_MARKER.captures(text)?;
    let glyph_match = caps.get(1).expect("the glyph group always participates");
    let glyph = glyph_match
        .as_str()
        .chars()
        .next()
        .expect("the glyph group is one character");
    let width = glyph_match.len() + caps.get(2).map_or(0, |m| m.len());
    Some(BulletMarker { glyph, width })
}

/// Marker punctuation styles for enumerated lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum EnumStyle {
    /// `1.`
    Period,
    /// `(1)`
    Parens,
    /// `1)`
    RightParen,
}

impl EnumStyle {
    /// The literal prefix/suffix pair recorded on the produced list.
    fn affixes(self) -> (&'static str, &'static str) {
        match self {
            EnumStyle::Period => ("", "."),
            EnumStyle::Parens => ("(", ")"),
            EnumStyle::RightParen => ("", ")"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct EnumeratedMarker {
    pub style: EnumStyle,
    pub ordinal: usize,
    pub width: usize,
}

/// Attempts to interpret a line as the beginning of an enumerated list
/// item. Only arabic ordinals are recognized; alphabetic and roman marker
/// candidates fail the digit match and read as ordinary lines.
pub(super) fn enumerated_marker(text: &str) -> Option<EnumeratedMarker> {
    let caps = ENUMERATED_MARKER.captures(text)?;
    let style = match (caps.get(1).is_some(), &caps[3]) {
        (true, ")") => EnumStyle::Parens,
        // An opening paren demands the matching closer.
        (true, _) => return None,
        (false, ".") => EnumStyle::Period,
        (false, _) => EnumStyle::RightParen,
    };
    let ordinal = caps[2].parse().ok()?;
    let width = caps.get(0).expect("the whole match participates").len();
    Some(EnumeratedMarker {
        style,
        ordinal,
        width,
    })
}

/// Attempts to interpret a line as an attribution marker, returning the
/// byte width of `--` plus its following whitespace character.
pub(super) fn attribution_width(text: &str) -> Option<usize> {
    let caps = ATTRIBUTION_MARKER.captures(text)?;
    Some(2 + caps[1].len())
}

impl<R: BufRead> Parser<R> {
    /// Parses a run of bullet list items sharing one marker glyph, one item
    /// per marker line.
    pub(super) fn parse_bullet_list(&mut self, glyph: char) -> BodyElement {
        let mut items = Vec::new();
        loop {
            self.scanner.skip_blanks();
            let next = self.scanner.peek();
            if next.kind != TokenKind::Line {
                break;
            }
            let marker = match bullet_marker(&next.text) {
                Some(marker) if marker.glyph == glyph => marker,
                // Not a list item, or an item of a different (sibling) list.
                _ => break,
            };

            let first_line = self.scanner.read();
            // Subsequent lines must align with the first character after
            // the marker, not with the marker itself.
            self.scanner.push_indent(marker.width);
            self.scanner.push_back_suffix(&first_line, marker.width);
            let body = self.parse_body(TokenKind::Dedent);
            items.push(ListItem::new(body));
        }
        BodyElement::BulletList(BulletList { items })
    }

    /// Parses a run of enumerated list items. The run continues only while
    /// each candidate keeps the same punctuation style and an ordinal
    /// exactly one greater than the previous item; any mismatch ends the
    /// list without consuming the mismatching line.
    pub(super) fn parse_enumerated_list(&mut self, first: &EnumeratedMarker) -> BodyElement {
        let mut items = Vec::new();
        let mut next_ordinal = first.ordinal;
        loop {
            self.scanner.skip_blanks();
            let next = self.scanner.peek();
            if next.kind != TokenKind::Line {
                break;
            }
            let marker = match enumerated_marker(&next.text) {
                Some(marker) if marker.style == first.style && marker.ordinal == next_ordinal => {
                    marker
                }
                _ => break,
            };
            next_ordinal += 1;

            let first_line = self.scanner.read();
            self.scanner.push_indent(marker.width);
            self.scanner.push_back_suffix(&first_line, marker.width);
            let body = self.parse_body(TokenKind::Dedent);
            items.push(ListItem::new(body));
        }

        let (prefix, suffix) = first.style.affixes();
        BodyElement::EnumeratedList(EnumeratedList {
            enum_type: EnumType::Arabic,
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
            first_index: first.ordinal,
            items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("* foo", Some(('*', 2)))]
    #[case("*", Some(('*', 1)))]
    #[case("- item", Some(('-', 2)))]
    #[case("+ item", Some(('+', 2)))]
    #[case("• item", Some(('•', 4)))]
    #[case("*bold*", None)]
    #[case("-- attribution", None)]
    #[case("plain text", None)]
    fn test_bullet_marker(#[case] text: &str, #[case] expected: Option<(char, usize)>) {
        let got = bullet_marker(text).map(|m| (m.glyph, m.width));
        assert_eq!(got, expected);
    }

    #[rstest]
    #[case("1. foo", Some((EnumStyle::Period, 1, 3)))]
    #[case("1.", Some((EnumStyle::Period, 1, 2)))]
    #[case("12. foo", Some((EnumStyle::Period, 12, 4)))]
    #[case("(3) baz", Some((EnumStyle::Parens, 3, 4)))]
    #[case("6) cheese", Some((EnumStyle::RightParen, 6, 3)))]
    #[case("1.foo", None)]
    #[case("(1. foo", None)]
    #[case("(1 foo", None)]
    #[case("A. foo", None)]
    #[case("i) foo", None)]
    #[case("1 foo", None)]
    fn test_enumerated_marker(
        #[case] text: &str,
        #[case] expected: Option<(EnumStyle, usize, usize)>,
    ) {
        let got = enumerated_marker(text).map(|m| (m.style, m.ordinal, m.width));
        assert_eq!(got, expected);
    }

    #[rstest]
    #[case("-- attribution", Some(3))]
    #[case("--\tattribution", Some(3))]
    #[case("--", None)]
    #[case("--attribution", None)]
    #[case("- item", None)]
    fn test_attribution_width(#[case] text: &str, #[case] expected: Option<usize>) {
        assert_eq!(attribution_width(text), expected);
    }
}
