//! Parser test suite
//!
//! Expected trees are written out in full and compared structurally, so a
//! regression anywhere in the scanner/parser pipeline shows up as a tree
//! diff.

use std::io::{self, BufRead, Read};

use super::{parse_document_str, parse_fragment, parse_fragment_str};
use crate::ast::{
    BlockQuote, Body, BodyElement, BulletList, EnumType, EnumeratedList, Error, Fragment,
    InlineElement, ListItem, Paragraph, Position, Text,
};
use crate::testing::assert_fragment;

const FILENAME: &str = "test.rst";

fn parse(input: &str) -> Fragment {
    parse_fragment_str(input, FILENAME)
}

fn text(lines: &[&str]) -> Text {
    lines
        .iter()
        .map(|line| InlineElement::CharData(line.to_string()))
        .collect()
}

fn para(lines: &[&str]) -> BodyElement {
    BodyElement::Paragraph(Paragraph::new(text(lines)))
}

fn item(body: Body) -> ListItem {
    ListItem::new(body)
}

fn bullet(items: Vec<ListItem>) -> BodyElement {
    BodyElement::BulletList(BulletList { items })
}

fn enumerated(prefix: &str, suffix: &str, first_index: usize, items: Vec<ListItem>) -> BodyElement {
    BodyElement::EnumeratedList(EnumeratedList {
        enum_type: EnumType::Arabic,
        prefix: prefix.to_string(),
        suffix: suffix.to_string(),
        first_index,
        items,
    })
}

fn quote(body: Body) -> BodyElement {
    BodyElement::BlockQuote(BlockQuote::new(body))
}

fn body_fragment(body: Body) -> Fragment {
    Fragment {
        body,
        structure: vec![],
    }
}

#[test]
fn test_empty_input() {
    assert_eq!(parse(""), Fragment::default());
}

#[test]
fn test_blank_input() {
    assert_eq!(parse("\n\n\n"), Fragment::default());
}

#[test]
fn test_paragraph() {
    assert_eq!(parse("hello"), body_fragment(vec![para(&["hello"])]));
}

#[test]
fn test_paragraph_joins_consecutive_lines() {
    assert_eq!(
        parse("hello\nworld"),
        body_fragment(vec![para(&["hello", "world"])])
    );
}

#[test]
fn test_blank_line_separates_paragraphs() {
    assert_eq!(
        parse("hello\n\nworld"),
        body_fragment(vec![para(&["hello"]), para(&["world"])])
    );
}

#[test]
fn test_bare_bullet() {
    assert_eq!(
        parse("*"),
        body_fragment(vec![bullet(vec![item(vec![])])])
    );
}

#[test]
fn test_two_bare_bullets() {
    assert_eq!(
        parse("*\n*"),
        body_fragment(vec![bullet(vec![item(vec![]), item(vec![])])])
    );
}

#[test]
fn test_bullet_with_text() {
    assert_eq!(
        parse("* foo"),
        body_fragment(vec![bullet(vec![item(vec![para(&["foo"])])])])
    );
}

#[test]
fn test_bullet_list_two_items() {
    assert_eq!(
        parse("* foo\n* bar"),
        body_fragment(vec![bullet(vec![
            item(vec![para(&["foo"])]),
            item(vec![para(&["bar"])]),
        ])])
    );
}

#[test]
fn test_different_marker_starts_sibling_list() {
    assert_eq!(
        parse("* foo\n+ bar"),
        body_fragment(vec![
            bullet(vec![item(vec![para(&["foo"])])]),
            bullet(vec![item(vec![para(&["bar"])])]),
        ])
    );
}

#[test]
fn test_bullet_item_continuation_line() {
    assert_eq!(
        parse("* foo\n  bar"),
        body_fragment(vec![bullet(vec![item(vec![para(&["foo", "bar"])])])])
    );
}

#[test]
fn test_paragraph_after_list() {
    assert_eq!(
        parse("* foo\nbar"),
        body_fragment(vec![
            bullet(vec![item(vec![para(&["foo"])])]),
            para(&["bar"]),
        ])
    );
}

#[test]
fn test_unicode_bullet() {
    assert_eq!(
        parse("• foo\n• bar"),
        body_fragment(vec![bullet(vec![
            item(vec![para(&["foo"])]),
            item(vec![para(&["bar"])]),
        ])])
    );
}

#[test]
fn test_enumerated_list_grouping() {
    // Style or continuity mismatches end a run without consuming the
    // mismatching line, so this input yields four separate lists.
    assert_eq!(
        parse("1. foo\n2. bar\n(3) baz\n(5) pizza\n6) cheese"),
        body_fragment(vec![
            enumerated(
                "",
                ".",
                1,
                vec![item(vec![para(&["foo"])]), item(vec![para(&["bar"])])],
            ),
            enumerated("(", ")", 3, vec![item(vec![para(&["baz"])])]),
            enumerated("(", ")", 5, vec![item(vec![para(&["pizza"])])]),
            enumerated("", ")", 6, vec![item(vec![para(&["cheese"])])]),
        ])
    );
}

#[test]
fn test_multi_digit_ordinals() {
    assert_eq!(
        parse("9. nine\n10. ten\n11. eleven"),
        body_fragment(vec![enumerated(
            "",
            ".",
            9,
            vec![
                item(vec![para(&["nine"])]),
                item(vec![para(&["ten"])]),
                item(vec![para(&["eleven"])]),
            ],
        )])
    );
}

#[test]
fn test_alphabetic_marker_reads_as_paragraph() {
    assert_eq!(
        parse("A. foo"),
        body_fragment(vec![para(&["A. foo"])])
    );
}

#[test]
fn test_block_quote() {
    assert_eq!(
        parse("    blockquote\n    baz"),
        body_fragment(vec![quote(vec![para(&["blockquote", "baz"])])])
    );
}

#[test]
fn test_nested_block_quote() {
    assert_eq!(
        parse("    a\n        b"),
        body_fragment(vec![quote(vec![
            para(&["a"]),
            quote(vec![para(&["b"])]),
        ])])
    );
}

#[test]
fn test_late_indent_restructuring() {
    // The second line reveals that the first was nested one level deeper
    // than anything the scanner had seen: the already-parsed content is
    // promoted into an inner quote, and the shallower line becomes its
    // sibling inside the outer quote.
    assert_eq!(
        parse("    nested-blockquote\n  baz"),
        body_fragment(vec![quote(vec![
            quote(vec![para(&["nested-blockquote"])]),
            para(&["baz"]),
        ])])
    );
}

#[test]
fn test_attribution() {
    assert_eq!(
        parse("    quote\n\n    -- attribution"),
        body_fragment(vec![BodyElement::BlockQuote(BlockQuote {
            quote: vec![para(&["quote"])],
            attribution: Some(text(&["attribution"])),
        })])
    );
}

#[test]
fn test_attribution_continuation_lines() {
    assert_eq!(
        parse("    quote\n\n    -- attr\n       more"),
        body_fragment(vec![BodyElement::BlockQuote(BlockQuote {
            quote: vec![para(&["quote"])],
            attribution: Some(text(&["attr", "more"])),
        })])
    );
}

#[test]
fn test_attribution_chains_sibling_quotes() {
    assert_eq!(
        parse("    quote\n\n    -- one\n    more"),
        body_fragment(vec![
            BodyElement::BlockQuote(BlockQuote {
                quote: vec![para(&["quote"])],
                attribution: Some(text(&["one"])),
            }),
            quote(vec![para(&["more"])]),
        ])
    );
}

#[test]
fn test_attribution_marker_is_plain_text_outside_quotes() {
    assert_eq!(
        parse("-- attribution"),
        body_fragment(vec![para(&["-- attribution"])])
    );
}

#[test]
fn test_literal_line_degrades_to_error_and_recovers() {
    assert_eq!(
        parse("::\n    raw\nafter"),
        body_fragment(vec![
            BodyElement::Error(Error::new(
                "unexpected token: LITERAL",
                Position::new(2, 1, FILENAME),
            )),
            para(&["after"]),
        ])
    );
}

/// A reader whose first read fails, standing in for an I/O failure while
/// framing lines.
struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "read failure"))
    }
}

impl BufRead for FailingReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Err(io::Error::new(io::ErrorKind::Other, "read failure"))
    }

    fn consume(&mut self, _amt: usize) {}
}

#[test]
fn test_framing_error_becomes_error_node() {
    assert_eq!(
        parse_fragment(FailingReader, FILENAME),
        body_fragment(vec![BodyElement::Error(Error::new(
            "read failure",
            Position::new(1, 1, FILENAME),
        ))])
    );
}

#[test]
fn test_document_wrapper() {
    let doc = parse_document_str("hello", FILENAME);
    assert_eq!(doc.title, None);
    assert_eq!(doc.subtitle, None);
    assert_eq!(doc.body, vec![para(&["hello"])]);
    assert!(doc.structure.is_empty());
}

#[test]
fn test_mixed_document() {
    let fragment = parse(
        "intro paragraph\n\n* first\n* second\n\nclosing line\n\n    quoted text\n\n    -- source",
    );
    assert_fragment(&fragment)
        .body_count(4)
        .structure_count(0)
        .item(0, |item| {
            item.assert_paragraph().text("intro paragraph").line_count(1);
        })
        .item(1, |item| {
            item.assert_bullet_list()
                .item_count(2)
                .item(0, |entry| {
                    entry.element_count(1).element(0, |element| {
                        element.assert_paragraph().text("first");
                    });
                })
                .item(1, |entry| {
                    entry.element_count(1).element(0, |element| {
                        element.assert_paragraph().text("second");
                    });
                });
        })
        .item(2, |item| {
            item.assert_paragraph().text("closing line");
        })
        .item(3, |item| {
            item.assert_block_quote()
                .element_count(1)
                .element(0, |element| {
                    element.assert_paragraph().text("quoted text");
                })
                .attribution("source");
        });
}

#[test]
fn test_indented_content_after_list_item_nests_in_the_item() {
    // The item's indent contract is still open, so deeper content after a
    // blank line belongs to the item, as a nested block quote.
    assert_eq!(
        parse("* foo\n\n    deeper"),
        body_fragment(vec![bullet(vec![item(vec![
            para(&["foo"]),
            quote(vec![para(&["deeper"])]),
        ])])])
    );
}

#[test]
fn test_list_item_with_nested_quote() {
    assert_eq!(
        parse("* foo\n      deeper"),
        body_fragment(vec![bullet(vec![item(vec![
            para(&["foo"]),
            quote(vec![para(&["deeper"])]),
        ])])])
    );
}

#[test]
fn test_fragment_serializes_to_json() {
    let fragment = parse("hello");
    let value = serde_json::to_value(&fragment).expect("the tree serializes");
    assert_eq!(
        value["body"][0]["Paragraph"]["text"][0]["CharData"],
        serde_json::Value::String("hello".to_string())
    );
}
