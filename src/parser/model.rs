//! Scope accumulation and the structure-model loop

use std::io::BufRead;
use std::mem;

use super::inline;
use super::lists;
use crate::ast::{
    BlockQuote, Body, BodyElement, Error, Fragment, Paragraph, Position, Structure,
    StructureElement, Text,
};
use crate::lexer::{Scanner, TokenKind};

pub(crate) struct Parser<R> {
    pub(super) scanner: Scanner<R>,
}

/// Routes the elements accumulated in one nesting scope.
///
/// Each variant encodes what its scope admits, so every append site
/// dispatches on the scope kind instead of the caller wiring up handler
/// closures per context.
pub(crate) enum Accumulator {
    /// Top-level and section scopes. Body content accumulates until the
    /// first structural element arrives; from then on the scope is
    /// structural for good and body input degrades to errors.
    Scope {
        body: Body,
        structure: Structure,
        structural: bool,
    },
    /// Scopes that admit body content only (list items). Structural input
    /// degrades to an error in the body.
    BodyOnly { body: Body },
    /// Block-quote bodies: body-only, attribution-aware. An attribution
    /// closes the current quote and further content opens a sibling, so a
    /// single indented region can yield a chain of quotes.
    Quotes {
        quotes: Vec<BlockQuote>,
        open: bool,
    },
}

/// Returns the quote currently accepting content, opening one if the last
/// was closed by an attribution (or none exists yet).
fn open_quote<'a>(quotes: &'a mut Vec<BlockQuote>, open: &mut bool) -> &'a mut BlockQuote {
    if !*open {
        quotes.push(BlockQuote::default());
        *open = true;
    }
    quotes.last_mut().expect("a quote was just opened")
}

impl Accumulator {
    pub(crate) fn scope() -> Self {
        Accumulator::Scope {
            body: Vec::new(),
            structure: Vec::new(),
            structural: false,
        }
    }

    pub(crate) fn body_only() -> Self {
        Accumulator::BodyOnly { body: Vec::new() }
    }

    pub(crate) fn quotes() -> Self {
        Accumulator::Quotes {
            quotes: Vec::new(),
            open: false,
        }
    }

    pub(crate) fn push_body(&mut self, element: BodyElement, position: &Position) {
        match self {
            Accumulator::Scope {
                body,
                structural: false,
                ..
            } => body.push(element),
            Accumulator::Scope {
                structure,
                structural: true,
                ..
            } => structure.push(StructureElement::Error(Error::new(
                "body elements may not appear after sections",
                position.clone(),
            ))),
            Accumulator::BodyOnly { body } => body.push(element),
            Accumulator::Quotes { quotes, open } => {
                open_quote(quotes, open).quote.push(element);
            }
        }
    }

    // No input syntax produces structural elements yet; section and
    // transition recognition will route through here.
    #[allow(dead_code)]
    pub(crate) fn push_structure(&mut self, element: StructureElement, position: &Position) {
        match self {
            Accumulator::Scope {
                structure,
                structural,
                ..
            } => {
                // The first structural element switches the scope for the
                // rest of its lifetime; there is no way back to body
                // accumulation.
                *structural = true;
                structure.push(element);
            }
            other => other.push_body(
                BodyElement::Error(Error::new(
                    "structure elements may not appear here",
                    position.clone(),
                )),
                position,
            ),
        }
    }

    /// Errors are legal in both element families; they land wherever the
    /// scope's current mode points.
    pub(crate) fn push_error(&mut self, error: Error) {
        match self {
            Accumulator::Scope {
                structure,
                structural: true,
                ..
            } => structure.push(StructureElement::Error(error)),
            other => {
                let position = error.position.clone();
                other.push_body(BodyElement::Error(error), &position);
            }
        }
    }

    /// Late-indent restructuring: everything accumulated so far in this
    /// scope was really one level deeper, inside a block quote. The
    /// accumulated sequence is replaced in place by a single quote wrapping
    /// it, before anything further is appended.
    pub(crate) fn wrap_in_block_quote(&mut self, position: &Position) {
        match self {
            Accumulator::Scope {
                body,
                structural: false,
                ..
            } => {
                let quote = mem::take(body);
                body.push(BodyElement::BlockQuote(BlockQuote::new(quote)));
            }
            Accumulator::Scope {
                structure,
                structural: true,
                ..
            } => structure.push(StructureElement::Error(Error::new(
                "block quote cannot terminate here",
                position.clone(),
            ))),
            Accumulator::BodyOnly { body } => {
                let quote = mem::take(body);
                body.push(BodyElement::BlockQuote(BlockQuote::new(quote)));
            }
            Accumulator::Quotes { quotes, open } => {
                let current = open_quote(quotes, open);
                let quote = mem::take(&mut current.quote);
                current.quote.push(BodyElement::BlockQuote(BlockQuote::new(quote)));
            }
        }
    }

    pub(crate) fn accepts_attribution(&self) -> bool {
        matches!(self, Accumulator::Quotes { .. })
    }

    /// Assigns the attribution of the current quote and closes it; further
    /// content in the same scope opens a sibling quote.
    pub(crate) fn push_attribution(&mut self, text: Text) {
        match self {
            Accumulator::Quotes { quotes, open } => {
                open_quote(quotes, open).attribution = Some(text);
                *open = false;
            }
            _ => unreachable!("attribution offered to a scope that does not accept attributions"),
        }
    }

    pub(crate) fn into_scope(self) -> (Body, Structure) {
        match self {
            Accumulator::Scope { body, structure, .. } => (body, structure),
            _ => unreachable!("scope finalizer applied to a non-scope accumulator"),
        }
    }

    pub(crate) fn into_body(self) -> Body {
        match self {
            Accumulator::BodyOnly { body } => body,
            _ => unreachable!("body finalizer applied to a non-body accumulator"),
        }
    }

    pub(crate) fn into_quotes(self) -> Vec<BlockQuote> {
        match self {
            Accumulator::Quotes { quotes, .. } => quotes,
            _ => unreachable!("quote finalizer applied to a non-quote accumulator"),
        }
    }
}

impl<R: BufRead> Parser<R> {
    pub(crate) fn new(scanner: Scanner<R>) -> Self {
        Self { scanner }
    }

    pub(crate) fn parse_fragment(mut self) -> Fragment {
        let mut acc = Accumulator::scope();
        self.parse_structure_model(TokenKind::Eof, &mut acc);
        let (body, structure) = acc.into_scope();
        Fragment { body, structure }
    }

    /// The structure-model loop: peeks the next token and dispatches until
    /// the terminating kind arrives. Nothing input-triggered stops the
    /// parse; failures become error nodes and the loop keeps consuming.
    fn parse_structure_model(&mut self, end: TokenKind, acc: &mut Accumulator) {
        loop {
            self.scanner.skip_blanks();

            let (kind, position) = {
                let next = self.scanner.peek();
                (next.kind, next.position.clone())
            };

            if kind == end {
                self.scanner.read();
                break;
            }

            match kind {
                TokenKind::Eof => {
                    // Unterminated nested scope.
                    acc.push_error(Error::new("unexpected end of input", position));
                    break;
                }
                TokenKind::Error => {
                    // The framing failure repeats forever by contract, so
                    // record it once and stop; consuming further tokens
                    // cannot make progress.
                    let token = self.scanner.read();
                    acc.push_error(Error::new(token.text, position));
                    break;
                }
                TokenKind::Indent => {
                    for quote in self.parse_block_quotes() {
                        acc.push_body(BodyElement::BlockQuote(quote), &position);
                    }
                }
                TokenKind::LateIndent => {
                    self.scanner.read();
                    acc.wrap_in_block_quote(&position);
                }
                TokenKind::Line => {
                    let text = self.scanner.peek().text.clone();
                    if acc.accepts_attribution() {
                        if let Some(width) = lists::attribution_width(&text) {
                            self.parse_attribution(width, acc);
                            continue;
                        }
                    }
                    if let Some(marker) = lists::bullet_marker(&text) {
                        let list = self.parse_bullet_list(marker.glyph);
                        acc.push_body(list, &position);
                    } else if let Some(marker) = lists::enumerated_marker(&text) {
                        let list = self.parse_enumerated_list(&marker);
                        acc.push_body(list, &position);
                    } else {
                        let text = self.parse_text();
                        acc.push_body(BodyElement::Paragraph(Paragraph::new(text)), &position);
                    }
                }
                _ => {
                    // Nothing in the structure model can hold this token
                    // (literal lines today). Consume it so the loop can
                    // resynchronize on the next one.
                    let token = self.scanner.read();
                    acc.push_error(Error::new(
                        format!("unexpected token: {}", token.kind),
                        position,
                    ));
                }
            }
        }
    }

    /// Parses one indented region as a chain of block quotes: normally a
    /// single quote, more when attributions split the quoted content.
    fn parse_block_quotes(&mut self) -> Vec<BlockQuote> {
        let indent = self.scanner.read();
        assert_eq!(
            indent.kind,
            TokenKind::Indent,
            "block quote parse must start on an INDENT token"
        );
        let mut acc = Accumulator::quotes();
        self.parse_structure_model(TokenKind::Dedent, &mut acc);
        acc.into_quotes()
    }

    /// Parses `-- source`, plus any indented continuation lines, as the
    /// current quote's attribution.
    fn parse_attribution(&mut self, width: usize, acc: &mut Accumulator) {
        let first = self.scanner.read();
        let position = first.position.clone();
        // Continuation lines align with the text after the marker.
        self.scanner.push_indent(width);
        self.scanner.push_back_suffix(&first, width);
        let text = self.parse_text();
        if self.scanner.peek().kind == TokenKind::Dedent {
            self.scanner.eat(TokenKind::Dedent);
        } else {
            acc.push_error(Error::new("missing dedent after attribution", position));
        }
        acc.push_attribution(text);
    }

    /// Parses a body-only nested scope (a list item's content).
    pub(crate) fn parse_body(&mut self, end: TokenKind) -> Body {
        let mut acc = Accumulator::body_only();
        self.parse_structure_model(end, &mut acc);
        acc.into_body()
    }

    /// Collects the consecutive plain lines in front of the scanner and
    /// hands them to the inline-markup delegate.
    pub(crate) fn parse_text(&mut self) -> Text {
        let mut lines = Vec::new();
        while self.scanner.peek().kind == TokenKind::Line {
            lines.push(self.scanner.read().text);
        }
        inline::parse_inline(&lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{InlineElement, Section};

    fn pos() -> Position {
        Position::new(1, 1, "test.rst")
    }

    fn paragraph(content: &str) -> BodyElement {
        BodyElement::Paragraph(Paragraph::new(vec![InlineElement::CharData(
            content.to_string(),
        )]))
    }

    fn section(title: &str) -> StructureElement {
        StructureElement::Section(Section {
            title: vec![InlineElement::CharData(title.to_string())],
            body: Vec::new(),
            children: Vec::new(),
        })
    }

    #[test]
    fn test_scope_switches_to_structural_for_good() {
        let mut acc = Accumulator::scope();
        acc.push_body(paragraph("before"), &pos());
        acc.push_structure(section("title"), &pos());
        acc.push_body(paragraph("after"), &pos());

        let (body, structure) = acc.into_scope();
        assert_eq!(body, vec![paragraph("before")]);
        assert_eq!(structure.len(), 2);
        assert_eq!(structure[0], section("title"));
        match &structure[1] {
            StructureElement::Error(e) => {
                assert_eq!(e.message, "body elements may not appear after sections")
            }
            other => panic!("expected an error element, found {}", other.node_type()),
        }
    }

    #[test]
    fn test_structural_scope_rejects_late_indent_wrap() {
        let mut acc = Accumulator::scope();
        acc.push_structure(section("title"), &pos());
        acc.wrap_in_block_quote(&pos());

        let (_, structure) = acc.into_scope();
        match &structure[1] {
            StructureElement::Error(e) => {
                assert_eq!(e.message, "block quote cannot terminate here")
            }
            other => panic!("expected an error element, found {}", other.node_type()),
        }
    }

    #[test]
    fn test_body_only_scope_degrades_structural_input() {
        let mut acc = Accumulator::body_only();
        acc.push_structure(section("title"), &pos());

        let body = acc.into_body();
        assert_eq!(body.len(), 1);
        match &body[0] {
            BodyElement::Error(e) => {
                assert_eq!(e.message, "structure elements may not appear here")
            }
            other => panic!("expected an error element, found {}", other.node_type()),
        }
    }

    #[test]
    fn test_late_indent_wrap_replaces_accumulated_body() {
        let mut acc = Accumulator::body_only();
        acc.push_body(paragraph("first"), &pos());
        acc.push_body(paragraph("second"), &pos());
        acc.wrap_in_block_quote(&pos());
        acc.push_body(paragraph("sibling"), &pos());

        let body = acc.into_body();
        assert_eq!(
            body,
            vec![
                BodyElement::BlockQuote(BlockQuote::new(vec![
                    paragraph("first"),
                    paragraph("second"),
                ])),
                paragraph("sibling"),
            ]
        );
    }

    #[test]
    fn test_attribution_closes_quote_and_chains_siblings() {
        let mut acc = Accumulator::quotes();
        acc.push_body(paragraph("quoted"), &pos());
        acc.push_attribution(vec![InlineElement::CharData("source".to_string())]);
        acc.push_body(paragraph("another"), &pos());

        let quotes = acc.into_quotes();
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].quote, vec![paragraph("quoted")]);
        assert_eq!(
            quotes[0].attribution,
            Some(vec![InlineElement::CharData("source".to_string())])
        );
        assert_eq!(quotes[1].quote, vec![paragraph("another")]);
        assert_eq!(quotes[1].attribution, None);
    }

    #[test]
    fn test_attribution_before_content_opens_empty_quote() {
        let mut acc = Accumulator::quotes();
        acc.push_attribution(vec![InlineElement::CharData("source".to_string())]);

        let quotes = acc.into_quotes();
        assert_eq!(quotes.len(), 1);
        assert!(quotes[0].quote.is_empty());
        assert!(quotes[0].attribution.is_some());
    }

    #[test]
    fn test_quote_scope_wraps_current_quote_only() {
        let mut acc = Accumulator::quotes();
        acc.push_body(paragraph("deep"), &pos());
        acc.wrap_in_block_quote(&pos());
        acc.push_body(paragraph("shallow"), &pos());

        let quotes = acc.into_quotes();
        assert_eq!(quotes.len(), 1);
        assert_eq!(
            quotes[0].quote,
            vec![
                BodyElement::BlockQuote(BlockQuote::new(vec![paragraph("deep")])),
                paragraph("shallow"),
            ]
        );
    }
}
