//! Indentation-aware scanner
//!
//! The scanner consumes framed lines one at a time and produces a
//! single-token-lookahead stream. Indentation is not a fixed grammar token:
//! the scanner keeps a stack of the indent levels it has issued INDENT
//! tokens for, and emits matching DEDENT tokens as the input falls back out
//! of them. A dedent that lands strictly between two known levels reveals an
//! intermediate level that was never seen on its own; it is materialized and
//! reported as a single LATE_INDENT token so the parser can restructure what
//! it has already built.
//!
//! The parser feeds contracts back into the scanner: `push_indent` opens a
//! synthetic level for constructs whose continuation lines align inside the
//! marker line (list items, attributions), and `lazy_indent` lets the next
//! line's own indentation define the level for hanging constructs.

use std::cmp::Ordering;
use std::io::BufRead;

use super::lines::Lines;
use super::tokens::{Token, TokenKind};
use crate::ast::Position;

pub struct Scanner<R> {
    lines: Lines<R>,
    filename: String,

    /// Line number of the next unframed line, 1-based.
    line: usize,

    /// Every indent level an INDENT has been issued for, plus the permanent
    /// base level 0, outermost first.
    indents: Vec<usize>,

    literal: bool,
    lazy: bool,

    /// Sticky line-framing failure; once set the scanner produces an
    /// unbounded stream of ERROR tokens carrying this text.
    failed: Option<String>,

    peeked: Option<Token>,

    /// The real token framed from the current physical line, and the indent
    /// level it sits at. Synthetic indentation tokens are emitted until the
    /// stack matches `next_indent`, then the real token is released.
    next_token: Option<Token>,
    next_indent: usize,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(reader: R, filename: impl Into<String>) -> Self {
        Self {
            lines: Lines::new(reader),
            filename: filename.into(),
            line: 1,
            indents: vec![0],
            literal: false,
            lazy: false,
            failed: None,
            peeked: None,
            next_token: None,
            next_indent: 0,
        }
    }

    /// Returns the next token without consuming it. Idempotent: any number
    /// of peeks before a `read` yield the same token.
    pub fn peek(&mut self) -> &Token {
        if self.peeked.is_none() {
            let token = self.advance();
            self.peeked = Some(token);
        }
        self.peeked.as_ref().expect("peek slot was just filled")
    }

    /// Consumes and returns the next token.
    ///
    /// Once end of input is reached the scanner produces an infinite stream
    /// of EOF tokens; after a framing error, an infinite stream of ERROR
    /// tokens.
    pub fn read(&mut self) -> Token {
        self.peek();
        self.peeked.take().expect("peek populates the slot")
    }

    /// Consumes blank-line tokens until something else is pending.
    pub fn skip_blanks(&mut self) {
        while self.peek().kind == TokenKind::Blank {
            self.read();
        }
    }

    /// Consumes the next token, asserting its kind. Callers must have
    /// already peeked the kind; anything else is a parser bug.
    pub fn eat(&mut self, kind: TokenKind) -> Token {
        let token = self.read();
        assert_eq!(token.kind, kind, "expected {} token, found {}", kind, token.kind);
        token
    }

    /// Opens a synthetic indentation level `n` columns beyond the current
    /// one. Used just after reading a line whose marker the remaining lines
    /// must align past (for bullet list items, the text after the bullet,
    /// not the bullet itself). One matching DEDENT is emitted when the
    /// indentation falls back out of the level.
    ///
    /// Must not be called with an unread peeked token outstanding.
    pub fn push_indent(&mut self, n: usize) {
        assert!(
            self.peeked.is_none(),
            "push_indent called with an outstanding peeked token"
        );
        let level = self.current_indent() + n;
        self.indents.push(level);
    }

    /// Declares that the next line's own indentation defines a new level,
    /// provided it is a line token indented strictly deeper than the
    /// current level. No INDENT is emitted for the new level (the caller is
    /// already inside the construct it belongs to); if the next token does
    /// not qualify, a single synthetic DEDENT is emitted so the caller can
    /// cleanly leave the context it had prepared.
    ///
    /// Used for constructs with hanging markers, like field and option
    /// lists. Must not be called with an unread peeked token outstanding.
    pub fn lazy_indent(&mut self) {
        assert!(
            self.peeked.is_none(),
            "lazy_indent called with an outstanding peeked token"
        );
        self.lazy = true;
    }

    /// Re-queues the remainder of a just-read line token after its first
    /// `n` bytes, as though it were a fresh line at the new indent level.
    /// A remainder of zero length queues nothing. Used together with
    /// `push_indent` for marker-led constructs.
    pub fn push_back_suffix(&mut self, token: &Token, n: usize) {
        assert!(
            self.peeked.is_none(),
            "push_back_suffix called with an outstanding peeked token"
        );
        if token.text.len() <= n {
            return;
        }
        let position = Position::new(
            token.position.line,
            token.position.column + n,
            self.filename.clone(),
        );
        self.peeked = Some(Token::new(TokenKind::Line, &token.text[n..], position));
    }

    fn current_indent(&self) -> usize {
        *self
            .indents
            .last()
            .expect("the indent stack keeps a permanent base level")
    }

    /// Produces the next token: either the real pending token, or a
    /// synthetic one that moves the indent stack toward `next_indent`.
    fn advance(&mut self) -> Token {
        self.refill();

        if self.lazy {
            self.lazy = false;
            let next = self
                .next_token
                .as_ref()
                .expect("refill leaves a pending token");
            if next.kind != TokenKind::Line || self.next_indent <= self.current_indent() {
                return Token::new(TokenKind::Dedent, "", next.position.clone());
            }
            // The caller is already positioned inside the new level, so it
            // is recorded without emitting an INDENT token.
            self.indents.push(self.next_indent);
        }

        match self.next_indent.cmp(&self.current_indent()) {
            Ordering::Greater => {
                self.indents.push(self.next_indent);
                let next = self
                    .next_token
                    .as_ref()
                    .expect("refill leaves a pending token");
                Token::new(
                    TokenKind::Indent,
                    " ".repeat(self.next_indent),
                    Position::new(next.position.line, 1, self.filename.clone()),
                )
            }
            Ordering::Less => {
                debug_assert!(self.indents.len() > 1, "dedent would pop the base level");
                self.indents.pop();
                let next = self
                    .next_token
                    .as_ref()
                    .expect("refill leaves a pending token");
                if self.next_indent > self.current_indent() {
                    // The indent fell to a depth between two known levels:
                    // an intermediate level existed that the stack never
                    // recorded. Materialize it and tell the parser to
                    // reinterpret the current scope as one level deeper.
                    self.indents.push(self.next_indent);
                    Token::new(
                        TokenKind::LateIndent,
                        " ".repeat(self.next_indent),
                        Position::new(next.position.line, 1, self.filename.clone()),
                    )
                } else {
                    Token::new(TokenKind::Dedent, "", next.position.clone())
                }
            }
            Ordering::Equal => self
                .next_token
                .take()
                .expect("refill leaves a pending token"),
        }
    }

    /// Frames the next physical line into `next_token`/`next_indent`. Does
    /// nothing while a real token is still pending.
    fn refill(&mut self) {
        if self.next_token.is_some() {
            return;
        }

        let mut position = Position::new(self.line, 1, self.filename.clone());

        if let Some(message) = &self.failed {
            self.next_indent = self.current_indent();
            self.next_token = Some(Token::new(TokenKind::Error, message.clone(), position));
            return;
        }

        let whole = match self.lines.next() {
            None => {
                // Pop every open indent before the EOF token itself, so the
                // parser can unwind any nested context it is in.
                self.next_indent = 0;
                self.next_token = Some(Token::new(TokenKind::Eof, "", position));
                return;
            }
            Some(Err(err)) => {
                let message = err.to_string();
                self.next_indent = self.current_indent();
                self.next_token =
                    Some(Token::new(TokenKind::Error, message.clone(), position));
                self.failed = Some(message);
                return;
            }
            Some(Ok(line)) => line,
        };
        self.line += 1;

        let bytes = whole.as_bytes();
        let mut indent = 0;
        let mut start = 0;
        while start < bytes.len() {
            match bytes[start] {
                b' ' => indent += 1,
                // 8-column tab stops
                b'\t' => indent += 8 - indent % 8,
                _ => break,
            }
            start += 1;
        }

        if self.literal {
            // A literal block continues through any non-blank line indented
            // deeper than the line that introduced it, which is the current
            // indent level whenever the flag is set. Trimming the common
            // leading whitespace is the consumer's job once it has the whole
            // run, so the token carries the entire raw line.
            if start < bytes.len() && indent > self.current_indent() {
                self.next_indent = self.current_indent();
                self.next_token = Some(Token::new(TokenKind::Literal, whole, position));
                return;
            }
            self.literal = false;
        }

        let mut data = &whole[start..];

        if data.len() >= 2 && data.ends_with("::") {
            // Marker of the beginning of literal lines.
            self.literal = true;
            if data.len() >= 3 {
                let before = data.as_bytes()[data.len() - 3];
                if before != b' ' && before != b'\t' {
                    // `word::` retains one of the two colons as visible text.
                    data = &data[..data.len() - 1];
                } else {
                    data = &data[..data.len() - 2];
                }
            } else {
                // The marker alone reads as a blank line, but it still
                // fixes the indent level in case it opens a nested block.
                self.next_indent = indent;
                self.next_token = Some(Token::new(TokenKind::Blank, "", position));
                return;
            }
        }

        let data = data.trim();

        if data.is_empty() {
            // Blank lines continue the current indent level, so they never
            // produce synthetic indentation tokens.
            self.next_indent = self.current_indent();
            self.next_token = Some(Token::new(TokenKind::Blank, "", position));
            return;
        }

        position.column = indent + 1;
        self.next_indent = indent;
        self.next_token = Some(Token::new(TokenKind::Line, data, position));
    }
}
