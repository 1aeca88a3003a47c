//! Lexer for XDR protocol definitions using logos.
//!
//! Two entry points share one scanner:
//! - [`lex`] tokenizes a whole source synchronously (tests, tooling).
//! - [`spawn`] runs the scanner on its own thread and hands tokens to the
//!   parser one at a time through a bounded channel ([`TokenStream`]).
//!
//! Either way the sequence ends with exactly one terminal token: `Eof`, or
//! `Error` carrying the first character that matched nothing.

mod raw_token;
mod stream;

use logos::Logos;
use xdr_ir::{LineOffsetTable, Token, TokenKind};

use crate::raw_token::RawToken;

pub use stream::{spawn, TokenStream, CHANNEL_CAPACITY};

/// Iterator over the tokens of one source.
pub struct Scanner<'src> {
    inner: logos::Lexer<'src, RawToken>,
    lines: LineOffsetTable,
    finished: bool,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Scanner {
            inner: RawToken::lexer(source),
            lines: LineOffsetTable::build(source),
            finished: false,
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let source = self.inner.source();
        let token = match self.inner.next() {
            Some(Ok(raw)) => {
                let slice = self.inner.slice();
                let position = self.lines.position(source, self.inner.span().start);
                Token::new(raw.kind(slice), slice, position)
            }
            Some(Err(())) => {
                self.finished = true;
                let span = self.inner.span();
                let offending = source
                    .get(span.start..)
                    .and_then(|rest| rest.chars().next())
                    .unwrap_or('\u{fffd}');
                let position = self.lines.position(source, span.start);
                Token::new(TokenKind::Error, offending.to_string(), position)
            }
            None => {
                self.finished = true;
                Token::eof(self.lines.position(source, source.len()))
            }
        };
        Some(token)
    }
}

/// Tokenize a whole source.
///
/// The returned list always ends with an `Eof` or `Error` token.
pub fn lex(source: &str) -> Vec<Token> {
    Scanner::new(source).collect()
}
