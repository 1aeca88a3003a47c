//! Token cursor for the grammar.
//!
//! Holds exactly one token of lookahead pulled from a [`TokenSource`]. The
//! source is only asked for the next token when the current one is
//! consumed, so with a threaded [`TokenStream`] the lexer stays one token
//! ahead of the parser.

use tracing::trace;
use xdr_ir::{Token, TokenKind};
use xdr_lexer::{Scanner, TokenStream};

use crate::ParseError;

/// Anything the parser can pull tokens from.
pub trait TokenSource {
    /// Next token. Once a terminal token has been returned, keeps returning
    /// end-of-input.
    fn next_token(&mut self) -> Token;

    /// Tell the producer no more tokens will be read.
    fn cancel(&mut self) {}
}

impl TokenSource for TokenStream {
    fn next_token(&mut self) -> Token {
        TokenStream::next_token(self)
    }

    fn cancel(&mut self) {
        TokenStream::cancel(self);
    }
}

/// Synchronous source, used for in-memory parsing.
impl TokenSource for Scanner<'_> {
    fn next_token(&mut self) -> Token {
        self.next()
            .unwrap_or_else(|| Token::eof(xdr_ir::Position::default()))
    }
}

pub struct Cursor<S> {
    source: S,
    current: Token,
    consumed: usize,
}

impl<S: TokenSource> Cursor<S> {
    /// Create a cursor positioned at the first token.
    pub fn new(mut source: S) -> Self {
        let current = source.next_token();
        Cursor {
            source,
            current,
            consumed: 0,
        }
    }

    #[inline]
    pub fn current(&self) -> &Token {
        &self.current
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Number of tokens consumed so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Consume the current token and return it.
    ///
    /// A terminal token is never consumed; advancing at end-of-input (or at
    /// an error token) returns a copy of it.
    pub fn advance(&mut self) -> Token {
        if self.current.is_terminal() {
            return self.current.clone();
        }
        trace!(
            kind = %self.current.kind,
            position = %self.current.position,
            "advance"
        );
        let next = self.source.next_token();
        self.consumed += 1;
        std::mem::replace(&mut self.current, next)
    }

    /// Consume the current token if it has the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of the given kind or fail.
    pub fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(format!("`{kind}`")))
        }
    }

    /// Consume an identifier.
    pub fn expect_ident(&mut self) -> Result<Token, ParseError> {
        if self.check(TokenKind::Ident) {
            Ok(self.advance())
        } else {
            Err(self.unexpected("an identifier"))
        }
    }

    /// Error for the current token not being `expected`.
    pub fn unexpected(&self, expected: impl Into<String>) -> ParseError {
        ParseError::unexpected(&self.current, expected)
    }

    /// Stop the underlying token source.
    pub fn cancel(&mut self) {
        self.source.cancel();
    }
}
