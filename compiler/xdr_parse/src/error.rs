//! Parse error types.
//!
//! Every error is terminal for the run: the parser returns the first one it
//! meets and the tokenizer is cancelled.

use std::num::ParseIntError;

use thiserror::Error;
use xdr_ir::{Position, Token, TokenKind};

/// A numeric literal attached to a constant or enumerator was rejected.
///
/// Returned by the accumulator before anything is appended to the model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    #[error("invalid enum value {name} = {literal}")]
    InvalidEnum {
        name: String,
        literal: String,
        #[source]
        cause: ParseIntError,
    },

    #[error("invalid const value {name} = {literal}")]
    InvalidConst {
        name: String,
        literal: String,
        #[source]
        cause: ParseIntError,
    },

    #[error("enum value {name} overflows a 64-bit integer")]
    EnumOverflow { name: String },
}

impl LiteralError {
    /// The symbol the rejected literal belongs to.
    pub fn symbol(&self) -> &str {
        match self {
            LiteralError::InvalidEnum { name, .. }
            | LiteralError::InvalidConst { name, .. }
            | LiteralError::EnumOverflow { name } => name,
        }
    }
}

/// Error produced while parsing a protocol definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The tokenizer hit a character it does not recognise.
    #[error("{position}: unexpected character {ch:?}")]
    Lex { ch: char, position: Position },

    /// The token stream does not match the grammar.
    #[error("{position}: expected {expected}, found {found}")]
    Syntax {
        expected: String,
        found: String,
        position: Position,
    },

    /// A constant or enumerator value is not a valid 64-bit integer.
    #[error("{position}: {error}")]
    Literal {
        #[source]
        error: LiteralError,
        position: Position,
    },
}

impl ParseError {
    /// Build the error for `found` appearing where `expected` was required.
    ///
    /// An error token from the lexer is reported as a lexical error rather
    /// than a grammar mismatch.
    pub fn unexpected(found: &Token, expected: impl Into<String>) -> Self {
        if found.kind == TokenKind::Error {
            ParseError::Lex {
                ch: found.text.chars().next().unwrap_or('\u{fffd}'),
                position: found.position,
            }
        } else {
            ParseError::Syntax {
                expected: expected.into(),
                found: found.to_string(),
                position: found.position,
            }
        }
    }

    pub fn position(&self) -> Position {
        match self {
            ParseError::Lex { position, .. }
            | ParseError::Syntax { position, .. }
            | ParseError::Literal { position, .. } => *position,
        }
    }
}
