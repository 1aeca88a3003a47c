//! Token types produced by the lexer.

use std::fmt;

use crate::Position;

/// The single-character structural tokens, in the order rpcgen lists them.
pub const PUNCTUATION: &str = "{}[]<>(),=;:*";

/// Token kind.
///
/// Every grammar keyword has its own kind; the single-character structural
/// tokens are keyed by their character (see [`TokenKind::from_punct`]).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    // Keywords
    Bool,
    Case,
    Char,
    Const,
    Default,
    Double,
    Enum,
    Float,
    Hyper,
    Int,
    Opaque,
    Program,
    Short,
    String,
    Struct,
    Switch,
    Typedef,
    Union,
    Unsigned,
    Version,
    Void,

    // Identifiers and literals
    Ident,
    /// Decimal integer literal, possibly negative.
    DecInt,
    /// `0x`-prefixed hexadecimal literal.
    HexInt,

    // Punctuation
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Lt,
    Gt,
    LParen,
    RParen,
    Comma,
    Eq,
    Semicolon,
    Colon,
    Star,

    // Terminators
    Eof,
    /// Unrecognised input. The token text holds the offending character.
    Error,
}

impl TokenKind {
    /// Map a structural character to its token kind.
    pub fn from_punct(c: char) -> Option<TokenKind> {
        let kind = match c {
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            '<' => TokenKind::Lt,
            '>' => TokenKind::Gt,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ',' => TokenKind::Comma,
            '=' => TokenKind::Eq,
            ';' => TokenKind::Semicolon,
            ':' => TokenKind::Colon,
            '*' => TokenKind::Star,
            _ => return None,
        };
        Some(kind)
    }

    /// Check if this kind is one of the grammar keywords.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Bool
                | TokenKind::Case
                | TokenKind::Char
                | TokenKind::Const
                | TokenKind::Default
                | TokenKind::Double
                | TokenKind::Enum
                | TokenKind::Float
                | TokenKind::Hyper
                | TokenKind::Int
                | TokenKind::Opaque
                | TokenKind::Program
                | TokenKind::Short
                | TokenKind::String
                | TokenKind::Struct
                | TokenKind::Switch
                | TokenKind::Typedef
                | TokenKind::Union
                | TokenKind::Unsigned
                | TokenKind::Version
                | TokenKind::Void
        )
    }

    /// Check if this kind is an integer literal of either base.
    #[inline]
    pub fn is_integer(self) -> bool {
        matches!(self, TokenKind::DecInt | TokenKind::HexInt)
    }

    /// Human-readable name used in diagnostics.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Bool => "bool",
            TokenKind::Case => "case",
            TokenKind::Char => "char",
            TokenKind::Const => "const",
            TokenKind::Default => "default",
            TokenKind::Double => "double",
            TokenKind::Enum => "enum",
            TokenKind::Float => "float",
            TokenKind::Hyper => "hyper",
            TokenKind::Int => "int",
            TokenKind::Opaque => "opaque",
            TokenKind::Program => "program",
            TokenKind::Short => "short",
            TokenKind::String => "string",
            TokenKind::Struct => "struct",
            TokenKind::Switch => "switch",
            TokenKind::Typedef => "typedef",
            TokenKind::Union => "union",
            TokenKind::Unsigned => "unsigned",
            TokenKind::Version => "version",
            TokenKind::Void => "void",
            TokenKind::Ident => "identifier",
            TokenKind::DecInt => "integer",
            TokenKind::HexInt => "hex integer",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Comma => ",",
            TokenKind::Eq => "=",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Star => "*",
            TokenKind::Eof => "end of input",
            TokenKind::Error => "invalid character",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A token with its raw lexeme and where it started.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: Position) -> Self {
        Token {
            kind,
            text: text.into(),
            position,
        }
    }

    /// End-of-input token at `position`.
    pub fn eof(position: Position) -> Self {
        Token::new(TokenKind::Eof, "", position)
    }

    /// Check if this token ends the stream (end-of-input or error).
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, TokenKind::Eof | TokenKind::Error)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Ident | TokenKind::DecInt | TokenKind::HexInt => {
                write!(f, "{} `{}`", self.kind, self.text)
            }
            TokenKind::Error => write!(f, "invalid character {:?}", self.text),
            kind if kind.is_keyword() => write!(f, "keyword `{kind}`"),
            TokenKind::Eof => f.write_str("end of input"),
            kind => write!(f, "`{kind}`"),
        }
    }
}

#[cfg(test)]
mod tests;
