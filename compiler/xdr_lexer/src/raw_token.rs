//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived scanner output before it is
//! paired with its lexeme and position.

use logos::{FilterResult, Lexer, Logos};
use xdr_ir::TokenKind;

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
pub(crate) enum RawToken {
    /// `/* ... */`, never produced: the callback skips it or fails.
    #[token("/*", block_comment)]
    BlockComment,

    /// rpcgen pass-through line, never produced. Only valid in column 1.
    #[regex(r"%[^\n]*", passthrough_line)]
    Passthrough,

    #[token("bool")]
    Bool,
    #[token("case")]
    Case,
    #[token("char")]
    Char,
    #[token("const")]
    Const,
    #[token("default")]
    Default,
    #[token("double")]
    Double,
    #[token("enum")]
    Enum,
    #[token("float")]
    Float,
    #[token("hyper")]
    Hyper,
    #[token("int")]
    Int,
    #[token("opaque")]
    Opaque,
    #[token("program")]
    Program,
    #[token("short")]
    Short,
    #[token("string")]
    String,
    #[token("struct")]
    Struct,
    #[token("switch")]
    Switch,
    #[token("typedef")]
    Typedef,
    #[token("union")]
    Union,
    #[token("unsigned")]
    Unsigned,
    #[token("version")]
    Version,
    #[token("void")]
    Void,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    #[regex(r"0x[0-9a-fA-F]+")]
    HexInt,

    #[regex(r"-?[0-9]+")]
    DecInt,

    /// One of `{}[]<>(),=;:*`; the kind is looked up from the character.
    #[regex(r"[{}\[\]<>(),=;:*]")]
    Punct,
}

/// Skip to the end of a block comment. An unterminated comment is an error
/// at its opening `/`.
fn block_comment(lex: &mut Lexer<'_, RawToken>) -> FilterResult<(), ()> {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            FilterResult::Skip
        }
        None => FilterResult::Error(()),
    }
}

/// Skip a `%` line, provided the `%` starts the line.
fn passthrough_line(lex: &mut Lexer<'_, RawToken>) -> FilterResult<(), ()> {
    let before = &lex.source()[..lex.span().start];
    if before.is_empty() || before.ends_with('\n') {
        FilterResult::Skip
    } else {
        FilterResult::Error(())
    }
}

impl RawToken {
    /// Resolve the final token kind. `slice` is the matched text.
    pub(crate) fn kind(self, slice: &str) -> TokenKind {
        match self {
            RawToken::Bool => TokenKind::Bool,
            RawToken::Case => TokenKind::Case,
            RawToken::Char => TokenKind::Char,
            RawToken::Const => TokenKind::Const,
            RawToken::Default => TokenKind::Default,
            RawToken::Double => TokenKind::Double,
            RawToken::Enum => TokenKind::Enum,
            RawToken::Float => TokenKind::Float,
            RawToken::Hyper => TokenKind::Hyper,
            RawToken::Int => TokenKind::Int,
            RawToken::Opaque => TokenKind::Opaque,
            RawToken::Program => TokenKind::Program,
            RawToken::Short => TokenKind::Short,
            RawToken::String => TokenKind::String,
            RawToken::Struct => TokenKind::Struct,
            RawToken::Switch => TokenKind::Switch,
            RawToken::Typedef => TokenKind::Typedef,
            RawToken::Union => TokenKind::Union,
            RawToken::Unsigned => TokenKind::Unsigned,
            RawToken::Version => TokenKind::Version,
            RawToken::Void => TokenKind::Void,
            RawToken::Ident => TokenKind::Ident,
            RawToken::HexInt => TokenKind::HexInt,
            RawToken::DecInt => TokenKind::DecInt,
            RawToken::BlockComment | RawToken::Passthrough => TokenKind::Error,
            RawToken::Punct => slice
                .chars()
                .next()
                .and_then(TokenKind::from_punct)
                .unwrap_or(TokenKind::Error),
        }
    }
}
