//! xdr IR - shared data types for the xdrc generator
//!
//! This crate contains the data passed between pipeline stages:
//! - `Position` and `LineOffsetTable` for source locations
//! - `Token` / `TokenKind` produced by the lexer
//! - `ConstItem` / `SymbolModel` filled in by the parser
//!
//! It has no knowledge of threads, grammar rules or output formats.

mod position;
mod symbol;
mod token;

pub use position::{LineOffsetTable, Position};
pub use symbol::{ConstItem, SymbolModel};
pub use token::{Token, TokenKind, PUNCTUATION};
