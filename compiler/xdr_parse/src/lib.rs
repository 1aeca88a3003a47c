//! Parser for XDR protocol definitions.
//!
//! The grammar pulls tokens from a [`TokenSource`] (normally the threaded
//! [`xdr_lexer::TokenStream`]) and reports every `const` definition and
//! enumerator to a [`SymbolAccumulator`]. The accumulator is handed in by
//! the caller and handed back when the parse succeeds; nothing is global,
//! so independent parses can run side by side.
//!
//! Parsing stops at the first error. The token source is cancelled on
//! every exit path so a threaded lexer never outlives the parse.

mod accumulator;
mod cursor;
mod error;
mod grammar;

use tracing::debug;
use xdr_ir::SymbolModel;
use xdr_lexer::Scanner;

pub use accumulator::{parse_number, SymbolAccumulator};
pub use cursor::{Cursor, TokenSource};
pub use error::{LiteralError, ParseError};
pub use grammar::DefinitionCounts;

use grammar::Parser;

/// Parse a whole specification into `acc` and return it.
pub fn parse_into<S: TokenSource>(
    source: S,
    acc: SymbolAccumulator,
) -> Result<SymbolAccumulator, ParseError> {
    let mut parser = Parser::new(source, acc);
    let result = parser.specification();
    parser.cancel();

    let counts = parser.counts();
    match result {
        Ok(()) => {
            debug!(
                tokens = parser.tokens_consumed(),
                consts = counts.consts,
                enums = counts.enums,
                structs = counts.structs,
                unions = counts.unions,
                typedefs = counts.typedefs,
                programs = counts.programs,
                "parse finished"
            );
            Ok(parser.into_accumulator())
        }
        Err(err) => {
            debug!(tokens = parser.tokens_consumed(), %err, "parse failed");
            Err(err)
        }
    }
}

/// Parse a whole specification into a fresh model.
pub fn parse<S: TokenSource>(source: S) -> Result<SymbolModel, ParseError> {
    parse_into(source, SymbolAccumulator::new()).map(SymbolAccumulator::into_model)
}

/// Parse in-memory source on the calling thread.
pub fn parse_str(source: &str) -> Result<SymbolModel, ParseError> {
    parse(Scanner::new(source))
}
