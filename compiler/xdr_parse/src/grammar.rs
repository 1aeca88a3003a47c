//! Recursive-descent grammar for XDR / rpcgen definitions.
//!
//! Only `const` definitions and enum bodies feed the symbol model; structs,
//! unions, typedefs and programs are parsed for validity and otherwise
//! ignored. Inline enum bodies (`enum { ... } field;`) count as enum
//! blocks of their own.

use xdr_ir::{Token, TokenKind};

use crate::cursor::{Cursor, TokenSource};
use crate::{LiteralError, ParseError, SymbolAccumulator};

/// Counts of top-level definitions, for logging.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct DefinitionCounts {
    pub consts: usize,
    pub enums: usize,
    pub structs: usize,
    pub unions: usize,
    pub typedefs: usize,
    pub programs: usize,
}

pub(crate) struct Parser<S> {
    cursor: Cursor<S>,
    acc: SymbolAccumulator,
    counts: DefinitionCounts,
}

impl<S: TokenSource> Parser<S> {
    pub(crate) fn new(source: S, acc: SymbolAccumulator) -> Self {
        Parser {
            cursor: Cursor::new(source),
            acc,
            counts: DefinitionCounts::default(),
        }
    }

    pub(crate) fn counts(&self) -> DefinitionCounts {
        self.counts
    }

    pub(crate) fn tokens_consumed(&self) -> usize {
        self.cursor.consumed()
    }

    pub(crate) fn cancel(&mut self) {
        self.cursor.cancel();
    }

    pub(crate) fn into_accumulator(self) -> SymbolAccumulator {
        self.acc
    }

    /// `specification := definition* EOF`
    pub(crate) fn specification(&mut self) -> Result<(), ParseError> {
        while !self.cursor.check(TokenKind::Eof) {
            self.definition()?;
        }
        Ok(())
    }

    fn definition(&mut self) -> Result<(), ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Const => self.const_def(),
            TokenKind::Enum => self.enum_def(),
            TokenKind::Struct => self.struct_def(),
            TokenKind::Union => self.union_def(),
            TokenKind::Typedef => self.typedef_def(),
            TokenKind::Program => self.program_def(),
            _ => Err(self.cursor.unexpected("a definition")),
        }
    }

    // -- Definitions --

    /// `const IDENT = value ;`
    fn const_def(&mut self) -> Result<(), ParseError> {
        self.cursor.expect(TokenKind::Const)?;
        let name = self.cursor.expect_ident()?;
        self.cursor.expect(TokenKind::Eq)?;
        let value = self.value()?;
        self.cursor.expect(TokenKind::Semicolon)?;
        let result = self.acc.add_const(&name.text, &value.text);
        commit(result, &value)?;
        self.counts.consts += 1;
        Ok(())
    }

    /// `enum IDENT enum_body ;`
    fn enum_def(&mut self) -> Result<(), ParseError> {
        self.cursor.expect(TokenKind::Enum)?;
        self.cursor.expect_ident()?;
        self.enum_body()?;
        self.cursor.expect(TokenKind::Semicolon)?;
        self.counts.enums += 1;
        Ok(())
    }

    /// `struct IDENT struct_body ;`
    fn struct_def(&mut self) -> Result<(), ParseError> {
        self.cursor.expect(TokenKind::Struct)?;
        self.cursor.expect_ident()?;
        self.struct_body()?;
        self.cursor.expect(TokenKind::Semicolon)?;
        self.counts.structs += 1;
        Ok(())
    }

    /// `union IDENT union_body ;`
    fn union_def(&mut self) -> Result<(), ParseError> {
        self.cursor.expect(TokenKind::Union)?;
        self.cursor.expect_ident()?;
        self.union_body()?;
        self.cursor.expect(TokenKind::Semicolon)?;
        self.counts.unions += 1;
        Ok(())
    }

    /// `typedef declaration ;`
    fn typedef_def(&mut self) -> Result<(), ParseError> {
        self.cursor.expect(TokenKind::Typedef)?;
        self.declaration()?;
        self.cursor.expect(TokenKind::Semicolon)?;
        self.counts.typedefs += 1;
        Ok(())
    }

    /// `program IDENT { version_def+ } = value ;`
    fn program_def(&mut self) -> Result<(), ParseError> {
        self.cursor.expect(TokenKind::Program)?;
        self.cursor.expect_ident()?;
        self.cursor.expect(TokenKind::LBrace)?;
        loop {
            self.version_def()?;
            if self.cursor.check(TokenKind::RBrace) {
                break;
            }
        }
        self.cursor.expect(TokenKind::RBrace)?;
        self.cursor.expect(TokenKind::Eq)?;
        self.value()?;
        self.cursor.expect(TokenKind::Semicolon)?;
        self.counts.programs += 1;
        Ok(())
    }

    /// `version IDENT { procedure_def+ } = value ;`
    fn version_def(&mut self) -> Result<(), ParseError> {
        self.cursor.expect(TokenKind::Version)?;
        self.cursor.expect_ident()?;
        self.cursor.expect(TokenKind::LBrace)?;
        loop {
            self.procedure_def()?;
            if self.cursor.check(TokenKind::RBrace) {
                break;
            }
        }
        self.cursor.expect(TokenKind::RBrace)?;
        self.cursor.expect(TokenKind::Eq)?;
        self.value()?;
        self.cursor.expect(TokenKind::Semicolon)?;
        Ok(())
    }

    /// `type_or_void IDENT ( type_or_void (, type_spec)* ) = value ;`
    fn procedure_def(&mut self) -> Result<(), ParseError> {
        self.type_or_void()?;
        self.cursor.expect_ident()?;
        self.cursor.expect(TokenKind::LParen)?;
        self.type_or_void()?;
        while self.cursor.eat(TokenKind::Comma) {
            self.type_spec()?;
        }
        self.cursor.expect(TokenKind::RParen)?;
        self.cursor.expect(TokenKind::Eq)?;
        self.value()?;
        self.cursor.expect(TokenKind::Semicolon)?;
        Ok(())
    }

    // -- Bodies --

    /// `{ enumerator (, enumerator)* ,? }`
    fn enum_body(&mut self) -> Result<(), ParseError> {
        self.cursor.expect(TokenKind::LBrace)?;
        self.acc.start_enum_block();
        loop {
            self.enumerator()?;
            if !self.cursor.eat(TokenKind::Comma) || self.cursor.check(TokenKind::RBrace) {
                break;
            }
        }
        self.cursor.expect(TokenKind::RBrace)?;
        Ok(())
    }

    /// `IDENT (= value)?`
    fn enumerator(&mut self) -> Result<(), ParseError> {
        let name = self.cursor.expect_ident()?;
        if self.cursor.eat(TokenKind::Eq) {
            let value = self.value()?;
            let result = self.acc.add_enum_explicit(&name.text, &value.text);
            commit(result, &value)
        } else {
            let result = self.acc.add_enum_auto(&name.text);
            commit(result, &name)
        }
    }

    /// `{ (declaration ;)+ }`
    fn struct_body(&mut self) -> Result<(), ParseError> {
        self.cursor.expect(TokenKind::LBrace)?;
        loop {
            self.declaration()?;
            self.cursor.expect(TokenKind::Semicolon)?;
            if self.cursor.check(TokenKind::RBrace) {
                break;
            }
        }
        self.cursor.expect(TokenKind::RBrace)?;
        Ok(())
    }

    /// `switch ( declaration ) { case_arm+ (default : declaration ;)? }`
    fn union_body(&mut self) -> Result<(), ParseError> {
        self.cursor.expect(TokenKind::Switch)?;
        self.cursor.expect(TokenKind::LParen)?;
        self.declaration()?;
        self.cursor.expect(TokenKind::RParen)?;
        self.cursor.expect(TokenKind::LBrace)?;

        if !self.cursor.check(TokenKind::Case) {
            return Err(self.cursor.unexpected("`case`"));
        }
        while self.cursor.check(TokenKind::Case) {
            while self.cursor.eat(TokenKind::Case) {
                self.value()?;
                self.cursor.expect(TokenKind::Colon)?;
            }
            self.declaration()?;
            self.cursor.expect(TokenKind::Semicolon)?;
        }

        if self.cursor.eat(TokenKind::Default) {
            self.cursor.expect(TokenKind::Colon)?;
            self.declaration()?;
            self.cursor.expect(TokenKind::Semicolon)?;
        }

        self.cursor.expect(TokenKind::RBrace)?;
        Ok(())
    }

    // -- Declarations and types --

    fn declaration(&mut self) -> Result<(), ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Void => {
                self.cursor.advance();
                Ok(())
            }
            TokenKind::Opaque => {
                self.cursor.advance();
                self.cursor.expect_ident()?;
                match self.cursor.current_kind() {
                    TokenKind::LBracket => self.fixed_length(),
                    TokenKind::Lt => self.variable_length(),
                    _ => Err(self.cursor.unexpected("`[` or `<`")),
                }
            }
            TokenKind::String => {
                self.cursor.advance();
                self.cursor.expect_ident()?;
                self.variable_length()
            }
            _ => {
                self.type_spec()?;
                if self.cursor.eat(TokenKind::Star) {
                    self.cursor.expect_ident()?;
                    return Ok(());
                }
                self.cursor.expect_ident()?;
                match self.cursor.current_kind() {
                    TokenKind::LBracket => self.fixed_length(),
                    TokenKind::Lt => self.variable_length(),
                    _ => Ok(()),
                }
            }
        }
    }

    /// `[ value ]`
    fn fixed_length(&mut self) -> Result<(), ParseError> {
        self.cursor.expect(TokenKind::LBracket)?;
        self.value()?;
        self.cursor.expect(TokenKind::RBracket)?;
        Ok(())
    }

    /// `< value? >`
    fn variable_length(&mut self) -> Result<(), ParseError> {
        self.cursor.expect(TokenKind::Lt)?;
        if !self.cursor.check(TokenKind::Gt) {
            self.value()?;
        }
        self.cursor.expect(TokenKind::Gt)?;
        Ok(())
    }

    fn type_or_void(&mut self) -> Result<(), ParseError> {
        if self.cursor.eat(TokenKind::Void) {
            Ok(())
        } else {
            self.type_spec()
        }
    }

    fn type_spec(&mut self) -> Result<(), ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Unsigned => {
                self.cursor.advance();
                if matches!(
                    self.cursor.current_kind(),
                    TokenKind::Int | TokenKind::Hyper | TokenKind::Short | TokenKind::Char
                ) {
                    self.cursor.advance();
                }
                Ok(())
            }
            TokenKind::Int
            | TokenKind::Hyper
            | TokenKind::Short
            | TokenKind::Char
            | TokenKind::Float
            | TokenKind::Double
            | TokenKind::Bool
            | TokenKind::Ident => {
                self.cursor.advance();
                Ok(())
            }
            TokenKind::Enum => {
                self.cursor.advance();
                if self.cursor.check(TokenKind::LBrace) {
                    self.enum_body()
                } else {
                    self.cursor.expect_ident().map(drop)
                }
            }
            TokenKind::Struct => {
                self.cursor.advance();
                if self.cursor.check(TokenKind::LBrace) {
                    self.struct_body()
                } else {
                    self.cursor.expect_ident().map(drop)
                }
            }
            TokenKind::Union => {
                self.cursor.advance();
                if self.cursor.check(TokenKind::Switch) {
                    self.union_body()
                } else {
                    self.cursor.expect_ident().map(drop)
                }
            }
            _ => Err(self.cursor.unexpected("a type")),
        }
    }

    /// `INT | HEX | IDENT`
    fn value(&mut self) -> Result<Token, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::DecInt | TokenKind::HexInt | TokenKind::Ident => Ok(self.cursor.advance()),
            _ => Err(self.cursor.unexpected("a value")),
        }
    }
}

/// Attach the position of `at` to an accumulator failure.
fn commit(result: Result<(), LiteralError>, at: &Token) -> Result<(), ParseError> {
    result.map_err(|error| ParseError::Literal {
        error,
        position: at.position,
    })
}

#[cfg(test)]
mod tests;
