//! Symbol accumulator.
//!
//! The parser calls into this as it recognises `const` definitions and
//! enum bodies. It owns the model under construction plus the auto-value
//! counter of the enum block currently being parsed, and only ever
//! appends.

use std::num::ParseIntError;

use tracing::trace;
use xdr_ir::{ConstItem, SymbolModel};

use crate::LiteralError;

/// Builds a [`SymbolModel`] one production at a time.
#[derive(Debug)]
pub struct SymbolAccumulator {
    model: SymbolModel,
    /// Last value assigned in the current enum block; -1 before the first.
    enum_counter: i64,
}

impl SymbolAccumulator {
    pub fn new() -> Self {
        SymbolAccumulator {
            model: SymbolModel::new(),
            enum_counter: -1,
        }
    }

    /// Begin a new enum block. Must precede the block's first enumerator.
    pub fn start_enum_block(&mut self) {
        self.enum_counter = -1;
    }

    /// Add an enumerator with an explicit value.
    ///
    /// Later auto-valued enumerators in the same block continue from it.
    pub fn add_enum_explicit(&mut self, name: &str, literal: &str) -> Result<(), LiteralError> {
        let value = parse_number(literal).map_err(|cause| LiteralError::InvalidEnum {
            name: name.to_string(),
            literal: literal.to_string(),
            cause,
        })?;
        self.push_enum(name, value);
        Ok(())
    }

    /// Add an enumerator that takes the previous value plus one.
    pub fn add_enum_auto(&mut self, name: &str) -> Result<(), LiteralError> {
        let value = self
            .enum_counter
            .checked_add(1)
            .ok_or_else(|| LiteralError::EnumOverflow {
                name: name.to_string(),
            })?;
        self.push_enum(name, value);
        Ok(())
    }

    /// Add a named constant.
    pub fn add_const(&mut self, name: &str, literal: &str) -> Result<(), LiteralError> {
        let value = parse_number(literal).map_err(|cause| LiteralError::InvalidConst {
            name: name.to_string(),
            literal: literal.to_string(),
            cause,
        })?;
        trace!(name, value, "const");
        self.model.consts.push(ConstItem::new(name, value.to_string()));
        Ok(())
    }

    fn push_enum(&mut self, name: &str, value: i64) {
        trace!(name, value, "enumerator");
        self.model.enums.push(ConstItem::new(name, value.to_string()));
        self.enum_counter = value;
    }

    /// The model built so far.
    pub fn model(&self) -> &SymbolModel {
        &self.model
    }

    /// Value most recently assigned in the current enum block.
    pub fn enum_counter(&self) -> i64 {
        self.enum_counter
    }

    /// Finish accumulating and hand the model over.
    pub fn into_model(self) -> SymbolModel {
        self.model
    }
}

impl Default for SymbolAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a protocol integer literal.
///
/// A `0x` prefix selects base 16 for the remainder; anything else is
/// parsed as base 10. The result must fit an `i64`.
pub fn parse_number(literal: &str) -> Result<i64, ParseIntError> {
    match literal.strip_prefix("0x") {
        Some(hex) => i64::from_str_radix(hex, 16),
        None => literal.parse(),
    }
}
