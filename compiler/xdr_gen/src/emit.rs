//! Output emission.
//!
//! The whole output is rendered into memory first and written with a
//! single `write_all`, so a failing template never leaves partial output.

use std::io::{self, Write};

use thiserror::Error;
use tracing::debug;
use xdr_ir::SymbolModel;

use crate::template::{Template, TemplateError, TemplateLoader, CONSTANTS_TEMPLATE};

#[derive(Debug, Error)]
pub enum EmitError {
    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("failed to write output")]
    Io(#[from] io::Error),
}

/// Write `model` through `template` and flush. Returns the bytes written.
pub fn emit<W: Write>(
    model: &SymbolModel,
    template: &Template,
    mut out: W,
) -> Result<usize, EmitError> {
    let rendered = template.render(model);
    out.write_all(rendered.as_bytes())?;
    out.flush()?;

    debug!(
        template = template.name(),
        enums = model.enums.len(),
        consts = model.consts.len(),
        bytes = rendered.len(),
        "emitted"
    );
    Ok(rendered.len())
}

/// Resolve the constants template through `loader` and emit `model`.
pub fn emit_constants<W: Write>(
    model: &SymbolModel,
    loader: &TemplateLoader,
    out: W,
) -> Result<usize, EmitError> {
    let template = loader.load(CONSTANTS_TEMPLATE)?;
    emit(model, &template, out)
}

#[cfg(test)]
mod tests;
