//! xdrc: constant bindings from XDR protocol definitions.
//!
//! [`generate`] runs the whole pipeline:
//!
//! 1. read the protocol text,
//! 2. lex it on a producer thread and parse it on the calling thread,
//! 3. rename every symbol for the target language,
//! 4. render the constants template into the output.
//!
//! Any failure ends the run with a single [`GenError`].
//!
//! # Debugging
//!
//! - `RUST_LOG=debug`: pipeline stages and summary counts.
//! - `RUST_LOG=xdr_lexer=trace,xdr_parse=trace`: every token produced and consumed.

use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::sync::Once;

use thiserror::Error;
use tracing::debug;
use xdr_gen::{emit, transform_model, TemplateLoader, CONSTANTS_TEMPLATE};
use xdr_ir::SymbolModel;
use xdr_parse::ParseError;

pub use xdr_gen::{EmitError, TemplateError};

/// Settings for a generation run.
#[derive(Clone, Debug, Default)]
pub struct GenConfig {
    /// Directory holding a `constants.tmpl` that replaces the built-in one.
    pub template_dir: Option<PathBuf>,
}

impl GenConfig {
    fn loader(&self) -> TemplateLoader {
        match &self.template_dir {
            Some(dir) => TemplateLoader::from_dir(dir),
            None => TemplateLoader::builtin(),
        }
    }
}

#[derive(Debug, Error)]
pub enum GenError {
    #[error("failed to read input")]
    Read(#[source] io::Error),

    #[error("failed to start the lexer thread")]
    Spawn(#[source] io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Emit(#[from] EmitError),
}

/// Parse and rename the symbols of a protocol definition.
pub fn extract(source: String) -> Result<SymbolModel, GenError> {
    let stream = xdr_lexer::spawn(source).map_err(GenError::Spawn)?;
    let mut model = xdr_parse::parse(stream)?;
    transform_model(&mut model);
    debug!(
        enums = model.enums.len(),
        consts = model.consts.len(),
        "names transformed"
    );
    Ok(model)
}

/// Generate bindings for the protocol read from `input` into `output`.
///
/// Returns the number of bytes written. Nothing is written unless every
/// earlier stage succeeded.
pub fn generate<R: Read, W: Write>(
    mut input: R,
    output: W,
    config: &GenConfig,
) -> Result<usize, GenError> {
    let template = config.loader().load(CONSTANTS_TEMPLATE)?;

    let mut source = String::new();
    input.read_to_string(&mut source).map_err(GenError::Read)?;
    debug!(bytes = source.len(), "input read");

    let model = extract(source)?;
    Ok(emit(&model, &template, output)?)
}

static TRACING_INIT: Once = Once::new();

/// Install a stderr subscriber when `RUST_LOG` is set. Safe to call more
/// than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
