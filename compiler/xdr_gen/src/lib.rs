//! Code generation for parsed XDR symbols.
//!
//! [`naming`] turns protocol names into target identifiers, [`template`]
//! resolves and parses output templates, and [`emit`] renders a
//! [`xdr_ir::SymbolModel`] through a template into any writer.

pub mod emit;
pub mod naming;
pub mod template;

pub use emit::{emit, emit_constants, EmitError};
pub use naming::{const_name_transform, transform_model};
pub use template::{Template, TemplateError, TemplateLoader, CONSTANTS_TEMPLATE};
