//! Protocol name to target name conversion.
//!
//! `REMOTE_DOMAIN_GET_XML` becomes `DomainGetXML`: the namespace prefix
//! goes, snake case turns into camel case, and known abbreviations are
//! upper-cased when they stand as a word of their own.

use xdr_ir::SymbolModel;

/// Namespace prefix removed from every protocol name.
pub const STRIP_PREFIX: &str = "REMOTE_";

/// Abbreviations rendered fully upper-case, in the order they are applied.
pub const ABBREVIATIONS: &[&str] = &["Xml", "Io", "Uuid", "Cpu", "Id", "Ip"];

/// Convert a protocol constant name into a target identifier.
pub fn const_name_transform(name: &str) -> String {
    let stripped = name.strip_prefix(STRIP_PREFIX).unwrap_or(name);
    fix_abbreviations(&snake_to_camel(stripped))
}

/// Rename every entry of the model in place.
pub fn transform_model(model: &mut SymbolModel) {
    model.rename_all(const_name_transform);
}

/// `PROC_DOMAIN_GET_METADATA` -> `ProcDomainGetMetadata`.
///
/// Underscores are dropped and start a new hump; the first character of
/// each hump is upper-cased and the rest lower-cased. Only ASCII letters
/// change case, so every character maps to exactly one character.
pub fn snake_to_camel(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut hump = true;

    for c in s.chars() {
        if c == '_' {
            hump = true;
        } else if hump {
            out.push(c.to_ascii_uppercase());
            hump = false;
        } else {
            out.push(c.to_ascii_lowercase());
        }
    }

    out
}

/// Upper-case every table abbreviation that is not followed by a
/// lower-case character.
///
/// `DomainGetXml` becomes `DomainGetXML`, but the `Id` in `Idle` stays put.
/// After each occurrence the scan resumes one byte past its start.
pub fn fix_abbreviations(s: &str) -> String {
    let mut out = s.to_string();

    for abbrev in ABBREVIATIONS {
        let mut from = 0;
        while let Some(found) = out.get(from..).and_then(|rest| rest.find(abbrev)) {
            let start = from + found;
            let end = start + abbrev.len();
            let ends_word = out[end..].chars().next().map_or(true, |c| !c.is_lowercase());
            if ends_word {
                out.replace_range(start..end, &abbrev.to_uppercase());
            }
            from = start + 1;
        }
    }

    out
}
