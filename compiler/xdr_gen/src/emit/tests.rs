use std::io::{self, Write};

use pretty_assertions::assert_eq;
use xdr_ir::{ConstItem, SymbolModel};

use super::*;

/// Accepts a fixed number of bytes, then fails.
struct ShortWriter {
    room: usize,
    written: Vec<u8>,
}

impl Write for ShortWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.room == 0 {
            return Err(io::Error::new(io::ErrorKind::WriteZero, "full"));
        }
        let n = buf.len().min(self.room);
        self.room -= n;
        self.written.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn model() -> SymbolModel {
    SymbolModel {
        enums: vec![ConstItem::new("B", "2"), ConstItem::new("A", "1")],
        consts: vec![ConstItem::new("Max", "16")],
    }
}

#[test]
fn emits_in_model_order() {
    let template = Template::parse(
        "t",
        "{{#enums}}{{name}}={{value}},{{/enums}}|{{#consts}}{{name}}={{value}}{{/consts}}",
    )
    .unwrap_or_else(|e| panic!("{e}"));
    let mut out = Vec::new();
    let written = emit(&model(), &template, &mut out).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(String::from_utf8_lossy(&out), "B=2,A=1,|Max=16");
    assert_eq!(written, out.len());
}

#[test]
fn builtin_constants_output() {
    let mut out = Vec::new();
    emit_constants(&model(), &TemplateLoader::builtin(), &mut out)
        .unwrap_or_else(|e| panic!("{e}"));
    let text = String::from_utf8_lossy(&out);
    assert!(text.contains("const (\n\tB = 2\n\tA = 1\n)"));
    assert!(text.contains("const (\n\tMax = 16\n)"));
}

#[test]
fn write_failure_is_reported() {
    let template =
        Template::parse("t", "{{#enums}}{{name}}{{/enums}}").unwrap_or_else(|e| panic!("{e}"));
    let mut out = ShortWriter {
        room: 1,
        written: Vec::new(),
    };
    let err = emit(&model(), &template, &mut out).err();
    assert!(matches!(err, Some(EmitError::Io(_))));
    assert_eq!(out.written, b"B");
}

#[test]
fn template_failure_writes_nothing() {
    let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("{e}"));
    let mut out = Vec::new();
    let err = emit_constants(&model(), &TemplateLoader::from_dir(dir.path()), &mut out).err();
    assert!(matches!(
        err,
        Some(EmitError::Template(TemplateError::NotFound { .. }))
    ));
    assert!(out.is_empty());
}
