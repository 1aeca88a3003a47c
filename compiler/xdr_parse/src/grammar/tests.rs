use pretty_assertions::assert_eq;
use xdr_ir::{ConstItem, Position, SymbolModel};

use crate::{parse, parse_into, parse_str, LiteralError, ParseError, SymbolAccumulator};

fn items(pairs: &[(&str, &str)]) -> Vec<ConstItem> {
    pairs.iter().map(|(n, v)| ConstItem::new(*n, *v)).collect()
}

fn parse_ok(source: &str) -> SymbolModel {
    parse_str(source).unwrap_or_else(|e| panic!("parse failed: {e}"))
}

// === Symbol extraction ===

#[test]
fn const_and_enum() {
    let model = parse_ok("const FOO = 10;\nenum Bar { X, Y = 3, Z };");
    assert_eq!(model.consts, items(&[("FOO", "10")]));
    assert_eq!(model.enums, items(&[("X", "0"), ("Y", "3"), ("Z", "4")]));
}

#[test]
fn enum_with_alternating_explicit_values() {
    let model = parse_ok("enum E { A, B = 5, C, D = 2, E };");
    assert_eq!(
        model.enums,
        items(&[("A", "0"), ("B", "5"), ("C", "6"), ("D", "2"), ("E", "3")])
    );
}

#[test]
fn each_enum_restarts_at_zero() {
    let model = parse_ok("enum A { A1 = 7, A2 }; enum B { B1, B2 };");
    assert_eq!(
        model.enums,
        items(&[("A1", "7"), ("A2", "8"), ("B1", "0"), ("B2", "1")])
    );
}

#[test]
fn hex_values_are_committed_in_decimal() {
    let model = parse_ok("const MASK = 0xff; enum F { F_A = 0x10, F_B };");
    assert_eq!(model.consts, items(&[("MASK", "255")]));
    assert_eq!(model.enums, items(&[("F_A", "16"), ("F_B", "17")]));
}

#[test]
fn trailing_comma_in_enum_body() {
    let model = parse_ok("enum E { A, B, };");
    assert_eq!(model.enums, items(&[("A", "0"), ("B", "1")]));
}

#[test]
fn inline_enum_bodies_are_collected() {
    let source = "struct S { enum { IN_A, IN_B = 4, IN_C } kind; int x; };";
    let model = parse_ok(source);
    assert_eq!(
        model.enums,
        items(&[("IN_A", "0"), ("IN_B", "4"), ("IN_C", "5")])
    );
}

#[test]
fn definitions_keep_source_order() {
    let model = parse_ok("const C3 = 3; const C1 = 1; const C2 = 2;");
    let names: Vec<_> = model.consts.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["C3", "C1", "C2"]);
}

// === Full grammar ===

#[test]
fn rpcgen_style_protocol() {
    let source = r"
%#include <libvirt/libvirt.h>
/* Limits */
const REMOTE_STRING_MAX = 4194304;
const REMOTE_DOMAIN_LIST_MAX = 16384;

typedef string remote_nonnull_string<REMOTE_STRING_MAX>;
typedef remote_nonnull_string *remote_string;
typedef opaque remote_uuid[16];
typedef unsigned hyper remote_size;

struct remote_nonnull_domain {
    remote_nonnull_string name;
    remote_uuid uuid;
    int id;
};

struct remote_domain_list_ret {
    remote_nonnull_domain domains<REMOTE_DOMAIN_LIST_MAX>;
    unsigned int ret;
    struct remote_nonnull_domain *next;
    opaque cookie<>;
    bool flag;
    double load[3];
};

union remote_typed_param_value switch (int type) {
case 1:
case 2:
    int i;
case 3:
    unsigned hyper ul;
default:
    void;
};

enum remote_procedure {
    REMOTE_PROC_CONNECT_OPEN = 1,
    REMOTE_PROC_CONNECT_CLOSE,
    REMOTE_PROC_DOMAIN_GET_XML_DESC = 14
};

program REMOTE_PROGRAM {
    version REMOTE_PROTOCOL_VERSION {
        void REMOTE_PROC_CONNECT_OPEN(remote_nonnull_string, int) = 1;
        int REMOTE_PROC_CONNECT_CLOSE(void) = 2;
    } = 1;
} = 0x20008086;
";
    let model = parse_ok(source);
    assert_eq!(
        model.consts,
        items(&[
            ("REMOTE_STRING_MAX", "4194304"),
            ("REMOTE_DOMAIN_LIST_MAX", "16384"),
        ])
    );
    assert_eq!(
        model.enums,
        items(&[
            ("REMOTE_PROC_CONNECT_OPEN", "1"),
            ("REMOTE_PROC_CONNECT_CLOSE", "2"),
            ("REMOTE_PROC_DOMAIN_GET_XML_DESC", "14"),
        ])
    );
}

#[test]
fn empty_specification() {
    assert_eq!(parse_ok("/* nothing */"), SymbolModel::new());
}

// === Errors ===

#[test]
fn missing_semicolon_is_a_syntax_error() {
    assert_eq!(
        parse_str("const A = 1\nconst B = 2;"),
        Err(ParseError::Syntax {
            expected: "`;`".to_string(),
            found: "keyword `const`".to_string(),
            position: Position::new(2, 1),
        })
    );
}

#[test]
fn every_error_kind_reports_its_position() {
    let cases = [
        ("const A = 1;\n  @", Position::new(2, 3)),
        ("const A = 1;\nenum E { X };\nconst", Position::new(3, 6)),
        ("enum E {\n  A = 99999999999999999999 };", Position::new(2, 7)),
    ];
    for (source, expected) in cases {
        let err = parse_str(source).err();
        assert_eq!(err.map(|e| e.position()), Some(expected), "{source:?}");
    }
}

#[test]
fn unknown_top_level_token() {
    let err = parse_str("int x;").err();
    assert_eq!(
        err.map(|e| e.to_string()),
        Some("1:1: expected a definition, found keyword `int`".to_string())
    );
}

#[test]
fn empty_enum_body_is_rejected() {
    assert!(matches!(
        parse_str("enum E { };"),
        Err(ParseError::Syntax { .. })
    ));
}

#[test]
fn union_needs_a_case() {
    let err = parse_str("union U switch (int d) { default: void; };").err();
    assert_eq!(
        err.map(|e| e.to_string()),
        Some("1:26: expected `case`, found keyword `default`".to_string())
    );
}

#[test]
fn lexical_error_surfaces_with_position() {
    assert_eq!(
        parse_str("const A = 1;\nconst B = #;"),
        Err(ParseError::Lex {
            ch: '#',
            position: Position::new(2, 11),
        })
    );
}

#[test]
fn out_of_range_const_is_a_literal_error() {
    let err = parse_str("const BIG = 0x10000000000000000;").err();
    let Some(ParseError::Literal { error, position }) = err else {
        panic!("expected a literal error, got {err:?}");
    };
    assert_eq!(error.symbol(), "BIG");
    assert_eq!(position, Position::new(1, 13));
    assert!(matches!(error, LiteralError::InvalidConst { .. }));
}

#[test]
fn symbolic_enum_value_is_a_literal_error() {
    let err = parse_str("enum E { A = OTHER };").err();
    assert_eq!(
        err.map(|e| e.to_string()),
        Some("1:14: invalid enum value A = OTHER".to_string())
    );
}

#[test]
fn literal_error_aborts_the_whole_parse() {
    let result = parse_str("const OK = 1; const BAD = nope; const LATER = 2;");
    let Err(ParseError::Literal { error, .. }) = result else {
        panic!("expected a literal error, got {result:?}");
    };
    assert_eq!(error.symbol(), "BAD");
}

// === Threaded pipeline ===

#[test]
fn parses_through_the_threaded_lexer() {
    let stream = xdr_lexer::spawn("const FOO = 10;\nenum Bar { X, Y = 3, Z };".to_string())
        .unwrap_or_else(|e| panic!("spawn: {e}"));
    let model = parse(stream).unwrap_or_else(|e| panic!("parse failed: {e}"));
    assert_eq!(model.consts, items(&[("FOO", "10")]));
    assert_eq!(model.enums, items(&[("X", "0"), ("Y", "3"), ("Z", "4")]));
}

#[test]
fn early_error_does_not_hang_the_threaded_lexer() {
    let mut source = String::from("const A = ;\n");
    for i in 0..10_000 {
        source.push_str(&format!("const C{i} = {i};\n"));
    }
    let stream = xdr_lexer::spawn(source).unwrap_or_else(|e| panic!("spawn: {e}"));
    // The parser stops on line 1 and drops the stream, which cancels and
    // joins the producer.
    assert!(matches!(parse(stream), Err(ParseError::Syntax { .. })));
}

#[test]
fn accumulator_is_returned_to_the_caller() {
    let acc = parse_into(
        xdr_lexer::Scanner::new("enum E { A = 9 };"),
        SymbolAccumulator::new(),
    )
    .unwrap_or_else(|e| panic!("parse failed: {e}"));
    assert_eq!(acc.enum_counter(), 9);
    assert_eq!(acc.into_model().enums, items(&[("A", "9")]));
}
