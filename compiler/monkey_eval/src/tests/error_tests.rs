//! Runtime error messages and short-circuiting.

use super::{error, eval, eval_capturing};
use pretty_assertions::assert_eq;

#[test]
fn error_messages() {
    let cases = [
        ("5 + true;", "type mismatch: INTEGER + BOOLEAN"),
        ("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN"),
        ("-true", "unknown operator: -BOOLEAN"),
        ("true + false;", "unknown operator: BOOLEAN + BOOLEAN"),
        ("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN"),
        (
            "if (10 > 1) { true + false; }",
            "unknown operator: BOOLEAN + BOOLEAN",
        ),
        (
            "if (10 > 1) {
               if (10 > 1) {
                 return true + false;
               }
               return 1;
             }",
            "unknown operator: BOOLEAN + BOOLEAN",
        ),
        ("foobar", "identifier not found: foobar"),
        (r#""Hello" - "World""#, "unknown operator: STRING - STRING"),
        (r#""a" == "a""#, "unknown operator: STRING == STRING"),
        ("1 == true", "type mismatch: INTEGER == BOOLEAN"),
        ("[1] == {}", "type mismatch: ARRAY == HASH"),
        ("1(2)", "not a function: INTEGER"),
        (r#""f"()"#, "not a function: STRING"),
    ];

    for (source, expected) in cases {
        assert_eq!(eval(source), error(expected), "in {source:?}");
    }
}

#[test]
fn errors_short_circuit_nested_evaluation() {
    let cases = [
        ("[1, missing, 3]", "identifier not found: missing"),
        ("len(1, missing)", "identifier not found: missing"),
        ("missing(boom)", "identifier not found: missing"),
        ("-(1 + true) + nope", "type mismatch: INTEGER + BOOLEAN"),
        (r#"{"a": nope, nope2: 1}"#, "identifier not found: nope"),
        ("let x = 1 + true; x", "type mismatch: INTEGER + BOOLEAN"),
        ("fn() { 1 + true; 2 }()", "type mismatch: INTEGER + BOOLEAN"),
    ];

    for (source, expected) in cases {
        assert_eq!(eval(source), error(expected), "in {source:?}");
    }
}

#[test]
fn failed_let_leaves_name_unbound() {
    assert_eq!(
        eval("let x = nope;").to_string(),
        "ERROR: identifier not found: nope"
    );
}

#[test]
fn error_stops_later_output() {
    let (result, output) = eval_capturing("puts(1); 1 + true; puts(2)");

    assert_eq!(result, error("type mismatch: INTEGER + BOOLEAN"));
    assert_eq!(output, "1\n");
}

#[test]
fn arguments_evaluate_left_to_right() {
    let (result, output) = eval_capturing("puts(puts(\"a\"), puts(\"b\"))");

    assert_eq!(result, crate::Object::NULL);
    assert_eq!(output, "\"a\"\n\"b\"\nnull\nnull\n");
}
