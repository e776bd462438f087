//! Function literals, application and closures.

use super::{eval, int};
use crate::Object;
use pretty_assertions::assert_eq;

#[test]
fn function_object_captures_parameters_and_body() {
    let Object::Function(function) = eval("fn(x) { x + 2; };") else {
        panic!("expected a function");
    };

    assert_eq!(function.parameters.len(), 1);
    assert_eq!(function.parameters[0].name, "x");
    assert_eq!(function.body.to_string(), "(x + 2)");
}

#[test]
fn function_inspect_form() {
    assert_eq!(
        eval("fn(x, y) { x + y; }").to_string(),
        "fn(x, y) {\n(x + y)\n}"
    );
}

#[test]
fn function_application() {
    let cases = [
        ("let identity = fn(x) { x; }; identity(5);", 5),
        ("let identity = fn(x) { return x; }; identity(5);", 5),
        ("let double = fn(x) { x * 2; }; double(5);", 10),
        ("let add = fn(x, y) { x + y; }; add(5, 5);", 10),
        ("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", 20),
        ("fn(x) { x; }(5)", 5),
    ];

    for (source, expected) in cases {
        assert_eq!(eval(source), int(expected), "in {source:?}");
    }
}

#[test]
fn closures() {
    let source = "
        let newAdder = fn(x) {
          fn(y) { x + y };
        };
        let addTwo = newAdder(2);
        addTwo(2);";

    assert_eq!(eval(source), int(4));
}

#[test]
fn closures_see_later_bindings_in_captured_environment() {
    assert_eq!(eval("let f = fn() { late }; let late = 7; f()"), int(7));
}

#[test]
fn recursion_through_global_binding() {
    let source = "
        let fib = fn(n) {
          if (n < 2) { return n; }
          fib(n - 1) + fib(n - 2)
        };
        fib(15);";

    assert_eq!(eval(source), int(610));
}

#[test]
fn higher_order_functions() {
    let source = "
        let map = fn(arr, f) {
          let iter = fn(arr, acc) {
            if (len(arr) == 0) {
              acc
            } else {
              iter(rest(arr), push(acc, f(first(arr))));
            }
          };
          iter(arr, []);
        };
        map([1, 2, 3], fn(x) { x * x });";

    assert_eq!(
        eval(source),
        Object::array(vec![int(1), int(4), int(9)])
    );
}

#[test]
fn call_arity_is_permissive() {
    // Surplus arguments are ignored.
    assert_eq!(eval("fn(x) { x }(1, 2, 3)"), int(1));
    // A missing parameter falls through to the enclosing scope.
    assert_eq!(eval("let y = 10; fn(x, y) { y }(1)"), int(10));
}

#[test]
fn parameters_do_not_leak() {
    assert_eq!(
        eval("let f = fn(secret) { secret }; f(1); secret"),
        super::error("identifier not found: secret")
    );
}
