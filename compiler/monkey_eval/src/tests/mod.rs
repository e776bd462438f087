//! End-to-end evaluator tests: source text in, objects out.

mod error_tests;
mod function_tests;

use crate::{buffer_handler, Env, Interpreter, Object};

/// Parse `source` and evaluate it in a fresh global environment.
pub(super) fn eval(source: &str) -> Object {
    eval_in(source, &Env::new())
}

pub(super) fn eval_in(source: &str, env: &Env) -> Object {
    let output = monkey_parse::parse(source);
    assert!(
        !output.has_errors(),
        "parse errors in {source:?}: {:?}",
        output.error_messages()
    );
    Interpreter::new().eval_program(&output.program, env)
}

/// Evaluate `source`, returning the result and everything `puts` wrote.
pub(super) fn eval_capturing(source: &str) -> (Object, String) {
    let handler = buffer_handler();
    let interpreter = Interpreter::builder()
        .print_handler(handler.clone())
        .build();
    let program = monkey_parse::parse(source).program;
    let result = interpreter.eval_program(&program, &Env::new());
    (result, handler.get_output())
}

pub(super) fn int(value: i64) -> Object {
    Object::Integer(value)
}

pub(super) fn error(message: &str) -> Object {
    Object::Error(message.to_string())
}
