use super::*;
use monkey_ir::{Identifier, InfixOperator};
use pretty_assertions::assert_eq;

use crate::print_handler::buffer_handler;

fn int(value: i64) -> Expression {
    Expression::Integer(value)
}

#[test]
fn test_evaluate_expression_node() {
    let interpreter = Interpreter::new();
    let expr = Expression::infix(InfixOperator::Asterisk, int(6), int(7));

    assert_eq!(
        interpreter.evaluate(Node::Expression(&expr), &Env::new()),
        Object::Integer(42)
    );
}

#[test]
fn test_evaluate_let_statement_binds_and_yields_null() {
    let interpreter = Interpreter::new();
    let env = Env::new();
    let statement = Statement::Let {
        name: Identifier::new("answer"),
        value: int(42),
    };

    assert_eq!(
        interpreter.evaluate(Node::Statement(&statement), &env),
        Object::NULL
    );
    assert_eq!(env.get("answer"), Some(Object::Integer(42)));
}

#[test]
fn test_block_node_yields_returned_value() {
    let interpreter = Interpreter::new();
    let block = BlockStatement::new(vec![
        Statement::Return { value: int(1) },
        Statement::Expression { value: int(2) },
    ]);

    assert_eq!(
        interpreter.evaluate(Node::Block(&block), &Env::new()),
        Object::Integer(1)
    );
}

#[test]
fn test_return_statement_node_yields_its_value() {
    let interpreter = Interpreter::new();
    let statement = Statement::Return { value: int(7) };

    assert_eq!(
        interpreter.evaluate(Node::Statement(&statement), &Env::new()),
        Object::Integer(7)
    );
}

#[test]
fn test_nested_block_return_stops_enclosing_block() {
    let interpreter = Interpreter::new();
    let inner = BlockStatement::new(vec![Statement::Return { value: int(10) }]);
    let outer = BlockStatement::new(vec![
        Statement::Block(inner),
        Statement::Expression { value: int(1) },
    ]);

    assert_eq!(
        interpreter.evaluate(Node::Block(&outer), &Env::new()),
        Object::Integer(10)
    );
}

#[test]
fn test_program_unwraps_return_value() {
    let interpreter = Interpreter::new();
    let program = Program::new(vec![
        Statement::Return { value: int(1) },
        Statement::Expression { value: int(2) },
    ]);

    assert_eq!(
        interpreter.eval_program(&program, &Env::new()),
        Object::Integer(1)
    );
}

#[test]
fn test_empty_program_is_null() {
    let interpreter = Interpreter::new();
    assert_eq!(
        interpreter.eval_program(&Program::default(), &Env::new()),
        Object::NULL
    );
}

#[test]
fn test_errors_surface_as_error_objects() {
    let interpreter = Interpreter::new();
    let expr = Expression::ident("missing");

    assert_eq!(
        interpreter.evaluate(Node::from(&expr), &Env::new()),
        Object::Error("identifier not found: missing".to_string())
    );
}

#[test]
fn test_builder_installs_print_handler() {
    let handler = buffer_handler();
    let interpreter = Interpreter::builder()
        .print_handler(handler.clone())
        .build();
    let call = Expression::Call {
        callee: Box::new(Expression::ident("puts")),
        arguments: vec![int(1), Expression::String("two".into())],
    };

    let result = interpreter.evaluate(Node::from(&call), &Env::new());

    assert_eq!(result, Object::NULL);
    assert_eq!(handler.get_output(), "1\n\"two\"\n");
    assert_eq!(interpreter.print_handler().get_output(), "1\n\"two\"\n");
}

#[test]
fn test_user_binding_shadows_builtin() {
    let interpreter = Interpreter::new();
    let env = Env::new();
    env.set("len", Object::Integer(7));

    assert_eq!(
        interpreter.evaluate(Node::from(&Expression::ident("len")), &env),
        Object::Integer(7)
    );
}
