//! Tree-walking interpreter.
//!
//! Every evaluation step returns [`EvalResult`] and runtime errors
//! propagate with `?`, stopping evaluation at the first one. The public
//! entry points fold an error into an [`Object::Error`] value.
//!
//! # Module Structure
//!
//! - `mod.rs`: node dispatch, statements and expressions
//! - `builder.rs`: [`InterpreterBuilder`]

mod builder;

pub use builder::InterpreterBuilder;

use std::rc::Rc;

use monkey_ir::{BlockStatement, Expression, IfExpression, Node, Program, Statement};

use crate::builtins;
use crate::environment::Env;
use crate::errors::{
    identifier_not_found, index_not_supported, not_a_function, unusable_hash_key, EvalResult,
};
use crate::object::{FunctionObject, HashObject};
use crate::operators::{eval_infix, eval_prefix};
use crate::print_handler::SharedPrintHandler;
use crate::Object;

/// Evaluates syntax trees against environments.
///
/// The interpreter holds no program state; bindings live in the [`Env`]
/// passed to each call. The same interpreter can run any number of programs
/// in independent environments.
pub struct Interpreter {
    print_handler: SharedPrintHandler,
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new()
    }
}

impl Interpreter {
    /// An interpreter that prints to stdout.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// Where `puts` writes.
    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Evaluate any node in `env`.
    ///
    /// Runtime errors come back as [`Object::Error`]. A `return` reached
    /// directly in a statement or block yields its value, never an
    /// [`Object::ReturnValue`].
    pub fn evaluate(&self, node: Node<'_>, env: &Env) -> Object {
        let result = match node {
            Node::Program(program) => self.eval_program_inner(program, env),
            Node::Statement(statement) => self.eval_statement(statement, env),
            Node::Block(block) => self.eval_block(block, env),
            Node::Expression(expression) => self.eval_expression(expression, env),
        };
        match result {
            Ok(Object::ReturnValue(value)) => *value,
            Ok(value) => value,
            Err(error) => Object::Error(error.message),
        }
    }

    /// Evaluate a whole program in `env`.
    ///
    /// The result is the value of the last statement, the value of the first
    /// `return`, or the first runtime error as an [`Object::Error`].
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.statements.len()))]
    pub fn eval_program(&self, program: &Program, env: &Env) -> Object {
        self.evaluate(Node::Program(program), env)
    }

    fn eval_program_inner(&self, program: &Program, env: &Env) -> EvalResult {
        let mut result = Object::NULL;
        for statement in &program.statements {
            result = self.eval_statement(statement, env)?;
            if let Object::ReturnValue(value) = result {
                return Ok(*value);
            }
        }
        Ok(result)
    }

    /// Blocks share the enclosing environment and pass `ReturnValue` up
    /// unopened.
    fn eval_block(&self, block: &BlockStatement, env: &Env) -> EvalResult {
        let mut result = Object::NULL;
        for statement in &block.statements {
            result = self.eval_statement(statement, env)?;
            if matches!(result, Object::ReturnValue(_)) {
                return Ok(result);
            }
        }
        Ok(result)
    }

    fn eval_statement(&self, statement: &Statement, env: &Env) -> EvalResult {
        match statement {
            Statement::Let { name, value } => {
                let value = self.eval_expression(value, env)?;
                env.set(name.name.as_str(), value);
                Ok(Object::NULL)
            }
            Statement::Return { value } => {
                let value = self.eval_expression(value, env)?;
                Ok(Object::ReturnValue(Box::new(value)))
            }
            Statement::Expression { value } => self.eval_expression(value, env),
            Statement::Block(block) => self.eval_block(block, env),
        }
    }

    fn eval_expression(&self, expression: &Expression, env: &Env) -> EvalResult {
        match expression {
            Expression::Identifier(ident) => env
                .get(&ident.name)
                .or_else(|| builtins::lookup(&ident.name))
                .ok_or_else(|| identifier_not_found(&ident.name)),
            Expression::Integer(value) => Ok(Object::Integer(*value)),
            Expression::String(value) => Ok(Object::String(value.clone())),
            Expression::Boolean(value) => Ok(Object::from_bool(*value)),
            Expression::Prefix { operator, operand } => {
                let operand = self.eval_expression(operand, env)?;
                eval_prefix(*operator, &operand)
            }
            Expression::Infix {
                operator,
                left,
                right,
            } => {
                let left = self.eval_expression(left, env)?;
                let right = self.eval_expression(right, env)?;
                eval_infix(*operator, &left, &right)
            }
            Expression::If(if_expr) => self.eval_if(if_expr, env),
            Expression::Function(function) => Ok(Object::Function(Rc::new(FunctionObject {
                parameters: function.parameters.clone(),
                body: function.body.clone(),
                env: env.clone(),
            }))),
            Expression::Call { callee, arguments } => {
                let callee = self.eval_expression(callee, env)?;
                let arguments = self.eval_expressions(arguments, env)?;
                self.apply_function(&callee, &arguments)
            }
            Expression::Array(elements) => {
                Ok(Object::array(self.eval_expressions(elements, env)?))
            }
            Expression::Index { collection, index } => {
                let collection = self.eval_expression(collection, env)?;
                let index = self.eval_expression(index, env)?;
                eval_index(&collection, &index)
            }
            Expression::Hash(pairs) => self.eval_hash_literal(pairs, env),
        }
    }

    fn eval_if(&self, if_expr: &IfExpression, env: &Env) -> EvalResult {
        let condition = self.eval_expression(&if_expr.condition, env)?;
        if condition.is_truthy() {
            self.eval_block(&if_expr.consequence, env)
        } else if let Some(alternative) = &if_expr.alternative {
            self.eval_block(alternative, env)
        } else {
            Ok(Object::NULL)
        }
    }

    /// Left to right; the first error wins.
    fn eval_expressions(&self, expressions: &[Expression], env: &Env) -> EvalResult<Vec<Object>> {
        expressions
            .iter()
            .map(|expression| self.eval_expression(expression, env))
            .collect()
    }

    fn eval_hash_literal(&self, pairs: &[(Expression, Expression)], env: &Env) -> EvalResult {
        let mut hash = HashObject::new();
        for (key_expr, value_expr) in pairs {
            let key = self.eval_expression(key_expr, env)?;
            let hash_key = key.hash_key().ok_or_else(|| unusable_hash_key(&key))?;
            let value = self.eval_expression(value_expr, env)?;
            hash.insert(hash_key, key, value);
        }
        Ok(Object::Hash(Rc::new(hash)))
    }

    /// Call a function or builtin with evaluated arguments.
    ///
    /// Parameters bind positionally in a fresh environment enclosed by the
    /// function's captured one. Surplus arguments are ignored; parameters
    /// without an argument stay unbound.
    #[tracing::instrument(level = "debug", skip_all, fields(callee = callee.type_name(), args = args.len()))]
    fn apply_function(&self, callee: &Object, args: &[Object]) -> EvalResult {
        match callee {
            Object::Function(function) => {
                let call_env = Env::enclosed(&function.env);
                for (parameter, arg) in function.parameters.iter().zip(args) {
                    call_env.set(parameter.name.as_str(), arg.clone());
                }
                match self.eval_block(&function.body, &call_env)? {
                    Object::ReturnValue(value) => Ok(*value),
                    value => Ok(value),
                }
            }
            Object::Builtin(builtin) => (builtin.func)(args, &self.print_handler),
            other => Err(not_a_function(other)),
        }
    }
}

fn eval_index(collection: &Object, index: &Object) -> EvalResult {
    match (collection, index) {
        (Object::Array(elements), Object::Integer(i)) => Ok(usize::try_from(*i)
            .ok()
            .and_then(|i| elements.get(i))
            .cloned()
            .unwrap_or(Object::NULL)),
        (Object::Hash(hash), key) => {
            let hash_key = key.hash_key().ok_or_else(|| unusable_hash_key(key))?;
            Ok(hash.get(&hash_key).cloned().unwrap_or(Object::NULL))
        }
        _ => Err(index_not_supported(collection)),
    }
}

#[cfg(test)]
mod tests;
