//! Tree-walking evaluator for Monkey.
//!
//! # Architecture
//!
//! - [`Object`]: runtime values (closed sum type)
//! - [`Env`]: shared, chained variable environments
//! - [`Interpreter`]: evaluates [`monkey_ir::Node`]s in an environment
//! - [`builtins`]: the native function catalog
//! - [`errors`]: runtime error kinds and constructors
//!
//! Evaluation is single-threaded and recursive. Deeply nested calls are
//! bounded by the host stack.

pub mod builtins;
mod environment;
pub mod errors;
mod interpreter;
mod object;
mod operators;
mod print_handler;

pub use environment::{Env, Environment};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use object::{Builtin, BuiltinFn, FunctionObject, HashKey, HashObject, Object};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};

#[cfg(test)]
mod tests;
