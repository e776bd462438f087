//! Builtin function catalog.
//!
//! Builtins are resolved only after the environment chain misses, so user
//! bindings shadow them.

use crate::errors::{
    argument_type_mismatch, unsupported_argument, wrong_argument_count, EvalResult,
};
use crate::object::{Builtin, BuiltinFn};
use crate::print_handler::PrintHandlerImpl;
use crate::Object;

const BUILTINS: &[(&str, BuiltinFn)] = &[
    ("len", len),
    ("first", first),
    ("last", last),
    ("rest", rest),
    ("push", push),
    ("puts", puts),
];

/// Find a builtin by name.
pub fn lookup(name: &str) -> Option<Object> {
    BUILTINS
        .iter()
        .find(|(builtin, _)| *builtin == name)
        .map(|&(name, func)| Object::Builtin(Builtin { name, func }))
}

/// Names of every builtin, in catalog order.
pub fn names() -> impl Iterator<Item = &'static str> {
    BUILTINS.iter().map(|(name, _)| *name)
}

fn check_arity(args: &[Object], want: usize) -> EvalResult<()> {
    if args.len() == want {
        Ok(())
    } else {
        Err(wrong_argument_count(args.len(), want))
    }
}

fn expect_array<'a>(builtin: &'static str, arg: &'a Object) -> EvalResult<&'a [Object]> {
    match arg {
        Object::Array(elements) => Ok(elements.as_slice()),
        other => Err(argument_type_mismatch(builtin, "ARRAY", other)),
    }
}

fn count(n: usize) -> Object {
    Object::Integer(i64::try_from(n).unwrap_or(i64::MAX))
}

/// `len(x)`: characters of a string or elements of an array.
fn len(args: &[Object], _: &PrintHandlerImpl) -> EvalResult {
    check_arity(args, 1)?;
    match &args[0] {
        Object::String(value) => Ok(count(value.chars().count())),
        Object::Array(elements) => Ok(count(elements.len())),
        other => Err(unsupported_argument("len", other)),
    }
}

fn first(args: &[Object], _: &PrintHandlerImpl) -> EvalResult {
    check_arity(args, 1)?;
    let elements = expect_array("first", &args[0])?;
    Ok(elements.first().cloned().unwrap_or(Object::NULL))
}

fn last(args: &[Object], _: &PrintHandlerImpl) -> EvalResult {
    check_arity(args, 1)?;
    let elements = expect_array("last", &args[0])?;
    Ok(elements.last().cloned().unwrap_or(Object::NULL))
}

/// `rest(arr)`: a new array without the first element; `null` when empty.
fn rest(args: &[Object], _: &PrintHandlerImpl) -> EvalResult {
    check_arity(args, 1)?;
    let elements = expect_array("rest", &args[0])?;
    Ok(match elements.split_first() {
        Some((_, tail)) => Object::array(tail.to_vec()),
        None => Object::NULL,
    })
}

/// `push(arr, v)`: a new array with `v` appended. The argument is untouched.
fn push(args: &[Object], _: &PrintHandlerImpl) -> EvalResult {
    check_arity(args, 2)?;
    let elements = expect_array("push", &args[0])?;
    let mut extended = Vec::with_capacity(elements.len() + 1);
    extended.extend_from_slice(elements);
    extended.push(args[1].clone());
    Ok(Object::array(extended))
}

/// `puts(...)`: one line per argument, in inspect form.
fn puts(args: &[Object], out: &PrintHandlerImpl) -> EvalResult {
    for arg in args {
        out.println(&arg.to_string());
    }
    Ok(Object::NULL)
}
