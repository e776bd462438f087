//! `run` and `eval`: evaluate a program and print its result.

use std::path::Path;

use monkey_eval::{Env, Interpreter, Object};
use tracing::debug;

use super::read_file;
use crate::{interpret, CliError};

/// Evaluate a source file in a fresh global environment.
///
/// The final value is printed unless it is `null`.
pub fn run_file(path: &Path) -> Result<(), CliError> {
    let source = read_file(path)?;
    debug!(path = %path.display(), bytes = source.len(), "running file");
    run_source(&path.display().to_string(), &source)
}

/// Evaluate a snippet given on the command line.
pub fn eval_snippet(source: &str) -> Result<(), CliError> {
    run_source("<eval>", source)
}

fn run_source(name: &str, source: &str) -> Result<(), CliError> {
    let interpreter = Interpreter::new();
    let value = interpret(name, source, &interpreter, &Env::new())?;
    if !matches!(value, Object::Null) {
        println!("{value}");
    }
    Ok(())
}
