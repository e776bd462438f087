//! The Monkey interpreter driver.
//!
//! Ties the phases together (lex, parse, evaluate) and implements the
//! `monkey` command-line tool: an interactive REPL plus `run`, `eval`,
//! `parse` and `lex` commands.

pub mod commands;
mod error;

pub use error::CliError;

pub use monkey_eval::{Env, Interpreter, InterpreterBuilder, Object};
pub use monkey_parse::{parse, ParseError, ParseOutput};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber (call once at startup).
///
/// Logging is off unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=monkey_parse=trace monkey run prog.mk`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}

/// Render parse errors as `<name>:<line>:<col>: <message>`.
pub fn format_parse_errors(name: &str, source: &str, errors: &[ParseError]) -> Vec<String> {
    errors
        .iter()
        .map(|error| {
            let at = error.span().line_col(source);
            format!("{name}:{}:{}: {error}", at.line, at.col)
        })
        .collect()
}

/// Parse and evaluate `source` in `env`.
///
/// `name` labels syntax error locations. A program that evaluates to an
/// error object is reported as [`CliError::Runtime`].
pub fn interpret(
    name: &str,
    source: &str,
    interpreter: &Interpreter,
    env: &Env,
) -> Result<Object, CliError> {
    let output = parse(source);
    if output.has_errors() {
        return Err(CliError::Syntax {
            diagnostics: format_parse_errors(name, source, &output.errors),
        });
    }

    match interpreter.eval_program(&output.program, env) {
        Object::Error(message) => Err(CliError::Runtime { message }),
        value => Ok(value),
    }
}
