//! Debug commands: `parse` and `lex` for inspecting interpreter internals.

use std::fmt::Write;
use std::path::Path;

use monkey_lexer::lex;

use super::read_file;
use crate::{format_parse_errors, parse, CliError};

/// One line per token: `<kind> <literal> @ <start>..<end>`.
pub fn render_tokens(source: &str) -> String {
    let mut out = String::new();
    for token in lex(source) {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{} {} @ {}", token.kind, token.literal, token.span);
    }
    out
}

/// The canonical rendering of `source`, or its syntax errors.
pub fn render_program(name: &str, source: &str) -> Result<String, CliError> {
    let output = parse(source);
    if output.has_errors() {
        return Err(CliError::Syntax {
            diagnostics: format_parse_errors(name, source, &output.errors),
        });
    }
    Ok(output.program.to_string())
}

/// Lex a file and print the token stream.
pub fn lex_file(path: &Path) -> Result<(), CliError> {
    let source = read_file(path)?;
    print!("{}", render_tokens(&source));
    Ok(())
}

/// Parse a file and print the program's rendering.
pub fn parse_file(path: &Path) -> Result<(), CliError> {
    let source = read_file(path)?;
    let rendered = render_program(&path.display().to_string(), &source)?;
    println!("{rendered}");
    Ok(())
}
