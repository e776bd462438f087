//! Command handlers for the Monkey CLI.
//!
//! Each submodule implements one command. Handlers return `CliError` and
//! leave printing of failures and the exit status to `main`.

mod debug;
mod repl;
mod run;

pub use debug::{lex_file, parse_file, render_program, render_tokens};
pub use repl::{run_repl, Repl, PROMPT};
pub use run::{eval_snippet, run_file};

use std::path::Path;

use crate::CliError;

/// Read a source file.
pub(crate) fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}
