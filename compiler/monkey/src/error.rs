//! Errors reported by the command-line driver.

use std::path::PathBuf;

/// Failure of a CLI command. `Display` is what the user sees on stderr.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),

    /// Syntax errors, already rendered one per line as
    /// `<file>:<line>:<col>: <message>`.
    #[error("{}", diagnostics.join("\n"))]
    Syntax { diagnostics: Vec<String> },

    /// The program evaluated to an error object.
    #[error("ERROR: {message}")]
    Runtime { message: String },
}
