//! Monkey interpreter CLI.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use monkey::commands::{eval_snippet, lex_file, parse_file, run_file, run_repl};
use monkey::{init_tracing, CliError};

/// Interpreter for the Monkey programming language.
///
/// With no command, starts an interactive REPL.
#[derive(Parser, Debug)]
#[command(
    name = "monkey",
    version,
    about,
    long_about = None,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Evaluate EXPR and print the result.
    #[arg(short, long, value_name = "EXPR")]
    eval: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start an interactive session.
    Repl,
    /// Evaluate a source file and print its final value.
    Run { file: PathBuf },
    /// Evaluate a snippet given on the command line.
    Eval { expr: String },
    /// Print the parsed program in canonical form.
    Parse { file: PathBuf },
    /// Print the token stream of a source file.
    Lex { file: PathBuf },
}

fn dispatch(cli: Cli) -> Result<(), CliError> {
    if let Some(expr) = cli.eval {
        return eval_snippet(&expr);
    }
    match cli.command {
        None | Some(Command::Repl) => run_repl(),
        Some(Command::Run { file }) => run_file(&file),
        Some(Command::Eval { expr }) => eval_snippet(&expr),
        Some(Command::Parse { file }) => parse_file(&file),
        Some(Command::Lex { file }) => lex_file(&file),
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(error) = dispatch(cli) {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
