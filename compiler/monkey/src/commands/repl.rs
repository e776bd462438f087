//! Interactive read-eval-print loop.

use monkey_eval::{Env, Interpreter, Object};
use monkey_ir::Statement;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

use crate::{parse, CliError};

pub const PROMPT: &str = ">> ";

const BANNER: &str = "This is the Monkey programming language!\nFeel free to type in commands";

/// REPL state: one interpreter and one global environment for the whole
/// session.
pub struct Repl {
    interpreter: Interpreter,
    env: Env,
}

impl Default for Repl {
    fn default() -> Self {
        Repl::new(Interpreter::new())
    }
}

impl Repl {
    pub fn new(interpreter: Interpreter) -> Self {
        Repl {
            interpreter,
            env: Env::new(),
        }
    }

    pub fn env(&self) -> &Env {
        &self.env
    }

    /// Evaluate one line, returning the text to print, if any.
    ///
    /// Syntax errors print as a header plus one tab-indented message each,
    /// and nothing is evaluated. A line ending in a `let` prints nothing.
    pub fn eval_line(&self, line: &str) -> Option<String> {
        let output = parse(line);
        if output.has_errors() {
            let mut text = String::from("parser errors:");
            for message in output.error_messages() {
                text.push_str("\n\t");
                text.push_str(&message);
            }
            return Some(text);
        }

        let value = self.interpreter.eval_program(&output.program, &self.env);
        let ends_in_let = matches!(output.program.statements.last(), Some(Statement::Let { .. }));
        match value {
            Object::Null if ends_in_let || output.program.statements.is_empty() => None,
            value => Some(value.to_string()),
        }
    }
}

/// Run the REPL on the terminal until end of input.
pub fn run_repl() -> Result<(), CliError> {
    let mut editor = Editor::<(), DefaultHistory>::new()?;
    let repl = Repl::default();
    println!("{BANNER}");

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                editor.add_history_entry(line.as_str())?;
                if let Some(text) = repl.eval_line(&line) {
                    println!("{text}");
                }
            }
            // Ctrl-C discards the line.
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(error) => return Err(error.into()),
        }
    }
    Ok(())
}
