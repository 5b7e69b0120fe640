//! Interactive session state
//!
//! A [`Session`] owns one [`Interpreter`] and turns lines typed by the user
//! into [`Command`]s. All state the command loop needs lives here and is
//! passed explicitly; [`repl`] only does the line I/O around it.
//!
//! | Line | Command |
//! |---|---|
//! | `?` | show the interpreter state |
//! | `b` | switch to brainfuck (resets the interpreter) |
//! | `o` | switch to Sambackus! (resets the interpreter) |
//! | `h` | show the command list |
//! | empty | show the state and quit |
//! | anything else | program text |

pub mod repl;

use crate::interpreter::engine::{Interpreter, Outcome};
use crate::interpreter::errors::{Diagnostic, RuntimeError};
use crate::memory::Cell;
use crate::syntax::SyntaxKind;
use std::fmt;
use std::io;
use thiserror::Error;

/// One line of user input, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Status,
    Switch(SyntaxKind),
    Help,
    Quit,
    Program(String),
}

impl Command {
    /// Classify a line. Surrounding whitespace is ignored.
    pub fn parse(line: &str) -> Command {
        match line.trim() {
            "" => Command::Quit,
            "?" => Command::Status,
            "h" => Command::Help,
            "b" => Command::Switch(SyntaxKind::Brainfuck),
            "o" => Command::Switch(SyntaxKind::Sambackus),
            text => Command::Program(text.to_string()),
        }
    }
}

/// What a command did, for the front end to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Status,
    Switched(SyntaxKind),
    Help,
    Quit,
    Evaluated {
        outcome: Outcome,
        diagnostics: Vec<Diagnostic>,
    },
}

/// Errors that end an interactive session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// The interpreter plus everything the command loop acts on.
pub struct Session {
    interpreter: Interpreter,
}

impl Session {
    pub fn new(interpreter: Interpreter) -> Self {
        Session { interpreter }
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    pub fn syntax_kind(&self) -> SyntaxKind {
        self.interpreter.syntax_kind()
    }

    /// Run one command against the interpreter.
    ///
    /// Errors are the interpreter's fatal errors; the caller decides whether
    /// the session survives them via [`RuntimeError::aborts_session`].
    pub fn execute(&mut self, command: Command) -> Result<Reply, RuntimeError> {
        match command {
            Command::Status => Ok(Reply::Status),
            Command::Help => Ok(Reply::Help),
            Command::Quit => Ok(Reply::Quit),
            Command::Switch(kind) => {
                self.interpreter.set_syntax(kind);
                Ok(Reply::Switched(kind))
            }
            Command::Program(text) => {
                let result = self.interpreter.interpret_text(&text);
                let diagnostics = self.interpreter.take_diagnostics();
                let outcome = result?;
                Ok(Reply::Evaluated {
                    outcome,
                    diagnostics,
                })
            }
        }
    }

    pub fn report(&self) -> StateReport<'_> {
        StateReport::new(&self.interpreter)
    }
}

/// User-facing line for a recoverable condition.
pub fn diagnostic_message(diagnostic: &Diagnostic) -> String {
    match diagnostic {
        Diagnostic::InvalidInput { input } => {
            format!("Invalid input {:?}! Continuing ...", input)
        }
        Diagnostic::InputOutOfRange { input } => {
            format!(
                "Input {} is out of range ({} to {})! Continuing ...",
                input,
                Cell::MIN,
                Cell::MAX
            )
        }
        Diagnostic::InputUnavailable { reason } => {
            format!("No input available ({})! Continuing ...", reason)
        }
        Diagnostic::IncompleteProgram { .. } => " ... (incomplete)".to_string(),
    }
}

/// Plain-text view of the interpreter state.
///
/// ```text
/// Cells        : [0, 72]
/// Cursor       : 1
/// Input        : +[-
/// Raw output   : 72
/// ASCII output : H
/// ```
pub struct StateReport<'a> {
    interpreter: &'a Interpreter,
}

impl<'a> StateReport<'a> {
    pub fn new(interpreter: &'a Interpreter) -> Self {
        StateReport { interpreter }
    }
}

impl fmt::Display for StateReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interp = self.interpreter;
        let cells: Vec<_> = interp.tape().cells().collect();
        let input = interp.syntax().render(&interp.retained_input());
        let ascii = match interp.output().as_characters() {
            Ok(text) => text,
            Err(e) => format!("<{}>", e),
        };

        writeln!(f, "{:<13}: {:?}", "Cells", cells)?;
        writeln!(f, "{:<13}: {}", "Cursor", interp.tape().cursor())?;
        writeln!(f, "{:<13}: {}", "Input", input)?;
        writeln!(f, "{:<13}: {}", "Raw output", interp.output().as_numeric_list())?;
        write!(f, "{:<13}: {}", "ASCII output", ascii)
    }
}
