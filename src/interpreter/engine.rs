// Execution engine for the tape interpreter

use crate::interpreter::constants::READ_PROMPT;
use crate::interpreter::errors::{Diagnostic, RuntimeError};
use crate::interpreter::input::{InputSource, StdinInput};
use crate::memory::{Cell, OutputBuffer, Tape};
use crate::syntax::{Primitive, Syntax, SyntaxKind, Token};
use log::{debug, error, warn};
use std::collections::VecDeque;
use std::num::IntErrorKind;

/// How a batch of tokens ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every loop in the batch was closed and executed.
    Complete,
    /// The batch ended inside a loop. The recording is kept and continues
    /// with the next batch.
    Incomplete { open_loops: usize },
}

/// The interpreter: one tape, one output buffer, one recording state.
///
/// State persists across calls to [`Interpreter::interpret_text`], so a
/// program can be fed in fragments. Switching the syntax resets everything.
pub struct Interpreter {
    /// Active surface syntax
    syntax: Box<dyn Syntax>,

    /// Memory
    pub(crate) tape: Tape,

    /// Values produced by the write primitive
    output: OutputBuffer,

    /// Tokens queued but not yet interpreted
    pending: VecDeque<Token>,

    /// Number of unresolved loop begins; 0 means tokens run directly
    pub(crate) open_loops: usize,

    /// Tokens recorded since the open top-level loop began
    pub(crate) record: Vec<Token>,

    /// Where the read primitive gets its values
    input: Box<dyn InputSource>,

    /// Recoverable conditions not yet collected by the caller
    diagnostics: Vec<Diagnostic>,
}

impl Interpreter {
    /// Create an interpreter that reads input from stdin.
    pub fn new(kind: SyntaxKind) -> Self {
        Self::with_input(kind, Box::new(StdinInput))
    }

    /// Create an interpreter with an explicit input source.
    pub fn with_input(kind: SyntaxKind, input: Box<dyn InputSource>) -> Self {
        Interpreter {
            syntax: kind.syntax(),
            tape: Tape::new(),
            output: OutputBuffer::new(),
            pending: VecDeque::new(),
            open_loops: 0,
            record: Vec::new(),
            input,
            diagnostics: Vec::new(),
        }
    }

    /// Switch the active syntax. Tape, output and recording state are reset.
    pub fn set_syntax(&mut self, kind: SyntaxKind) {
        debug!("switching syntax to {}", kind);
        self.syntax = kind.syntax();
        self.reset();
    }

    /// Back to a single zero cell, empty output, nothing recorded.
    pub fn reset(&mut self) {
        self.tape = Tape::new();
        self.output = OutputBuffer::new();
        self.pending.clear();
        self.open_loops = 0;
        self.record.clear();
        self.diagnostics.clear();
    }

    /// Tokenize `text` with the active syntax and interpret the tokens.
    pub fn interpret_text(&mut self, text: &str) -> Result<Outcome, RuntimeError> {
        let tokens: Vec<Token> = self.syntax.tokens(text).collect();
        self.interpret_tokens(tokens)
    }

    /// Queue `tokens` and interpret them in order.
    ///
    /// A fatal error discards the rest of the batch along with any loop that
    /// was being recorded; cells and output produced before it stay.
    pub fn interpret_tokens<I>(&mut self, tokens: I) -> Result<Outcome, RuntimeError>
    where
        I: IntoIterator<Item = Token>,
    {
        self.pending.extend(tokens);
        debug!(
            "interpreting batch of {} token(s), {} open loop(s)",
            self.pending.len(),
            self.open_loops
        );

        let mut position = 0;
        while let Some(token) = self.pending.pop_front() {
            if let Err(err) = self.step(token, position) {
                error!("{}", err);
                self.pending.clear();
                self.open_loops = 0;
                self.record.clear();
                return Err(err);
            }
            position += 1;
        }

        if self.open_loops > 0 {
            self.report(Diagnostic::IncompleteProgram {
                open_loops: self.open_loops,
            });
            Ok(Outcome::Incomplete {
                open_loops: self.open_loops,
            })
        } else {
            Ok(Outcome::Complete)
        }
    }

    fn step(&mut self, token: Token, position: usize) -> Result<(), RuntimeError> {
        if self.open_loops > 0 {
            self.record_token(token)
        } else {
            self.interpret_directly(token, position)
        }
    }

    fn interpret_directly(&mut self, token: Token, position: usize) -> Result<(), RuntimeError> {
        match token {
            Token::Op(p) => self.apply(p),
            Token::LoopBegin => {
                self.open_loops = 1;
                self.record.clear();
            }
            Token::LoopEnd => return Err(RuntimeError::UnmatchedLoopEnd { position }),
        }
        Ok(())
    }

    /// Apply one primitive to the tape or output buffer.
    pub(crate) fn apply(&mut self, primitive: Primitive) {
        match primitive {
            Primitive::Increment => self.tape.increment(),
            Primitive::Decrement => self.tape.decrement(),
            Primitive::MoveRight => self.tape.move_right(),
            Primitive::MoveLeft => self.tape.move_left(),
            Primitive::Write => self.output.push(self.tape.read()),
            Primitive::Read => self.read_input(),
        }
    }

    fn read_input(&mut self) {
        match self.input.read_line(READ_PROMPT) {
            Ok(Some(line)) => {
                let line = line.trim();
                match line.parse::<Cell>() {
                    Ok(value) => self.tape.write(value),
                    Err(e) => {
                        let input = line.to_string();
                        match e.kind() {
                            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                                self.report(Diagnostic::InputOutOfRange { input })
                            }
                            _ => self.report(Diagnostic::InvalidInput { input }),
                        }
                    }
                }
            }
            Ok(None) => self.report(Diagnostic::InputUnavailable {
                reason: "end of input".to_string(),
            }),
            Err(e) => self.report(Diagnostic::InputUnavailable {
                reason: e.to_string(),
            }),
        }
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        match diagnostic {
            Diagnostic::IncompleteProgram { .. } => debug!("{}", diagnostic),
            _ => warn!("{}", diagnostic),
        }
        self.diagnostics.push(diagnostic);
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    pub fn output(&self) -> &OutputBuffer {
        &self.output
    }

    /// Current loop nesting depth while recording, 0 otherwise.
    pub fn open_loops(&self) -> usize {
        self.open_loops
    }

    /// Tokens recorded for the currently open top-level loop.
    pub fn loop_record(&self) -> &[Token] {
        &self.record
    }

    /// Everything fed but not yet executed: the open top-level loop (with
    /// its begin marker) if one is being recorded, then queued tokens.
    /// The queue is drained before a batch returns, so from outside this is
    /// the open loop only.
    pub fn retained_input(&self) -> Vec<Token> {
        let mut tokens = Vec::new();
        if self.open_loops > 0 {
            tokens.push(Token::LoopBegin);
            tokens.extend_from_slice(&self.record);
        }
        tokens.extend(self.pending.iter().copied());
        tokens
    }

    pub fn syntax(&self) -> &dyn Syntax {
        self.syntax.as_ref()
    }

    pub fn syntax_kind(&self) -> SyntaxKind {
        self.syntax.kind()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Collect and clear the diagnostics reported so far.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}
