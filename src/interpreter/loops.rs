//! Loop recording and replay.
//!
//! While a top-level loop is open the interpreter only records tokens (see
//! [`Interpreter::record_token`]). Nested loop markers go into the record
//! verbatim. Once the top-level loop closes, the record is resolved in one
//! pass into a flat instruction list where every loop marker knows the
//! index of its partner, and that list is executed by jumping between
//! indices.
//!
//! The resolved form behaves exactly like re-interpreting the record for as
//! long as the guard cell is nonzero: every loop end jumps back to its loop
//! begin, which checks the guard again before each repetition. A guard that
//! is zero on entry skips the body entirely.

use crate::interpreter::constants::MAX_NESTED_LOOPS;
use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use crate::syntax::{Primitive, Token};
use log::trace;

/// One step of a resolved loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Instr {
    Op(Primitive),
    /// Leave the loop (continue after `end`) when the guard is zero.
    Begin { end: usize },
    /// Go back to the matching begin.
    End { begin: usize },
}

/// A finished top-level loop with all markers matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolvedLoop {
    instrs: Vec<Instr>,
}

impl ResolvedLoop {
    /// Resolve the body of a top-level loop (the tokens strictly between
    /// its begin and end markers). Nested markers in `body` are balanced.
    pub(crate) fn resolve(body: &[Token]) -> Self {
        let mut instrs = Vec::with_capacity(body.len() + 2);
        let mut open = Vec::new();

        let tokens = std::iter::once(&Token::LoopBegin)
            .chain(body)
            .chain(std::iter::once(&Token::LoopEnd));

        for token in tokens {
            match *token {
                Token::Op(p) => instrs.push(Instr::Op(p)),
                Token::LoopBegin => {
                    open.push(instrs.len());
                    // patched when the matching end is reached
                    instrs.push(Instr::Begin { end: 0 });
                }
                Token::LoopEnd => {
                    let end = instrs.len();
                    match open.pop() {
                        Some(begin) => {
                            instrs[begin] = Instr::Begin { end };
                            instrs.push(Instr::End { begin });
                        }
                        None => debug_assert!(false, "unbalanced loop record"),
                    }
                }
            }
        }
        debug_assert!(open.is_empty(), "unbalanced loop record");

        ResolvedLoop { instrs }
    }

    pub(crate) fn instrs(&self) -> &[Instr] {
        &self.instrs
    }
}

impl Interpreter {
    /// Handle one token while a loop is being recorded.
    pub(crate) fn record_token(&mut self, token: Token) -> Result<(), RuntimeError> {
        match token {
            Token::LoopEnd => {
                self.open_loops -= 1;
                if self.open_loops == 0 {
                    let body = std::mem::take(&mut self.record);
                    self.replay(&body);
                    return Ok(());
                }
            }
            Token::LoopBegin => {
                if self.open_loops >= MAX_NESTED_LOOPS {
                    return Err(RuntimeError::NestingLimitExceeded {
                        limit: MAX_NESTED_LOOPS,
                    });
                }
                self.open_loops += 1;
            }
            Token::Op(_) => {}
        }
        self.record.push(token);
        Ok(())
    }

    /// Run a closed top-level loop until its guard cell is zero.
    pub(crate) fn replay(&mut self, body: &[Token]) {
        let program = ResolvedLoop::resolve(body);
        let instrs = program.instrs();
        let mut repetitions = 0usize;
        let mut pc = 0;

        trace!("replaying loop of {} tokens", body.len());

        while pc < instrs.len() {
            match instrs[pc] {
                Instr::Op(p) => self.apply(p),
                Instr::Begin { end } => {
                    if self.tape.read() == 0 {
                        pc = end;
                    } else if pc == 0 {
                        repetitions += 1;
                    }
                }
                Instr::End { begin } => {
                    pc = begin;
                    continue;
                }
            }
            pc += 1;
        }

        trace!("loop finished after {} repetition(s)", repetitions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_flat_loop() {
        let program = ResolvedLoop::resolve(&[Token::DECREMENT]);
        assert_eq!(
            program.instrs(),
            &[
                Instr::Begin { end: 2 },
                Instr::Op(Primitive::Decrement),
                Instr::End { begin: 0 },
            ]
        );
    }

    #[test]
    fn test_resolve_nested_loop() {
        // [+[-]]
        let body = [Token::INCREMENT, Token::LoopBegin, Token::DECREMENT, Token::LoopEnd];
        let program = ResolvedLoop::resolve(&body);
        assert_eq!(
            program.instrs(),
            &[
                Instr::Begin { end: 5 },
                Instr::Op(Primitive::Increment),
                Instr::Begin { end: 4 },
                Instr::Op(Primitive::Decrement),
                Instr::End { begin: 2 },
                Instr::End { begin: 0 },
            ]
        );
    }
}
