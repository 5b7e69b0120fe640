//! Error types for the tape interpreter
//!
//! Errors come in two severities:
//!
//! - [`RuntimeError`] is fatal to the batch of tokens being interpreted. The
//!   remaining tokens of that batch are discarded.
//!   [`RuntimeError::NestingLimitExceeded`] additionally ends the whole
//!   session.
//! - [`Diagnostic`] is recoverable. It is pushed onto the interpreter's
//!   diagnostic channel and logged, and interpretation carries on.
//!
//! Unrecognized surface tokens are not errors at all; the syntaxes drop them.

use crate::memory::Cell;
use thiserror::Error;

/// Fatal errors raised while interpreting a batch of tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// A loop end appeared while no loop was open.
    ///
    /// `position` is the zero-based index of the token within its batch.
    #[error("loop end without matching loop begin (token {position})")]
    UnmatchedLoopEnd { position: usize },

    /// Loops were nested deeper than the interpreter allows.
    #[error("nesting maximum ({limit}) exceeded")]
    NestingLimitExceeded { limit: usize },
}

impl RuntimeError {
    /// Whether this error must end the session rather than just the batch.
    pub fn aborts_session(&self) -> bool {
        matches!(self, RuntimeError::NestingLimitExceeded { .. })
    }
}

/// Recoverable conditions reported without stopping execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// The read primitive got something that is not an integer.
    /// The current cell was left untouched.
    #[error("invalid input {input:?}, cell left unchanged")]
    InvalidInput { input: String },

    /// The read primitive could not obtain a line at all (end of input or
    /// an I/O failure). The current cell was left untouched.
    #[error("no input available ({reason}), cell left unchanged")]
    InputUnavailable { reason: String },

    /// The read primitive got an integer too large for a cell.
    /// The current cell was left untouched.
    #[error("input {input} does not fit in a cell ({min} to {max}), cell left unchanged", min = Cell::MIN, max = Cell::MAX)]
    InputOutOfRange { input: String },

    /// A batch ended while loops were still open. The recorded tokens are
    /// kept and the next batch continues the recording.
    #[error("incomplete program: {open_loops} open loop(s)")]
    IncompleteProgram { open_loops: usize },
}

/// Errors from the character view of the output buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutputError {
    #[error("output value {value} at position {index} is not a valid character code")]
    InvalidCodePoint { index: usize, value: Cell },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_nesting_limit_aborts() {
        assert!(RuntimeError::NestingLimitExceeded { limit: 1000 }.aborts_session());
        assert!(!RuntimeError::UnmatchedLoopEnd { position: 3 }.aborts_session());
    }

    #[test]
    fn test_messages_name_the_condition() {
        let err = RuntimeError::NestingLimitExceeded { limit: 1000 };
        assert_eq!(err.to_string(), "nesting maximum (1000) exceeded");

        let err = RuntimeError::UnmatchedLoopEnd { position: 0 };
        assert!(err.to_string().contains("without matching loop begin"));

        let err = OutputError::InvalidCodePoint { index: 1, value: -5 };
        assert!(err.to_string().contains("-5"));
    }
}
