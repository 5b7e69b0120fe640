//! Memory model for the tape interpreter
//!
//! - [`tape`]: the cell sequence and cursor the primitives operate on
//! - [`output`]: the append-only buffer filled by the write primitive
//!
//! # Cell Arithmetic
//!
//! Cells are [`Cell`] (`i64`). Increment and decrement wrap on overflow, so
//! `i64::MAX + 1 == i64::MIN`. Values stored by the read primitive are taken
//! verbatim; input outside the `i64` range is rejected with
//! [`Diagnostic::InputOutOfRange`](crate::interpreter::errors::Diagnostic::InputOutOfRange)
//! and leaves the cell unchanged.

pub mod output;
pub mod tape;

pub use output::OutputBuffer;
pub use tape::Tape;

/// Value held by a single tape cell.
pub type Cell = i64;
