//! # Introduction
//!
//! Sambackus! is a tape interpreter for an eight-instruction language with
//! two interchangeable surface syntaxes: brainfuck's single characters and
//! Sambackus! word pairs. Both compile to the same tokens and run on the same
//! engine.
//!
//! ## Execution pipeline
//!
//! ```text
//! Text → Syntax → Tokens → Interpreter → Tape / Output buffer
//! ```
//!
//! 1. [`syntax`]: maps program text to [`syntax::Token`]s, dropping anything
//!    it does not recognize.
//! 2. [`interpreter`]: applies primitives directly, records loops until they
//!    close and then replays them while the guard cell is nonzero.
//! 3. [`memory`]: the bidirectionally growing [`memory::Tape`] and the
//!    append-only [`memory::OutputBuffer`].
//! 4. [`session`]: the interactive command loop and the plain-text state
//!    report.
//! 5. [`ui`]: ratatui dashboard for inspecting the interpreter state.
//!
//! ## Example
//!
//! ```
//! use sambackus::interpreter::engine::Interpreter;
//! use sambackus::syntax::SyntaxKind;
//!
//! let mut interp = Interpreter::new(SyntaxKind::Brainfuck);
//! interp.interpret_text("+[+[-]].").unwrap();
//! assert_eq!(interp.output().values(), &[0]);
//! ```

pub mod interpreter;
pub mod memory;
pub mod session;
pub mod syntax;
pub mod ui;
