//! Tape interpreter execution engine
//!
//! This module provides the core execution logic:
//! - [`engine`]: the [`Interpreter`](engine::Interpreter) and its batch API
//! - [`loops`]: loop recording and resolved replay
//! - [`input`]: where the read primitive gets its values
//! - [`errors`]: fatal errors and recoverable diagnostics
//! - [`constants`]: fixed limits and prompts
//!
//! # Execution Model
//!
//! Tokens are interpreted one at a time. Outside a loop, primitives are
//! applied immediately. A loop begin switches to recording: every following
//! token is buffered until the matching loop end, at which point the whole
//! loop runs until its guard cell is zero. Recording survives the end of a
//! batch, which is what lets the interactive session accept a program one
//! line at a time.

pub mod constants;
pub mod engine;
pub mod errors;
pub mod input;
pub mod loops;
