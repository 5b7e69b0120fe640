//! Input acquisition for the read primitive
//!
//! The interpreter never touches the console directly. Every value the read
//! primitive needs comes from an [`InputSource`], which hands back one line
//! of raw text per request; parsing that text into a cell value is the
//! interpreter's job.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// A provider of input lines.
pub trait InputSource {
    /// Show `prompt` if the source is interactive and return the next line
    /// without its line terminator. `Ok(None)` means the input is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Reads lines from the process's standard input, prompting on stdout.
///
/// The stdin lock is only held for the duration of one request, so several
/// `StdinInput`s (e.g. the session and the interpreter) can share stdin.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinInput;

impl InputSource for StdinInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(trim_newline(line)))
    }
}

/// Serves a fixed list of lines, then reports end of input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedInput {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines not yet handed out.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

fn trim_newline(mut line: String) -> String {
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    line
}
