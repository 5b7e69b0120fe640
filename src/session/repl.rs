//! Line-oriented command loop around a [`Session`]

use super::{diagnostic_message, Command, Reply, Session, SessionError};
use crate::interpreter::constants::SESSION_PROMPT;
use crate::interpreter::input::InputSource;
use crate::syntax::SyntaxKind;
use log::info;
use std::io::{self, Write};

/// Read commands from `lines` until the user quits or input runs out.
///
/// `show_state` renders the interpreter state for `?` and on quit; pass
/// [`write_report`] for plain text. Returns an error only for I/O failures
/// and for interpreter errors that end the session.
pub fn run<L, W, F>(
    session: &mut Session,
    lines: &mut L,
    out: &mut W,
    mut show_state: F,
) -> Result<(), SessionError>
where
    L: InputSource + ?Sized,
    W: Write,
    F: FnMut(&Session, &mut W) -> io::Result<()>,
{
    write_banner(session.syntax_kind(), out)?;

    loop {
        out.flush()?;
        let command = match lines.read_line(SESSION_PROMPT)? {
            Some(line) => Command::parse(&line),
            None => {
                writeln!(out)?;
                Command::Quit
            }
        };

        match session.execute(command) {
            Ok(Reply::Status) => show_state(session, out)?,
            Ok(Reply::Help) => write_help(out)?,
            Ok(Reply::Switched(kind)) => writeln!(out, "{}", switch_message(kind))?,
            Ok(Reply::Evaluated { diagnostics, .. }) => {
                for diagnostic in &diagnostics {
                    writeln!(out, "{}", diagnostic_message(diagnostic))?;
                }
            }
            Ok(Reply::Quit) => {
                show_state(session, out)?;
                info!("session ended");
                return Ok(());
            }
            Err(err) if err.aborts_session() => {
                writeln!(out, "Error: {} ... exiting", err)?;
                out.flush()?;
                return Err(err.into());
            }
            Err(err) => writeln!(out, "Error: {}", err)?,
        }
    }
}

/// Plain-text state view, one field per line.
pub fn write_report<W: Write>(session: &Session, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", session.report())
}

fn write_banner<W: Write>(kind: SyntaxKind, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "Sambackus! and brainfuck interpreter v{}",
        env!("CARGO_PKG_VERSION")
    )?;
    writeln!(out, "Type '?' to display the status of the interpreter, 'h' for help.")?;
    writeln!(out, "Type 'b' to enter brainfuck mode, 'o' for Sambackus! mode. Empty input quits.")?;
    writeln!(out, "Active syntax: {}", kind)
}

fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "  ?      show cells, pending input and output")?;
    writeln!(out, "  b      switch to brainfuck (resets the interpreter)")?;
    writeln!(out, "  o      switch to Sambackus! (resets the interpreter)")?;
    writeln!(out, "  h      show this help")?;
    writeln!(out, "  <enter> show the state and quit")?;
    writeln!(out, "Anything else is interpreted as program text.")
}

fn switch_message(kind: SyntaxKind) -> String {
    let back = match kind.other() {
        SyntaxKind::Brainfuck => 'b',
        SyntaxKind::Sambackus => 'o',
    };
    format!(
        "Entering {} mode. Type '{}' to return to {}",
        kind,
        back,
        kind.other()
    )
}
