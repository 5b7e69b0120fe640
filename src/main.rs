// Sambackus!: tape interpreter for Sambackus! and brainfuck

use std::fs;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use log::LevelFilter;

use sambackus::interpreter::engine::Interpreter;
use sambackus::interpreter::input::{InputSource, ScriptedInput, StdinInput};
use sambackus::session::{self, repl, Session, SessionError};
use sambackus::syntax::{self, SyntaxKind};
use sambackus::ui;

/// Sambackus! and brainfuck interpreter
#[derive(Parser, Debug)]
#[command(name = "sambackus", version, about, long_about = None)]
struct Args {
    /// Program to run; starts an interactive session when omitted
    file: Option<PathBuf>,

    /// Read programs as brainfuck
    #[arg(short = 'b', long, conflicts_with = "sambackus")]
    brainfuck: bool,

    /// Read programs as Sambackus! word pairs (the default)
    #[arg(short = 'o', long)]
    sambackus: bool,

    /// Start an interactive session
    #[arg(short, long, conflicts_with_all = ["file", "convert"])]
    interactive: bool,

    /// Answer read requests with these values instead of prompting
    #[arg(long = "input", value_name = "VALUE", allow_hyphen_values = true)]
    inputs: Vec<String>,

    /// Print FILE translated into the other syntax instead of running it
    #[arg(long, requires = "file")]
    convert: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let kind = if args.brainfuck {
        SyntaxKind::Brainfuck
    } else {
        SyntaxKind::Sambackus
    };

    let input: Box<dyn InputSource> = if args.inputs.is_empty() {
        Box::new(StdinInput)
    } else {
        Box::new(ScriptedInput::new(args.inputs.iter().cloned()))
    };

    match args.file {
        Some(ref file) if args.convert => convert_file(file, kind),
        Some(ref file) => run_file(file, Interpreter::with_input(kind, input)),
        None => run_interactive(Interpreter::with_input(kind, input)),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}

fn read_source(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: Could not read '{}': {}", path.display(), e);
            process::exit(1);
        }
    }
}

fn convert_file(path: &Path, kind: SyntaxKind) -> Result<(), Box<dyn std::error::Error>> {
    let source = read_source(path);
    let from = kind.syntax();
    let to = kind.other().syntax();
    println!("{}", syntax::convert(&source, from.as_ref(), to.as_ref()));
    Ok(())
}

fn run_file(path: &Path, mut interpreter: Interpreter) -> Result<(), Box<dyn std::error::Error>> {
    let source = read_source(path);
    log::info!(
        "running {} as {}",
        path.display(),
        interpreter.syntax_kind()
    );

    let result = interpreter.interpret_text(&source);
    for diagnostic in interpreter.take_diagnostics() {
        eprintln!("{}", session::diagnostic_message(&diagnostic));
    }

    let session = Session::new(interpreter);
    println!("{}", session.report());

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
    Ok(())
}

fn run_interactive(interpreter: Interpreter) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::new(interpreter);
    let mut stdout = io::stdout();
    let dashboard = stdout.is_terminal();

    let result = repl::run(&mut session, &mut StdinInput, &mut stdout, |session, out| {
        if dashboard {
            ui::draw_inline(session.interpreter())
        } else {
            repl::write_report(session, out)
        }
    });

    match result {
        Ok(()) => Ok(()),
        Err(SessionError::Runtime(_)) => process::exit(1),
        Err(e) => Err(e.into()),
    }
}
