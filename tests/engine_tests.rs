// Integration tests for the tape interpreter

use sambackus::interpreter::engine::{Interpreter, Outcome};
use sambackus::interpreter::errors::{Diagnostic, RuntimeError};
use sambackus::interpreter::input::ScriptedInput;
use sambackus::syntax::SyntaxKind;

const GC_PROGRAM: &str = "
    sambackus. sambackus. sambackus. sambackus. sambackus. sambackus. sambackus. sambackus. sambackus! sambackus.
    sambackus. sambackus. sambackus. sambackus. sambackus. sambackus. sambackus. sambackus. sambackus! sambackus.
    sambackus. sambackus? sambackus! sambackus.
    sambackus. sambackus. sambackus! sambackus.
    sambackus! sambackus.
    sambackus! sambackus.
    sambackus! sambackus! sambackus! sambackus.

    sambackus. sambackus. sambackus. sambackus. sambackus. sambackus. sambackus. sambackus.
    sambackus! sambackus?
    sambackus. sambackus? sambackus. sambackus. sambackus. sambackus? sambackus. sambackus. sambackus. sambackus. sambackus? sambackus. sambackus? sambackus. sambackus! sambackus!
    sambackus? sambackus!
    sambackus. sambackus? sambackus. sambackus? sambackus! sambackus! sambackus! sambackus.
    sambackus? sambackus. sambackus! sambackus.
    sambackus. sambackus? sambackus! sambackus! sambackus! sambackus.
    sambackus. sambackus. sambackus. sambackus. sambackus. sambackus. sambackus! sambackus.
    sambackus! sambackus! sambackus! sambackus.
    sambackus? sambackus. sambackus! sambackus.
";

fn interpreter(kind: SyntaxKind) -> Interpreter {
    Interpreter::with_input(kind, Box::new(ScriptedInput::default()))
}

fn interpreter_with_input(kind: SyntaxKind, lines: &[&str]) -> Interpreter {
    Interpreter::with_input(kind, Box::new(ScriptedInput::new(lines.iter().copied())))
}

fn cells(interp: &Interpreter) -> Vec<i64> {
    interp.tape().cells().collect()
}

#[test]
fn test_brainfuck_simple_loop() {
    let mut interp = interpreter(SyntaxKind::Brainfuck);
    let outcome = interp.interpret_text("+[-].").expect("Execution failed");
    assert_eq!(outcome, Outcome::Complete);
    assert_eq!(interp.output().values(), &[0]);
}

#[test]
fn test_brainfuck_nested_loop() {
    let mut interp = interpreter(SyntaxKind::Brainfuck);
    interp.interpret_text("+[+[-]].").expect("Execution failed");
    assert_eq!(interp.output().values(), &[0]);
}

#[test]
fn test_brainfuck_ignores_whitespace() {
    let mut interp = interpreter(SyntaxKind::Brainfuck);
    interp.interpret_text("   +   +   +      -  - ").unwrap();
    assert_eq!(cells(&interp), vec![1]);
}

#[test]
fn test_sambackus_simple_loop() {
    let mut interp = interpreter(SyntaxKind::Sambackus);
    interp
        .interpret_text(
            "sambackus. sambackus. sambackus! sambackus? sambackus! sambackus! \
             sambackus? sambackus! sambackus! sambackus.",
        )
        .unwrap();
    assert_eq!(interp.output().values(), &[0]);
}

#[test]
fn test_sambackus_nested_loop() {
    let mut interp = interpreter(SyntaxKind::Sambackus);
    interp
        .interpret_text(
            "sambackus. sambackus. sambackus! sambackus? \
             sambackus. sambackus. sambackus! sambackus? \
             sambackus! sambackus! sambackus? sambackus! sambackus? sambackus! sambackus! sambackus.",
        )
        .unwrap();
    assert_eq!(interp.output().values(), &[0]);
}

#[test]
fn test_sambackus_program_with_nested_loops() {
    let mut interp = interpreter(SyntaxKind::Sambackus);
    interp.interpret_text(GC_PROGRAM).expect("Execution failed");
    assert_eq!(
        interp.output().values(),
        &[4, 8, 0, 1, 1, 1, 0, 7, 4, 6, 9, 8, 4]
    );
    assert_eq!(interp.open_loops(), 0);
}

#[test]
fn test_hello_world_brainfuck() {
    let mut interp = interpreter(SyntaxKind::Brainfuck);
    interp
        .interpret_text(include_str!("../demos/hello.b"))
        .expect("Execution failed");
    assert_eq!(interp.output().as_characters().unwrap(), "Hello World!\n");
}

#[test]
fn test_hello_world_sambackus() {
    let mut interp = interpreter(SyntaxKind::Sambackus);
    interp
        .interpret_text(include_str!("../demos/hello.sb"))
        .expect("Execution failed");
    assert_eq!(interp.output().as_characters().unwrap(), "Hello World!");
}

#[test]
fn test_zero_guard_skips_loop() {
    let mut interp = interpreter(SyntaxKind::Brainfuck);
    interp.interpret_text("[.+.]").unwrap();
    assert!(interp.output().is_empty());
    assert_eq!(cells(&interp), vec![0]);
}

#[test]
fn test_move_left_grows_tape() {
    let mut interp = interpreter(SyntaxKind::Brainfuck);
    interp.interpret_text("+<<").unwrap();
    assert_eq!(cells(&interp), vec![0, 0, 1]);
    assert_eq!(interp.tape().cursor(), 0);
}

#[test]
fn test_cells_may_go_negative() {
    let mut interp = interpreter(SyntaxKind::Brainfuck);
    interp.interpret_text("--.").unwrap();
    assert_eq!(interp.output().values(), &[-2]);
    assert!(interp.output().as_characters().is_err());
}

#[test]
fn test_nesting_at_limit_is_allowed() {
    let mut interp = interpreter(SyntaxKind::Brainfuck);
    let program = format!("+{}-{}", "[".repeat(1000), "]".repeat(1000));
    let outcome = interp.interpret_text(&program).unwrap();
    assert_eq!(outcome, Outcome::Complete);
    assert_eq!(interp.tape().read(), 0);
}

#[test]
fn test_nesting_limit_exceeded() {
    let mut interp = interpreter(SyntaxKind::Brainfuck);
    let err = interp.interpret_text(&"[".repeat(1001)).unwrap_err();
    assert_eq!(err, RuntimeError::NestingLimitExceeded { limit: 1000 });
    assert!(err.aborts_session());
    assert_eq!(interp.open_loops(), 0);
    assert!(interp.loop_record().is_empty());
}

#[test]
fn test_unmatched_loop_end() {
    let mut interp = interpreter(SyntaxKind::Brainfuck);
    let err = interp.interpret_text("++.]").unwrap_err();
    assert!(matches!(err, RuntimeError::UnmatchedLoopEnd { position: 3 }));
    assert!(!err.aborts_session());
    // effects before the error are kept
    assert_eq!(interp.output().values(), &[2]);
}

#[test]
fn test_incremental_feeding() {
    let mut interp = interpreter(SyntaxKind::Brainfuck);
    assert_eq!(
        interp.interpret_text("+++[>+").unwrap(),
        Outcome::Incomplete { open_loops: 1 }
    );
    assert_eq!(
        interp.interpret_text("+[-").unwrap(),
        Outcome::Incomplete { open_loops: 2 }
    );
    assert_eq!(interp.interpret_text("]<-]>.").unwrap(), Outcome::Complete);

    // the inner loop clears the second cell on every pass
    assert_eq!(interp.output().values(), &[0]);
    assert_eq!(cells(&interp), vec![0, 0]);
}

#[test]
fn test_sambackus_odd_word_dropped() {
    let mut interp = interpreter(SyntaxKind::Sambackus);
    interp
        .interpret_text("Sambackus. SAMBACKUS. sambackus.")
        .unwrap();
    assert_eq!(cells(&interp), vec![1]);
}

#[test]
fn test_sambackus_unknown_words_dropped() {
    let mut interp = interpreter(SyntaxKind::Sambackus);
    interp
        .interpret_text("hello world sambackus. sambackus. sambackus. samba")
        .unwrap();
    assert_eq!(cells(&interp), vec![1]);
}

#[test]
fn test_read_stores_value() {
    let mut interp = interpreter_with_input(SyntaxKind::Brainfuck, &["3", " 4 "]);
    interp.interpret_text(include_str!("../demos/add.b")).unwrap();
    assert_eq!(interp.output().values(), &[7]);
    assert!(interp.take_diagnostics().is_empty());
}

#[test]
fn test_read_invalid_input_keeps_cell() {
    let mut interp = interpreter_with_input(SyntaxKind::Brainfuck, &["abc"]);
    interp.interpret_text("+++,.").unwrap();
    assert_eq!(interp.output().values(), &[3]);
    assert_eq!(
        interp.take_diagnostics(),
        vec![Diagnostic::InvalidInput {
            input: "abc".to_string()
        }]
    );
}

#[test]
fn test_read_exhausted_input_keeps_cell() {
    let mut interp = interpreter(SyntaxKind::Brainfuck);
    interp.interpret_text("++,.").unwrap();
    assert_eq!(interp.output().values(), &[2]);
    assert!(matches!(
        interp.take_diagnostics().as_slice(),
        [Diagnostic::InputUnavailable { .. }]
    ));
}

#[test]
fn test_switching_syntax_resets() {
    let mut interp = interpreter(SyntaxKind::Brainfuck);
    interp.interpret_text("++>[").unwrap();
    interp.set_syntax(SyntaxKind::Sambackus);
    assert_eq!(interp.syntax_kind(), SyntaxKind::Sambackus);
    assert_eq!(cells(&interp), vec![0]);
    assert_eq!(interp.open_loops(), 0);

    // brainfuck characters mean nothing now
    interp.interpret_text("+++").unwrap();
    assert_eq!(cells(&interp), vec![0]);
}
