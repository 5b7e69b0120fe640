//! Surface syntaxes and the token model they compile to
//!
//! Both syntaxes map program text onto the same eight [`Token`]s: six
//! [`Primitive`] operations plus the two loop markers. The execution engine
//! only ever sees tokens, so it does not care which [`Syntax`] produced them.
//!
//! - [`brainfuck`]: one character per token
//! - [`sambackus`]: one whitespace-delimited word pair per token
//!
//! Anything a syntax does not recognize is dropped while tokenizing; stray
//! whitespace, comments and formatting never reach the engine.

pub mod brainfuck;
pub mod sambackus;

use std::fmt;

pub use brainfuck::Brainfuck;
pub use sambackus::Sambackus;

/// A non-structural operation applied to the tape or the output buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Increment,
    Decrement,
    MoveRight,
    MoveLeft,
    Write,
    Read,
}

/// A recognized surface token, mapped onto its canonical meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Op(Primitive),
    LoopBegin,
    LoopEnd,
}

impl Token {
    pub const INCREMENT: Token = Token::Op(Primitive::Increment);
    pub const DECREMENT: Token = Token::Op(Primitive::Decrement);
    pub const MOVE_RIGHT: Token = Token::Op(Primitive::MoveRight);
    pub const MOVE_LEFT: Token = Token::Op(Primitive::MoveLeft);
    pub const WRITE: Token = Token::Op(Primitive::Write);
    pub const READ: Token = Token::Op(Primitive::Read);

    /// All eight tokens, primitives first.
    pub const ALL: [Token; 8] = [
        Token::INCREMENT,
        Token::DECREMENT,
        Token::MOVE_RIGHT,
        Token::MOVE_LEFT,
        Token::WRITE,
        Token::READ,
        Token::LoopBegin,
        Token::LoopEnd,
    ];

    pub fn is_structural(self) -> bool {
        matches!(self, Token::LoopBegin | Token::LoopEnd)
    }
}

/// The capability every surface syntax provides to the engine.
pub trait Syntax {
    /// Which syntax this is.
    fn kind(&self) -> SyntaxKind;

    /// Lazily map `text` onto tokens, skipping everything unrecognized.
    fn tokens<'a>(&'a self, text: &'a str) -> Box<dyn Iterator<Item = Token> + 'a>;

    /// Surface spelling of `token` in this syntax.
    fn spell(&self, token: Token) -> &'static str;

    /// Placed between consecutive spelled tokens.
    fn separator(&self) -> &'static str;

    fn begin_marker(&self) -> &'static str {
        self.spell(Token::LoopBegin)
    }

    fn end_marker(&self) -> &'static str {
        self.spell(Token::LoopEnd)
    }

    /// Spell a token sequence back into program text.
    fn render(&self, tokens: &[Token]) -> String {
        tokens
            .iter()
            .map(|&t| self.spell(t))
            .collect::<Vec<_>>()
            .join(self.separator())
    }
}

/// Selects one of the two supported syntaxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyntaxKind {
    /// Word pairs (`Sambackus. Sambackus?`)
    #[default]
    Sambackus,
    /// Single characters (`+-<>.,[]`)
    Brainfuck,
}

impl SyntaxKind {
    /// Build the tokenizer for this syntax.
    pub fn syntax(self) -> Box<dyn Syntax> {
        match self {
            SyntaxKind::Sambackus => Box::new(Sambackus::new()),
            SyntaxKind::Brainfuck => Box::new(Brainfuck::new()),
        }
    }

    /// The syntax you convert to.
    pub fn other(self) -> Self {
        match self {
            SyntaxKind::Sambackus => SyntaxKind::Brainfuck,
            SyntaxKind::Brainfuck => SyntaxKind::Sambackus,
        }
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxKind::Sambackus => write!(f, "Sambackus!"),
            SyntaxKind::Brainfuck => write!(f, "brainfuck"),
        }
    }
}

/// Translate program text from one syntax into another.
///
/// Unrecognized input is dropped, exactly as it would be when executing.
pub fn convert(text: &str, from: &dyn Syntax, to: &dyn Syntax) -> String {
    let tokens: Vec<Token> = from.tokens(text).collect();
    to.render(&tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_sambackus_to_brainfuck() {
        let text = concat!(
            " sambackus.   sambackus. sambackus. \n\nsambackus! \nsambackus! ",
            " sambackus!  sambackus! sambackus.",
            "\n sambackus. sambackus? sambackus? sambackus.  sambackus!sambackus?  sambackus? sambackus!",
        );
        let out = convert(text, &Sambackus::new(), &Brainfuck::new());
        assert_eq!(out, "+,-.><[]");
    }

    #[test]
    fn test_convert_brainfuck_to_sambackus() {
        let out = convert("+ x [", &Brainfuck::new(), &Sambackus::new());
        assert_eq!(out, "Sambackus. Sambackus. Sambackus! Sambackus?");
    }

    #[test]
    fn test_markers_and_kind() {
        let bf = SyntaxKind::Brainfuck.syntax();
        assert_eq!(bf.begin_marker(), "[");
        assert_eq!(bf.end_marker(), "]");
        assert_eq!(bf.kind(), SyntaxKind::Brainfuck);
        assert_eq!(SyntaxKind::Brainfuck.other(), SyntaxKind::Sambackus);
        assert_eq!(SyntaxKind::default(), SyntaxKind::Sambackus);
    }

    #[test]
    fn test_structural_tokens() {
        let structural: Vec<_> = Token::ALL.iter().filter(|t| t.is_structural()).collect();
        assert_eq!(structural, vec![&Token::LoopBegin, &Token::LoopEnd]);
    }
}
