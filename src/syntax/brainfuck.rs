//! Single-character syntax: `+ - > < . , [ ]`

use super::{Primitive, Syntax, SyntaxKind, Token};
use rustc_hash::FxHashMap;

/// Character table for the brainfuck surface syntax.
#[derive(Debug, Clone)]
pub struct Brainfuck {
    table: FxHashMap<char, Token>,
}

impl Brainfuck {
    pub fn new() -> Self {
        Brainfuck {
            table: COMMANDS.iter().copied().collect(),
        }
    }

    /// Look up a single character.
    pub fn lookup(&self, c: char) -> Option<Token> {
        self.table.get(&c).copied()
    }
}

impl Default for Brainfuck {
    fn default() -> Self {
        Self::new()
    }
}

const COMMANDS: [(char, Token); 8] = [
    ('+', Token::INCREMENT),
    ('-', Token::DECREMENT),
    ('>', Token::MOVE_RIGHT),
    ('<', Token::MOVE_LEFT),
    ('.', Token::WRITE),
    (',', Token::READ),
    ('[', Token::LoopBegin),
    (']', Token::LoopEnd),
];

impl Syntax for Brainfuck {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::Brainfuck
    }

    fn tokens<'a>(&'a self, text: &'a str) -> Box<dyn Iterator<Item = Token> + 'a> {
        Box::new(text.chars().filter_map(move |c| self.lookup(c)))
    }

    fn spell(&self, token: Token) -> &'static str {
        match token {
            Token::Op(Primitive::Increment) => "+",
            Token::Op(Primitive::Decrement) => "-",
            Token::Op(Primitive::MoveRight) => ">",
            Token::Op(Primitive::MoveLeft) => "<",
            Token::Op(Primitive::Write) => ".",
            Token::Op(Primitive::Read) => ",",
            Token::LoopBegin => "[",
            Token::LoopEnd => "]",
        }
    }

    fn separator(&self) -> &'static str {
        ""
    }
}
