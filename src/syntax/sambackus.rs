//! Word-pair syntax
//!
//! Programs are whitespace-delimited words drawn from `sambackus.`,
//! `sambackus!` and `sambackus?`, compared case-insensitively. Words are
//! consumed two at a time and each pair is looked up in a fixed table:
//!
//! ```text
//! .  .   increment        !  !   decrement
//! .  ?   move right       ?  .   move left
//! !  .   write            .  !   read
//! !  ?   loop begin       ?  !   loop end
//! ```
//!
//! Pairing is positional: a pair that is not in the table (including one
//! containing a word outside the vocabulary) is dropped as a whole, and a
//! trailing unpaired word is ignored.
//!
//! A word ends at whitespace or right after its punctuation mark, so
//! `sambackus!sambackus?` is read as two words.

use super::{Primitive, Syntax, SyntaxKind, Token};
use rustc_hash::FxHashMap;

/// One word of the vocabulary, named by its trailing punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Word {
    Dot,
    Bang,
    Question,
}

impl Word {
    /// Parse a single word, ignoring ASCII case.
    pub fn parse(word: &str) -> Option<Word> {
        [Word::Dot, Word::Bang, Word::Question]
            .into_iter()
            .find(|w| w.as_str().eq_ignore_ascii_case(word))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Word::Dot => "Sambackus.",
            Word::Bang => "Sambackus!",
            Word::Question => "Sambackus?",
        }
    }
}

const PAIRS: [((Word, Word), Token); 8] = [
    ((Word::Dot, Word::Dot), Token::INCREMENT),
    ((Word::Bang, Word::Bang), Token::DECREMENT),
    ((Word::Dot, Word::Question), Token::MOVE_RIGHT),
    ((Word::Question, Word::Dot), Token::MOVE_LEFT),
    ((Word::Bang, Word::Dot), Token::WRITE),
    ((Word::Dot, Word::Bang), Token::READ),
    ((Word::Bang, Word::Question), Token::LoopBegin),
    ((Word::Question, Word::Bang), Token::LoopEnd),
];

/// Pair table for the Sambackus! surface syntax.
#[derive(Debug, Clone)]
pub struct Sambackus {
    table: FxHashMap<(Word, Word), Token>,
}

impl Sambackus {
    pub fn new() -> Self {
        Sambackus {
            table: PAIRS.iter().copied().collect(),
        }
    }

    /// Look up an ordered pair of raw words.
    pub fn lookup(&self, first: &str, second: &str) -> Option<Token> {
        let key = (Word::parse(first)?, Word::parse(second)?);
        self.table.get(&key).copied()
    }
}

impl Default for Sambackus {
    fn default() -> Self {
        Self::new()
    }
}

/// Split `text` into words at whitespace and after every `.`, `!` or `?`.
fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
        .flat_map(|chunk| chunk.split_inclusive(|c: char| matches!(c, '.' | '!' | '?')))
}

/// Groups an iterator of words into non-overlapping ordered pairs.
struct Pairs<I> {
    words: I,
}

impl<'a, I> Iterator for Pairs<I>
where
    I: Iterator<Item = &'a str>,
{
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.words.next()?;
        let second = self.words.next()?;
        Some((first, second))
    }
}

impl Syntax for Sambackus {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::Sambackus
    }

    fn tokens<'a>(&'a self, text: &'a str) -> Box<dyn Iterator<Item = Token> + 'a> {
        let pairs = Pairs { words: words(text) };
        Box::new(pairs.filter_map(move |(first, second)| self.lookup(first, second)))
    }

    fn spell(&self, token: Token) -> &'static str {
        match token {
            Token::Op(Primitive::Increment) => "Sambackus. Sambackus.",
            Token::Op(Primitive::Decrement) => "Sambackus! Sambackus!",
            Token::Op(Primitive::MoveRight) => "Sambackus. Sambackus?",
            Token::Op(Primitive::MoveLeft) => "Sambackus? Sambackus.",
            Token::Op(Primitive::Write) => "Sambackus! Sambackus.",
            Token::Op(Primitive::Read) => "Sambackus. Sambackus!",
            Token::LoopBegin => "Sambackus! Sambackus?",
            Token::LoopEnd => "Sambackus? Sambackus!",
        }
    }

    fn separator(&self) -> &'static str {
        " "
    }
}
