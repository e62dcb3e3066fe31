use std::fmt;

use derive_getters::Getters;

use crate::atom::Atom;


#[derive(Debug, PartialEq)]
pub enum TokenKind {
    LeftParen,
    RightParen,
    Atom(Atom),
    Comment(String),
}

#[derive(Debug, Getters, PartialEq)]
pub struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) line: usize,
    pub(crate) col: usize,
}

impl Token {
    pub fn new(kind: TokenKind, line: usize, col: usize) -> Self {
        Self { kind, line, col }
    }

    pub fn into_kind(self) -> TokenKind {
        self.kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TokenKind::Atom(atom) => write!(f, "{} @ ({}, {})", atom, self.line, self.col),
            _ => write!(f, "{:?} @ ({}, {})", self.kind, self.line, self.col),
        }
    }
}
