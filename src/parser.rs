//! Module for parsing atom text back into atoms.
//!
//! The dual of render: for any atom whose grounded values are recognized by
//! the Tokenizer, parsing its rendering yields an equal atom.

use std::fmt;

use log::{trace, warn};

use crate::atom::{Atom, ExpressionAtom};
use crate::error::Error;
use crate::limits::Limits;
use crate::token::{Token, TokenKind, TokenStore, Tokenizer};

use self::ParseErrorReason::*;


pub struct SExprParser<'a> {
    text: &'a str,
    tokens: Option<TokenStore>,
    limits: Limits,

    // Expressions opened but not yet closed, innermost last.
    current: Vec<OpenExpr>,
}

struct OpenExpr {
    children: Vec<Atom>,
    line: usize,
    col: usize,
}

#[derive(Debug, PartialEq)]
pub enum ParseErrorReason {
    UnmatchedOpen,
    UnmatchedClose,
    NoAtom,
    TrailingInput,
}

#[derive(Debug)]
pub struct ParseError {
    reason: ParseErrorReason,
    line: usize,
    col: usize,
}


impl<'a> SExprParser<'a> {
    pub fn new(text: &'a str) -> Self {
        Self::with_limits(text, Limits::default())
    }

    pub fn with_limits(text: &'a str, limits: Limits) -> Self {
        Self {
            text,
            tokens: None,
            limits,
            current: Default::default(),
        }
    }

    /// Parses the next top-level atom, or returns None once the text is
    /// exhausted.
    ///
    /// Text is tokenized on the first call. After an error the rest of the
    /// text is dropped, so subsequent calls return None.
    pub fn parse(&mut self, tokenizer: &Tokenizer) -> Result<Option<Atom>, Error> {
        if self.tokens.is_none() {
            match tokenizer.tokenize(self.text) {
                Ok(tokens) => self.tokens = Some(tokens),
                Err(err) => {
                    self.reset();
                    return Err(err.into());
                }
            }
        }

        while let Some(token) = self.tokens.as_mut().and_then(|tokens| tokens.pop_front()) {
            match self.parse_token(token) {
                Ok(Some(atom)) => return Ok(Some(atom)),
                Ok(None) => {}
                Err(err) => {
                    self.reset();
                    return Err(err);
                }
            }
        }

        if let Some(open) = self.current.pop() {
            let (line, col) = (open.line, open.col);
            self.reset();
            return err!(Parse(ParseError {
                reason: UnmatchedOpen,
                line,
                col,
            }));
        }
        Ok(None)
    }

    /// Parses every remaining top-level atom.
    pub fn parse_all(&mut self, tokenizer: &Tokenizer) -> Result<Vec<Atom>, Error> {
        let mut atoms = Vec::new();
        while let Some(atom) = self.parse(tokenizer)? {
            atoms.push(atom);
        }
        Ok(atoms)
    }

    fn parse_token(&mut self, token: Token) -> Result<Option<Atom>, Error> {
        trace!("parsing {}", token);
        let Token { kind, line, col } = token;
        match kind {
            TokenKind::LeftParen => {
                if self.current.len() >= self.limits.max_depth {
                    warn!(
                        "expression @ ({}, {}) nests deeper than {}",
                        line, col, self.limits.max_depth
                    );
                    return err!(ResourceExhausted {
                        depth: self.current.len() + 1,
                        limit: self.limits.max_depth,
                    });
                }
                self.current.push(OpenExpr {
                    children: Vec::new(),
                    line,
                    col,
                });
                Ok(None)
            }
            TokenKind::RightParen => match self.current.pop() {
                Some(open) => {
                    let expr = ExpressionAtom::new(open.children);
                    Ok(self.append(Atom::Expression(expr)))
                }
                None => err!(Parse(ParseError {
                    reason: UnmatchedClose,
                    line,
                    col,
                })),
            },
            TokenKind::Atom(atom) => Ok(self.append(atom)),
            TokenKind::Comment(_) => Ok(None),
        }
    }

    // Returns atom back if it is complete at top level.
    fn append(&mut self, atom: Atom) -> Option<Atom> {
        match self.current.last_mut() {
            Some(open) => {
                open.children.push(atom);
                None
            }
            None => Some(atom),
        }
    }

    fn reset(&mut self) {
        self.current.clear();
        self.tokens = Some(TokenStore::default());
    }
}

/// Parses text holding exactly one atom, using the default Tokenizer.
pub fn parse_atom<S: AsRef<str>>(text: S) -> Result<Atom, Error> {
    let tokenizer = Tokenizer::default();
    let mut parser = SExprParser::new(text.as_ref());
    let atom = match parser.parse(&tokenizer)? {
        Some(atom) => atom,
        None => {
            return err!(Parse(ParseError {
                reason: NoAtom,
                line: 0,
                col: 0,
            }))
        }
    };

    // Anything other than comments past the first atom is an error.
    if let Some(tokens) = parser.tokens.as_mut() {
        if let Some(extra) = tokens
            .drain(..)
            .find(|token| !matches!(token.kind(), TokenKind::Comment(_)))
        {
            return err!(Parse(ParseError {
                reason: TrailingInput,
                line: *extra.line(),
                col: *extra.col(),
            }));
        }
    }
    Ok(atom)
}


impl ParseError {
    pub fn reason(&self) -> &ParseErrorReason {
        &self.reason
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn col(&self) -> usize {
        self.col
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Parse Error] {:?} @ ({}, {})",
            self.reason, self.line, self.col
        )
    }
}


#[cfg(test)]
#[path = "./parser_test.rs"]
mod parser_test;
