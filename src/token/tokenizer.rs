//! Module for breaking atom text into tokens.
//!
//! Delimiters, string literals and variables are recognized lexically. Any
//! other token is offered to the registered token constructors, most recently
//! registered first, and becomes a symbol if none of them matches.

use std::collections::VecDeque;
use std::fmt;

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use super::token::{Token, TokenKind};
use crate::atom::name_policies::{policy_base, NameError, NamePolicy, VARIABLE_MARKER};
use crate::atom::{Atom, Bool, Number, Str};

use self::LexerState::*;


lazy_static! {
    // ASCII digits only; other Unicode digits make plain symbols.
    static ref INTEGER: Regex = Regex::new(r"^[+-]?[0-9]+$").unwrap();
    static ref FLOAT: Regex =
        Regex::new(r"^[+-]?([0-9]+\.[0-9]+([eE][+-]?[0-9]+)?|[0-9]+[eE][+-]?[0-9]+)$").unwrap();
    static ref BOOL: Regex = Regex::new(r"^(True|False)$").unwrap();
}

pub type TokenStore = VecDeque<Token>;

/// Builds the atom for a token matched by a registered pattern.
pub type TokenConstructor = Box<dyn Fn(&str) -> Result<Atom, String> + Send + Sync>;

/// Registry of token patterns plus the name policy for symbols/variables.
///
/// Tokenizing does not mutate the Tokenizer, so one can be shared by many
/// parsers.
pub struct Tokenizer {
    name_policy: NamePolicy,
    constructors: Vec<(Regex, TokenConstructor)>,
}

/// Essentially a Mealy machine that accumulates Tokens given lines of input.
struct Lexer<'t> {
    tokenizer: &'t Tokenizer,
    state: LexerState,
    line_count: usize,
    tokens: TokenStore,
}

#[derive(Debug)]
enum LexerState {
    Base,
    // (String accumulated from prev lines, (line, col) of opening quote).
    InString(String, (usize, usize)),
    InStringEscaped(String, (usize, usize)),
}


#[derive(Debug)]
pub struct TokenizeError {
    line: usize,
    col: usize,
    kind: TokenizeErrorKind,
}

#[derive(Debug)]
pub enum TokenizeErrorKind {
    InvalidName(NameError),
    Constructor { token: String, reason: String },
    UnterminatedString,
}


impl Tokenizer {
    /// Tokenizer without any registered token; every non-string token
    /// becomes a symbol or variable.
    pub fn new(name_policy: NamePolicy) -> Self {
        Self {
            name_policy,
            constructors: Vec::new(),
        }
    }

    /// Tokenizer with Number, Bool and the given policy.
    pub fn with_defaults(name_policy: NamePolicy) -> Self {
        let mut tokenizer = Self::new(name_policy);
        tokenizer.register_regex(INTEGER.clone(), |s| {
            s.parse::<Number>()
                .map(Atom::from)
                .map_err(|err| err.to_string())
        });
        tokenizer.register_regex(FLOAT.clone(), |s| {
            s.parse::<f64>()
                .map(|f| Atom::from(Number::Float(f)))
                .map_err(|err| err.to_string())
        });
        tokenizer.register_regex(BOOL.clone(), |s| {
            Bool::from_token(s)
                .map(Atom::from)
                .ok_or_else(|| format!("not a Bool: \"{}\"", s))
        });
        tokenizer
    }

    pub fn name_policy(&self) -> NamePolicy {
        self.name_policy
    }

    /// Registers constructor for tokens fully matching pattern.
    pub fn register_token<F>(&mut self, pattern: &str, constructor: F) -> Result<(), regex::Error>
    where
        F: Fn(&str) -> Result<Atom, String> + Send + Sync + 'static,
    {
        let regex = Regex::new(&format!("^(?:{})$", pattern))?;
        self.register_regex(regex, constructor);
        Ok(())
    }

    /// Like register_token, but regex is used as given (so it should be
    /// anchored).
    pub fn register_regex<F>(&mut self, regex: Regex, constructor: F)
    where
        F: Fn(&str) -> Result<Atom, String> + Send + Sync + 'static,
    {
        self.constructors.push((regex, Box::new(constructor)));
    }

    /// Most recently registered constructor matching token.
    pub fn find_token(&self, token: &str) -> Option<&TokenConstructor> {
        self.constructors
            .iter()
            .rev()
            .find(|(regex, _)| regex.is_match(token))
            .map(|(_, constructor)| constructor)
    }

    pub fn tokenize<S: AsRef<str>>(&self, input: S) -> Result<TokenStore, TokenizeError> {
        let mut lexer = Lexer::new(self);
        for line in input.as_ref().split('\n') {
            lexer.tokenize_line(line)?;
        }
        lexer.finish()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::with_defaults(policy_base)
    }
}

/// Number of expressions left open at the end of input, plus one if a string
/// literal is unterminated. Used to decide whether more input is needed.
pub fn open_depth<S: AsRef<str>>(input: S) -> usize {
    let mut depth: usize = 0;
    let mut in_string = false;
    let mut escaped = false;
    for line in input.as_ref().split('\n') {
        for c in line.chars() {
            if in_string {
                match (escaped, c) {
                    (true, _) => escaped = false,
                    (false, '\\') => escaped = true,
                    (false, '"') => in_string = false,
                    _ => {}
                }
                continue;
            }
            match c {
                ';' => break,
                '"' => in_string = true,
                '(' => depth += 1,
                ')' => depth = depth.saturating_sub(1),
                _ => {}
            }
        }
        escaped = false;
    }
    depth + in_string as usize
}


impl<'t> Lexer<'t> {
    fn new(tokenizer: &'t Tokenizer) -> Self {
        Self {
            tokenizer,
            state: Base,
            line_count: 0,
            tokens: Default::default(),
        }
    }

    fn finish(self) -> Result<TokenStore, TokenizeError> {
        match self.state {
            Base => Ok(self.tokens),
            InString(_, (line, col)) | InStringEscaped(_, (line, col)) => Err(TokenizeError {
                line,
                col,
                kind: TokenizeErrorKind::UnterminatedString,
            }),
        }
    }

    fn tokenize_line(&mut self, l: &str) -> Result<(), TokenizeError> {
        let mut start: usize = 0;
        let mut empty = true;
        for (i, c) in l.char_indices() {
            match &mut self.state {
                Base => {
                    if c.is_whitespace() {
                        if !empty {
                            self.push_token(&l[start..i], start)?;
                            empty = true;
                        }
                        continue;
                    } else if c == ';' {
                        if !empty {
                            self.push_token(&l[start..i], start)?;
                        }
                        self.push(TokenKind::Comment(l[i + 1..].to_string()), i);
                        break;
                    }

                    match c {
                        '(' | ')' => {
                            if !empty {
                                self.push_token(&l[start..i], start)?;
                                empty = true;
                            }
                            let kind = if c == '(' {
                                TokenKind::LeftParen
                            } else {
                                TokenKind::RightParen
                            };
                            self.push(kind, i);
                        }
                        '"' => {
                            if !empty {
                                self.push_token(&l[start..i], start)?;
                                empty = true;
                            }
                            start = i + 1;
                            self.state = InString(String::default(), (self.line_count, i));
                        }
                        _ => {
                            if empty {
                                empty = false;
                                start = i;
                            }
                        }
                    }
                }
                InString(s, pos) => {
                    if empty {
                        empty = false;
                        start = i;
                    }
                    match c {
                        '\\' => {
                            s.push_str(&l[start..i]);
                            let curr_str = std::mem::take(s);
                            self.state = InStringEscaped(curr_str, *pos);
                        }
                        '"' => {
                            s.push_str(&l[start..i]);
                            let (line, col) = *pos;
                            let atom = Atom::from(Str::new(s.as_str()));
                            self.tokens
                                .push_back(Token::new(TokenKind::Atom(atom), line, col));

                            self.state = Base;
                            empty = true;
                        }
                        _ => {}
                    }
                }
                InStringEscaped(s, pos) => {
                    s.push(Str::unescape_char(c));

                    empty = true;
                    let curr_str = std::mem::take(s);
                    self.state = InString(curr_str, *pos);
                }
            }
        }

        // EOL handling.
        match &mut self.state {
            InString(s, ..) => {
                if !empty {
                    s.push_str(&l[start..]);
                }
                s.push('\n');
            }
            InStringEscaped(s, pos) => {
                // \ followed by EOL simply means ignore the newline.
                let curr_str = std::mem::take(s);
                self.state = InString(curr_str, *pos);
            }
            Base => {
                if !empty {
                    self.push_token(&l[start..], start)?;
                }
            }
        }

        self.line_count += 1;
        Ok(())
    }

    fn push(&mut self, kind: TokenKind, col: usize) {
        self.tokens.push_back(Token::new(kind, self.line_count, col));
    }

    fn push_token(&mut self, ptoken: &str, start: usize) -> Result<(), TokenizeError> {
        trace!("token {:?} @ ({}, {})", ptoken, self.line_count, start);
        let atom = if let Some(name) = ptoken.strip_prefix(VARIABLE_MARKER) {
            self.check_name(name, start)?;
            Atom::var_unchecked(name)
        } else if let Some(constructor) = self.tokenizer.find_token(ptoken) {
            constructor(ptoken).map_err(|reason| {
                self.error(
                    start,
                    TokenizeErrorKind::Constructor {
                        token: ptoken.to_string(),
                        reason,
                    },
                )
            })?
        } else {
            self.check_name(ptoken, start)?;
            Atom::sym_unchecked(ptoken)
        };

        self.push(TokenKind::Atom(atom), start);
        Ok(())
    }

    fn check_name(&self, name: &str, col: usize) -> Result<(), TokenizeError> {
        (self.tokenizer.name_policy)(name)
            .map_err(|err| self.error(col, TokenizeErrorKind::InvalidName(err)))
    }

    fn error(&self, col: usize, kind: TokenizeErrorKind) -> TokenizeError {
        TokenizeError {
            line: self.line_count,
            col,
            kind,
        }
    }
}


impl TokenizeError {
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn kind(&self) -> &TokenizeErrorKind {
        &self.kind
    }
}

impl fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Tokenize Error] ")?;
        match &self.kind {
            TokenizeErrorKind::InvalidName(err) => write!(f, "Invalid name: {}", err),
            TokenizeErrorKind::Constructor { token, reason } => {
                write!(f, "Could not construct \"{}\": {}", token, reason)
            }
            TokenizeErrorKind::UnterminatedString => write!(f, "Unterminated string"),
        }?;
        write!(f, " @ ({}, {})", self.line, self.col)
    }
}


#[cfg(test)]
#[path = "./tokenizer_test.rs"]
mod tokenizer_test;
