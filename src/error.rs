//! Representation of errors raised while building, rendering or parsing atoms.
//!
//! Every failure is local and synchronous: it is returned from the call that
//! caused it. Errors can be reified into atoms so that a host can store or
//! display them with the same machinery as any other atom.

use std::convert::TryFrom;
use std::fmt;
use std::io;

use self::ErrKind::*;
use crate::atom::name_policies::NameError;
use crate::atom::{Atom, ExpressionAtom, Number, Str};
use crate::parser::ParseError;
use crate::render::SinkError;
use crate::token::TokenizeError;


#[derive(Debug)]
pub struct Error {
    kind: ErrKind,
}

#[derive(Debug)]
pub enum ErrKind {
    /// Malformed symbol or variable name.
    InvalidName(NameError),
    /// Builder argument that could not be converted to an atom.
    InvalidArgument { position: usize, reason: String },
    /// Sink refused a chunk because it is full.
    SinkOverflow { capacity: usize },
    /// Sink (or a grounded renderer) failed for a reason other than capacity.
    WriteFailed(io::Error),
    /// Nesting deeper than the configured limit.
    ResourceExhausted { depth: usize, limit: usize },
    Tokenize(TokenizeError),
    Parse(ParseError),
}


impl Error {
    /// Prefer using err! for convenience.
    pub fn new(kind: ErrKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> &ErrKind {
        &self.kind
    }

    pub fn consume(self) -> ErrKind {
        self.kind
    }

    /// Short name of the error kind; also the second element of reify().
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            InvalidName(_) => "InvalidName",
            InvalidArgument { .. } => "InvalidArgument",
            SinkOverflow { .. } => "SinkOverflow",
            WriteFailed(_) => "WriteFailed",
            ResourceExhausted { .. } => "ResourceExhausted",
            Tokenize(_) => "TokenizeError",
            Parse(_) => "ParseError",
        }
    }

    /// Represents the Error as an atom, e.g. (Error InvalidName "has space").
    pub fn reify(&self) -> Atom {
        let mut children = vec![
            Atom::sym_unchecked("Error"),
            Atom::sym_unchecked(self.kind_name()),
        ];
        match &self.kind {
            InvalidName(err) => children.push(Atom::gnd(Str::new(err.name()))),
            InvalidArgument { position, reason } => {
                children.push(count_atom(*position));
                children.push(Atom::gnd(Str::new(reason)));
            }
            SinkOverflow { capacity } => children.push(count_atom(*capacity)),
            WriteFailed(err) => children.push(Atom::gnd(Str::new(err.to_string()))),
            ResourceExhausted { depth, limit } => {
                children.push(count_atom(*depth));
                children.push(count_atom(*limit));
            }
            Tokenize(err) => children.push(Atom::gnd(Str::new(err.to_string()))),
            Parse(err) => children.push(Atom::gnd(Str::new(err.to_string()))),
        }
        Atom::Expression(ExpressionAtom::new(children))
    }
}

fn count_atom(n: usize) -> Atom {
    Atom::gnd(Number::Integer(i64::try_from(n).unwrap_or(i64::MAX)))
}


impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Atom Error] ")?;
        match &self.kind {
            InvalidName(err) => write!(f, "Invalid name: {}", err),
            InvalidArgument { position, reason } => {
                write!(f, "Invalid argument at position {}: {}", position, reason)
            }
            SinkOverflow { capacity } => {
                write!(f, "Sink overflow: capacity of {} bytes exceeded", capacity)
            }
            WriteFailed(err) => write!(f, "Write failed: {}", err),
            ResourceExhausted { depth, limit } => write!(
                f,
                "Resource exhausted: nesting depth {} exceeds limit {}",
                depth, limit
            ),
            Tokenize(err) => write!(f, "{}", err),
            Parse(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            WriteFailed(err) => Some(err),
            _ => None,
        }
    }
}

impl PartialEq for Error {
    /// Compare reified kinds.
    fn eq(&self, other: &Self) -> bool {
        self.reify() == other.reify()
    }
}

impl From<NameError> for Error {
    fn from(err: NameError) -> Self {
        Error::new(InvalidName(err))
    }
}

impl From<SinkError> for Error {
    fn from(err: SinkError) -> Self {
        match err {
            SinkError::Overflow { capacity } => Error::new(SinkOverflow { capacity }),
            SinkError::Io(io_err) => Error::new(WriteFailed(io_err)),
            SinkError::Fmt => Error::new(WriteFailed(io::Error::new(
                io::ErrorKind::Other,
                "formatter error",
            ))),
        }
    }
}

impl From<TokenizeError> for Error {
    fn from(err: TokenizeError) -> Self {
        Error::new(Tokenize(err))
    }
}


#[cfg(test)]
#[path = "./error_test.rs"]
mod error_test;
