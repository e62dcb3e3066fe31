//! Policies deciding which strings may name a symbol or variable.
//!
//! A policy only has to keep names representable in the textual grammar:
//! a name must survive rendering and re-tokenizing as a single token.

use std::fmt;


/// Marker that introduces a variable in the textual grammar.
pub const VARIABLE_MARKER: char = '$';

pub type NamePolicy = fn(&str) -> Result<(), NameError>;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum NameError {
    Empty,
    ForbiddenChar(String, char),
    VariableMarkerPrefix(String),
    NonAscii(String),
}


/// Default policy; any Unicode is fine outside of grammar delimiters.
pub fn policy_base(s: &str) -> Result<(), NameError> {
    if s.is_empty() {
        return Err(NameError::Empty);
    }
    if s.starts_with(VARIABLE_MARKER) {
        return Err(NameError::VariableMarkerPrefix(s.to_string()));
    }
    match s.chars().find(|c| is_delimiter(*c)) {
        Some(c) => Err(NameError::ForbiddenChar(s.to_string(), c)),
        None => Ok(()),
    }
}

/// policy_base restricted to printable ASCII.
pub fn policy_ascii(s: &str) -> Result<(), NameError> {
    policy_base(s)?;
    if s.chars().all(|c| c.is_ascii_graphic()) {
        Ok(())
    } else {
        Err(NameError::NonAscii(s.to_string()))
    }
}

/// Characters that end a token in the textual grammar.
pub(crate) fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || c.is_control() || matches!(c, '(' | ')' | '"' | ';')
}


impl NameError {
    /// The offending name, or "" for an empty one.
    pub fn name(&self) -> &str {
        match self {
            NameError::Empty => "",
            NameError::ForbiddenChar(name, _)
            | NameError::VariableMarkerPrefix(name)
            | NameError::NonAscii(name) => name.as_str(),
        }
    }
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameError::Empty => write!(f, "empty name"),
            NameError::ForbiddenChar(name, c) => {
                write!(f, "\"{}\" contains forbidden character {:?}", name, c)
            }
            NameError::VariableMarkerPrefix(name) => write!(
                f,
                "\"{}\" starts with the variable marker '{}'",
                name, VARIABLE_MARKER
            ),
            NameError::NonAscii(name) => write!(f, "\"{}\" is not printable ASCII", name),
        }
    }
}
