use std::any::Any;
use std::fmt;

use super::{Atom, GroundedAtom, GroundedValue};


pub const STRING_TYPE: &str = "String";

/// Grounded text; renders double-quoted so it may hold any character.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Str(String);

impl Str {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_string())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Inverse of the escaping done by Display, for the char after a '\'.
    pub fn unescape_char(c: char) -> char {
        match c {
            'n' => '\n',
            't' => '\t',
            'r' => '\r',
            '0' => '\0',
            _ => c,
        }
    }
}


impl fmt::Display for Str {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"")?;
        for c in self.0.chars() {
            match c {
                '"' => write!(f, "\\\"")?,
                '\\' => write!(f, "\\\\")?,
                '\n' => write!(f, "\\n")?,
                '\t' => write!(f, "\\t")?,
                '\r' => write!(f, "\\r")?,
                '\0' => write!(f, "\\0")?,
                _ => write!(f, "{}", c)?,
            }
        }
        write!(f, "\"")
    }
}

impl GroundedValue for Str {
    fn type_(&self) -> Atom {
        Atom::sym_unchecked(STRING_TYPE)
    }

    fn eq_gnd(&self, other: &dyn GroundedValue) -> bool {
        match other.as_any().downcast_ref::<Str>() {
            Some(other) => self == other,
            None => false,
        }
    }

    fn render(&self, w: &mut dyn fmt::Write) -> fmt::Result {
        write!(w, "{}", self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl From<Str> for Atom {
    fn from(s: Str) -> Self {
        Atom::Grounded(GroundedAtom::new(s))
    }
}
