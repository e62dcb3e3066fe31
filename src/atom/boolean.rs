use std::any::Any;
use std::fmt;

use super::{Atom, GroundedAtom, GroundedValue};


pub const BOOL_TYPE: &str = "Bool";

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Bool(pub bool);

impl Bool {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "True" => Some(Bool(true)),
            "False" => Some(Bool(false)),
            _ => None,
        }
    }
}

impl fmt::Display for Bool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 {
            write!(f, "True")
        } else {
            write!(f, "False")
        }
    }
}

impl GroundedValue for Bool {
    fn type_(&self) -> Atom {
        Atom::sym_unchecked(BOOL_TYPE)
    }

    fn eq_gnd(&self, other: &dyn GroundedValue) -> bool {
        match other.as_any().downcast_ref::<Bool>() {
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

impl From<Bool> for Atom {
    fn from(b: Bool) -> Self {
        Atom::Grounded(GroundedAtom::new(b))
    }
}
