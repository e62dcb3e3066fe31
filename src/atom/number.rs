//! Representation of grounded numbers.

use std::any::Any;
use std::{fmt, str};

use serde::{Deserialize, Serialize};

use self::Number::*;
use super::{Atom, GroundedAtom, GroundedValue};


pub const NUMBER_TYPE: &str = "Number";

#[derive(Clone, Copy, Deserialize, Serialize)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

#[derive(Debug)]
pub struct ParseNumberError(String);


impl Number {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Integer(i) => Some(*i),
            Float(_) => None,
        }
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            Integer(i) => *i as f64,
            Float(f) => *f,
        }
    }
}


impl str::FromStr for Number {
    type Err = ParseNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let integer = s.parse::<i64>();
        if let Ok(int) = integer {
            return Ok(Integer(int));
        }

        let float = s.parse::<f64>();
        if let Ok(f) = float {
            return Ok(Float(f));
        }

        Err(ParseNumberError(s.to_string()))
    }
}

impl PartialEq for Number {
    // Floats compare by total order so that Number (and so Atom) is Eq.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Integer(a), Integer(b)) => a == b,
            (Float(a), Float(b)) => a.total_cmp(b) == std::cmp::Ordering::Equal,
            _ => false,
        }
    }
}

impl Eq for Number {}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Integer(val) => write!(f, "{}", val),
            Float(val) => {
                let s = val.to_string();
                // Keep a decimal point so the text reads back as a Float.
                if val.is_finite() && !s.contains('.') {
                    write!(f, "{}.0", s)
                } else {
                    write!(f, "{}", s)
                }
            }
        }
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Integer(val) => write!(f, "{}i64", val),
            Float(val) => write!(f, "{}f64", val),
        }
    }
}

impl fmt::Display for ParseNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a number: \"{}\"", self.0)
    }
}

impl GroundedValue for Number {
    fn type_(&self) -> Atom {
        Atom::sym_unchecked(NUMBER_TYPE)
    }

    fn eq_gnd(&self, other: &dyn GroundedValue) -> bool {
        match other.as_any().downcast_ref::<Number>() {
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

impl From<i64> for Number {
    fn from(val: i64) -> Self {
        Integer(val)
    }
}

impl From<f64> for Number {
    fn from(val: f64) -> Self {
        Float(val)
    }
}

impl From<Number> for Atom {
    fn from(num: Number) -> Self {
        Atom::Grounded(GroundedAtom::new(num))
    }
}
