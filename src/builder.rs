//! Module for constructing expression atoms from ordered, heterogeneous
//! arguments.
//!
//! Each argument is either an atom, shared as is, or a literal converted on
//! push: text becomes a symbol, numbers and bools become grounded atoms.
//! finish() terminates the argument list; until then nothing is built.

use std::convert::TryFrom;

use log::{debug, trace};

use crate::atom::{policy_base, Atom, Bool, ExpressionAtom, NamePolicy, Number};
use crate::error::{ErrKind, Error};
use crate::limits::Limits;


/// Builds an expression atom from its arguments; evaluates to
/// Result<Atom, Error>.
///
/// Arguments may be anything Into<Arg>, including the result of a nested
/// expr!, whose failure then fails the outer expression.
///
/// Example:
///   expr!("foo", expr!("bar", "baz"), 42, Atom::var("x")?)
#[macro_export]
macro_rules! expr {
    ($($arg:expr),* $(,)?) => {
        $crate::builder::ExprBuilder::new()
            $(.push($arg))*
            .finish()
    };
}


/// Single builder argument.
#[derive(Debug)]
pub enum Arg {
    Atom(Atom),
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// Argument whose own construction already failed.
    Failed(String),
}

pub struct ExprBuilder {
    children: Vec<Atom>,
    failure: Option<Error>,
    position: usize,

    limits: Limits,
    policy: NamePolicy,
}


impl ExprBuilder {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            failure: None,
            position: 0,

            limits: Limits::default(),
            policy: policy_base,
        }
    }

    pub fn limits(&mut self, limits: Limits) -> &mut Self {
        self.limits = limits;
        self
    }

    /// Policy used to validate text arguments.
    pub fn name_policy(&mut self, policy: NamePolicy) -> &mut Self {
        self.policy = policy;
        self
    }

    /// Appends the next argument; conversion happens now, but a failure only
    /// surfaces from finish().
    pub fn push<A: Into<Arg>>(&mut self, arg: A) -> &mut Self {
        let position = self.position;
        self.position += 1;
        if self.failure.is_some() {
            return self;
        }

        match self.convert(arg.into()) {
            Ok(atom) => self.children.push(atom),
            Err(reason) => {
                debug!("expression argument {} rejected: {}", position, reason);
                self.failure = Some(Error::new(ErrKind::InvalidArgument { position, reason }));
            }
        }
        self
    }

    pub fn extend<I, A>(&mut self, args: I) -> &mut Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Arg>,
    {
        for arg in args {
            self.push(arg);
        }
        self
    }

    /// Terminates the argument list and builds the expression.
    ///
    /// Resets the builder, so it can be reused for another expression with
    /// the same configuration.
    pub fn finish(&mut self) -> Result<Atom, Error> {
        let children = std::mem::take(&mut self.children);
        self.position = 0;
        if let Some(failure) = self.failure.take() {
            return Err(failure);
        }

        let expr = ExpressionAtom::new(children);
        if !self.limits.allows(expr.depth()) {
            debug!(
                "expression depth {} exceeds limit {}",
                expr.depth(),
                self.limits.max_depth
            );
            return err!(ResourceExhausted {
                depth: expr.depth(),
                limit: self.limits.max_depth,
            });
        }
        trace!("built expression of {} children", expr.len());
        Ok(Atom::Expression(expr))
    }

    fn convert(&self, arg: Arg) -> Result<Atom, String> {
        match arg {
            Arg::Atom(atom) => Ok(atom),
            Arg::Text(text) => Atom::sym_with(&text, self.policy).map_err(|err| err.to_string()),
            Arg::Integer(i) => Ok(Number::Integer(i).into()),
            Arg::Float(f) => Ok(Number::Float(f).into()),
            Arg::Bool(b) => Ok(Bool(b).into()),
            Arg::Failed(reason) => Err(reason),
        }
    }
}

impl Default for ExprBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds an expression from args under the default configuration.
pub fn build_expression<I, A>(args: I) -> Result<Atom, Error>
where
    I: IntoIterator<Item = A>,
    A: Into<Arg>,
{
    ExprBuilder::new().extend(args).finish()
}


impl From<Atom> for Arg {
    fn from(atom: Atom) -> Self {
        Arg::Atom(atom)
    }
}

impl<'a> From<&'a Atom> for Arg {
    fn from(atom: &'a Atom) -> Self {
        Arg::Atom(atom.clone())
    }
}

impl<'a> From<&'a str> for Arg {
    fn from(text: &'a str) -> Self {
        Arg::Text(text.to_string())
    }
}

impl From<String> for Arg {
    fn from(text: String) -> Self {
        Arg::Text(text)
    }
}

impl<'a> From<&'a String> for Arg {
    fn from(text: &'a String) -> Self {
        Arg::Text(text.clone())
    }
}

impl From<bool> for Arg {
    fn from(b: bool) -> Self {
        Arg::Bool(b)
    }
}

impl From<Result<Atom, Error>> for Arg {
    fn from(result: Result<Atom, Error>) -> Self {
        match result {
            Ok(atom) => Arg::Atom(atom),
            Err(err) => Arg::Failed(err.to_string()),
        }
    }
}

// Impl From<T> for lossless integer literals.
macro_rules! arg_from_int {
    ($($type:ident),+ $(,)?) => {
        $(
            impl From<$type> for Arg {
                fn from(i: $type) -> Self {
                    Arg::Integer(i64::from(i))
                }
            }
        )+
    };
}

arg_from_int!(i8, i16, i32, i64, u8, u16, u32);

// Impl From<T> for integer literals which may not fit an i64.
macro_rules! arg_try_from_int {
    ($($type:ident),+ $(,)?) => {
        $(
            impl From<$type> for Arg {
                fn from(i: $type) -> Self {
                    match i64::try_from(i) {
                        Ok(i) => Arg::Integer(i),
                        Err(_) => Arg::Failed(format!(
                            "{} {} does not fit a Number", stringify!($type), i
                        )),
                    }
                }
            }
        )+
    };
}

arg_try_from_int!(u64, usize, isize);

impl From<f32> for Arg {
    fn from(f: f32) -> Self {
        Arg::Float(f64::from(f))
    }
}

impl From<f64> for Arg {
    fn from(f: f64) -> Self {
        Arg::Float(f)
    }
}


#[cfg(test)]
#[path = "./builder_test.rs"]
mod builder_test;
