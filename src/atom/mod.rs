//! Representation of atoms.
//!
//! Atoms are immutable once built. Names, expression children and grounded
//! payloads sit behind an Arc, so cloning an atom shares its subtrees rather than
//! copying them, and shared subtrees may be read from any thread.

use std::convert::TryFrom;
use std::fmt;
use std::sync::Arc;

use crate::error::Error;
use crate::limits::Limits;
use crate::render::{FormatterSink, Renderer};

pub mod boolean;
pub mod grounded;
pub mod name_policies;
pub mod number;
pub mod string;

pub use self::boolean::Bool;
pub use self::grounded::{display_renderer, GroundedAtom, GroundedValue, HostValue, RenderFn};
pub use self::name_policies::{policy_ascii, policy_base, NameError, NamePolicy};
pub use self::number::Number;
pub use self::string::Str;


#[derive(Clone, Eq, PartialEq)]
pub enum Atom {
    Symbol(SymbolAtom),
    Variable(VariableAtom),
    Grounded(GroundedAtom),
    Expression(ExpressionAtom),
}

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SymbolAtom {
    name: Arc<str>,
}

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct VariableAtom {
    name: Arc<str>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExpressionAtom {
    children: Arc<[Atom]>,
    depth: usize,
}


impl Atom {
    /// Symbol named by name, validated by policy_base.
    pub fn sym<S: AsRef<str>>(name: S) -> Result<Atom, Error> {
        Self::sym_with(name, policy_base)
    }

    pub fn sym_with<S: AsRef<str>>(name: S, policy: NamePolicy) -> Result<Atom, Error> {
        policy(name.as_ref())?;
        Ok(Self::sym_unchecked(name))
    }

    /// For names known to satisfy every policy, like type names.
    pub(crate) fn sym_unchecked<S: AsRef<str>>(name: S) -> Atom {
        Atom::Symbol(SymbolAtom {
            name: name.as_ref().into(),
        })
    }

    /// Variable named by name (without the '$' marker).
    pub fn var<S: AsRef<str>>(name: S) -> Result<Atom, Error> {
        Self::var_with(name, policy_base)
    }

    pub fn var_with<S: AsRef<str>>(name: S, policy: NamePolicy) -> Result<Atom, Error> {
        policy(name.as_ref())?;
        Ok(Self::var_unchecked(name))
    }

    pub(crate) fn var_unchecked<S: AsRef<str>>(name: S) -> Atom {
        Atom::Variable(VariableAtom {
            name: name.as_ref().into(),
        })
    }

    /// Grounded atom wrapping a host value and the function that renders it.
    pub fn grounded<T>(value: T, renderer: RenderFn<T>) -> Atom
    where
        T: PartialEq + fmt::Debug + Send + Sync + 'static,
    {
        Atom::Grounded(GroundedAtom::new(HostValue::new(value, renderer)))
    }

    /// Grounded atom rendered through the value's Display impl.
    pub fn value<T>(value: T) -> Atom
    where
        T: fmt::Display + PartialEq + fmt::Debug + Send + Sync + 'static,
    {
        Self::grounded(value, display_renderer::<T>)
    }

    /// Grounded atom from a custom GroundedValue impl.
    pub fn gnd<G: GroundedValue>(value: G) -> Atom {
        Atom::Grounded(GroundedAtom::new(value))
    }

    /// Expression of children, guarded by the default Limits.
    ///
    /// See builder::ExprBuilder for construction from literals.
    pub fn expr<I: IntoIterator<Item = Atom>>(children: I) -> Result<Atom, Error> {
        Self::expr_with(children, Limits::default())
    }

    pub fn expr_with<I: IntoIterator<Item = Atom>>(
        children: I,
        limits: Limits,
    ) -> Result<Atom, Error> {
        let expr = ExpressionAtom::new(children.into_iter().collect());
        if !limits.allows(expr.depth) {
            return err!(ResourceExhausted {
                depth: expr.depth,
                limit: limits.max_depth,
            });
        }
        Ok(Atom::Expression(expr))
    }

    pub fn as_symbol(&self) -> Option<&SymbolAtom> {
        <&SymbolAtom>::try_from(self).ok()
    }

    pub fn as_variable(&self) -> Option<&VariableAtom> {
        <&VariableAtom>::try_from(self).ok()
    }

    pub fn as_grounded(&self) -> Option<&GroundedAtom> {
        <&GroundedAtom>::try_from(self).ok()
    }

    pub fn as_expr(&self) -> Option<&ExpressionAtom> {
        <&ExpressionAtom>::try_from(self).ok()
    }

    /// Downcast of a grounded payload to the host type T.
    pub fn as_gnd<T: 'static>(&self) -> Option<&T> {
        self.as_grounded()?.downcast_ref::<T>()
    }

    /// Children of an expression; empty for every other variant.
    pub fn children(&self) -> &[Atom] {
        match self {
            Atom::Expression(expr) => expr.children(),
            _ => &[],
        }
    }

    /// Expression nesting depth; 0 for leaves.
    pub fn depth(&self) -> usize {
        match self {
            Atom::Expression(expr) => expr.depth,
            _ => 0,
        }
    }
}

impl SymbolAtom {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl VariableAtom {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl ExpressionAtom {
    /// Unchecked against Limits; depth is computed here once and cached.
    pub(crate) fn new(children: Vec<Atom>) -> Self {
        let depth = 1 + children.iter().map(Atom::depth).max().unwrap_or(0);
        Self {
            children: children.into(),
            depth,
        }
    }

    pub fn children(&self) -> &[Atom] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// True if no child is itself an expression.
    pub fn is_plain(&self) -> bool {
        self.children
            .iter()
            .all(|atom| !matches!(atom, Atom::Expression(_)))
    }
}


impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Already built under some limit; no need to guard again.
        match Renderer::with_limits(Limits::unbounded()).render(self, &mut FormatterSink::new(f)) {
            Ok(()) => Ok(()),
            Err(_) => Err(fmt::Error),
        }
    }
}

impl fmt::Debug for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self, f)
    }
}

impl fmt::Display for SymbolAtom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for VariableAtom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", name_policies::VARIABLE_MARKER, self.name)
    }
}


// TryFrom<&Atom> impls.
macro_rules! atom_try_from {
    ($($variant:ident : $type:ident),+ $(,)?) => {
        $(
            impl<'a> TryFrom<&'a Atom> for &'a $type {
                type Error = &'a Atom;

                fn try_from(value: &'a Atom) -> Result<Self, Self::Error> {
                    if let Atom::$variant(inner) = value {
                        Ok(inner)
                    } else {
                        Err(value)
                    }
                }
            }

            impl TryFrom<Atom> for $type {
                type Error = Atom;

                fn try_from(value: Atom) -> Result<Self, Self::Error> {
                    if let Atom::$variant(inner) = value {
                        Ok(inner)
                    } else {
                        Err(value)
                    }
                }
            }

            impl From<$type> for Atom {
                fn from(inner: $type) -> Self {
                    Atom::$variant(inner)
                }
            }
        )+
    };
}

atom_try_from!(
    Symbol: SymbolAtom,
    Variable: VariableAtom,
    Grounded: GroundedAtom,
    Expression: ExpressionAtom,
);


#[cfg(test)]
#[path = "./atom_test.rs"]
mod atom_test;
