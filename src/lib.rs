//! Atoms, expression building and text rendering for a symbolic knowledge
//! representation.
//!
//! Atoms are built through the constructors on Atom or with expr!, rendered
//! into any Sink, and parsed back from text with SExprParser.
//!
//! Note that this crate does *not* setup logging; clients should take care of
//! that themselves. See:
//!   https://github.com/rust-lang/log#in-executables.

#[macro_use]
mod error_helpers;

pub mod atom;
pub mod builder;
pub mod error;
pub mod limits;
pub mod parser;
pub mod render;
pub mod std_error;
pub mod token;

pub mod prelude {
    pub use crate::atom::{
        policy_ascii, policy_base, Atom, Bool, ExpressionAtom, GroundedAtom, GroundedValue,
        Number, Str, SymbolAtom, VariableAtom,
    };
    pub use crate::builder::{build_expression, Arg, ExprBuilder};
    pub use crate::error::{ErrKind, Error};
    pub use crate::limits::Limits;
    pub use crate::parser::{parse_atom, SExprParser};
    pub use crate::render::{atom_to_str, render, BoundedBuf, Renderer, Sink, SinkError};
    pub use crate::token::Tokenizer;
    // Macros.
    pub use crate::expr;
}
