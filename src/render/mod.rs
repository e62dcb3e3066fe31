//! Rendering of atoms into their canonical text.
//!
//! Grammar:
//!   symbol      name
//!   variable    $name
//!   grounded    whatever the value's renderer writes
//!   expression  ( child child ... )   with exactly one space between children
//!
//! Output goes to a Sink incrementally; nothing is buffered here.

use std::fmt;
use std::io;

use log::trace;

use crate::atom::name_policies::VARIABLE_MARKER;
use crate::atom::{Atom, GroundedAtom};
use crate::error::Error;
use crate::limits::Limits;

pub mod fmt_adapter;
pub mod sink;

pub use self::fmt_adapter::{FormatterSink, SinkWriter};
pub use self::sink::{BoundedBuf, FnSink, IoSink, Sink, SinkError};


#[derive(Clone, Copy, Debug, Default)]
pub struct Renderer {
    limits: Limits,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: Limits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Writes the canonical text of atom to sink.
    ///
    /// Stops at the first chunk the sink rejects; chunks it accepted before
    /// that are left in place.
    pub fn render(&self, atom: &Atom, sink: &mut dyn Sink) -> Result<(), Error> {
        let depth = atom.depth();
        if !self.limits.allows(depth) {
            return err!(ResourceExhausted {
                depth,
                limit: self.limits.max_depth,
            });
        }
        trace!("rendering atom of depth {}", depth);
        render_atom(atom, sink)
    }
}

fn render_atom(atom: &Atom, sink: &mut dyn Sink) -> Result<(), Error> {
    match atom {
        Atom::Symbol(sym) => sink.write_chunk(sym.name())?,
        Atom::Variable(var) => {
            let mut marker = [0u8; 4];
            sink.write_chunk(VARIABLE_MARKER.encode_utf8(&mut marker))?;
            sink.write_chunk(var.name())?;
        }
        Atom::Grounded(gnd) => render_grounded(gnd, sink)?,
        Atom::Expression(expr) => {
            sink.write_chunk("(")?;
            for (i, child) in expr.children().iter().enumerate() {
                if i > 0 {
                    sink.write_chunk(" ")?;
                }
                render_atom(child, sink)?;
            }
            sink.write_chunk(")")?;
        }
    }
    Ok(())
}

fn render_grounded(gnd: &GroundedAtom, sink: &mut dyn Sink) -> Result<(), Error> {
    let mut writer = SinkWriter::new(sink);
    let result = gnd.render(&mut writer);
    // A rejected chunk fails rendering even if the renderer ignored it.
    if let Some(sink_err) = writer.take_error() {
        return Err(sink_err.into());
    }
    match result {
        Ok(()) => Ok(()),
        Err(_) => err!(WriteFailed(io::Error::new(
            io::ErrorKind::Other,
            format!("renderer of grounded value {:?} failed", gnd),
        ))),
    }
}


/// Renders atom into sink under the default Limits.
pub fn render(atom: &Atom, sink: &mut dyn Sink) -> Result<(), Error> {
    Renderer::default().render(atom, sink)
}

/// Canonical text of atom as an owned String.
pub fn atom_to_str(atom: &Atom) -> String {
    let mut s = String::new();
    // A String sink never fails and the atom was built under some limit.
    let _ = Renderer::with_limits(Limits::unbounded()).render(atom, &mut s);
    s
}

/// Display helper for an atom rendered under specific Limits.
pub struct Rendered<'a> {
    atom: &'a Atom,
    renderer: Renderer,
}

impl<'a> Rendered<'a> {
    pub fn new(atom: &'a Atom, renderer: Renderer) -> Self {
        Self { atom, renderer }
    }
}

impl<'a> fmt::Display for Rendered<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.renderer.render(self.atom, &mut FormatterSink::new(f)) {
            Ok(()) => Ok(()),
            Err(_) => Err(fmt::Error),
        }
    }
}
