//! Grounded atoms: host values embedded in the atom tree.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use super::Atom;


/// Type of any grounded value that does not name its own.
pub const UNDEFINED_TYPE: &str = "%Undefined%";

/// Produces the canonical text of a host value.
pub type RenderFn<T> = fn(&T, &mut dyn fmt::Write) -> fmt::Result;

/// Host value which can be wrapped into an Atom::Grounded.
///
/// Values are shared between clones of an atom, hence Send + Sync; rendering
/// and comparison must not need mutation.
pub trait GroundedValue: fmt::Debug + Send + Sync + 'static {
    fn type_(&self) -> Atom {
        Atom::sym_unchecked(UNDEFINED_TYPE)
    }

    /// Equality with another grounded value, typically via as_any() downcast.
    fn eq_gnd(&self, other: &dyn GroundedValue) -> bool;

    /// Writes the canonical text of the value.
    fn render(&self, w: &mut dyn fmt::Write) -> fmt::Result;

    fn as_any(&self) -> &dyn Any;
}

#[derive(Clone)]
pub struct GroundedAtom {
    value: Arc<dyn GroundedValue>,
}

/// Plain host value paired with the function that renders it.
pub struct HostValue<T> {
    value: T,
    renderer: RenderFn<T>,
}


impl GroundedAtom {
    pub fn new<G: GroundedValue>(value: G) -> Self {
        Self {
            value: Arc::new(value),
        }
    }

    pub fn value(&self) -> &dyn GroundedValue {
        &*self.value
    }

    pub fn type_(&self) -> Atom {
        self.value.type_()
    }

    pub fn render(&self, w: &mut dyn fmt::Write) -> fmt::Result {
        self.value.render(w)
    }

    /// Works both for GroundedValue impls and for values wrapped as HostValue.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        let any = self.value.as_any();
        any.downcast_ref::<T>()
            .or_else(|| any.downcast_ref::<HostValue<T>>().map(|host| &host.value))
    }
}

impl<T> HostValue<T> {
    pub fn new(value: T, renderer: RenderFn<T>) -> Self {
        Self { value, renderer }
    }

    pub fn get(&self) -> &T {
        &self.value
    }
}

/// RenderFn for anything Display.
pub fn display_renderer<T: fmt::Display>(value: &T, w: &mut dyn fmt::Write) -> fmt::Result {
    write!(w, "{}", value)
}


impl PartialEq for GroundedAtom {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.value, &other.value) || self.value.eq_gnd(&*other.value)
    }
}

impl Eq for GroundedAtom {}

impl fmt::Debug for GroundedAtom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.value, f)
    }
}

impl<T> GroundedValue for HostValue<T>
where
    T: PartialEq + fmt::Debug + Send + Sync + 'static,
{
    // Equality ignores the renderer.
    fn eq_gnd(&self, other: &dyn GroundedValue) -> bool {
        match other.as_any().downcast_ref::<Self>() {
            Some(other) => self.value == other.value,
            None => false,
        }
    }

    fn render(&self, w: &mut dyn fmt::Write) -> fmt::Result {
        (self.renderer)(&self.value, w)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<T: fmt::Debug> fmt::Debug for HostValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.value, f)
    }
}
