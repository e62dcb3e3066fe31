//! Resource limits shared by the builder, renderer and parser.

use serde::{Deserialize, Serialize};


/// Deepest expression nesting accepted by default.
///
/// An expression with no nested expressions has depth 1; leaves have depth 0.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Limits {
    pub max_depth: usize,
}

impl Limits {
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// No depth guard. Only for atoms already built under some other limit.
    pub fn unbounded() -> Self {
        Self {
            max_depth: usize::MAX,
        }
    }

    pub fn allows(&self, depth: usize) -> bool {
        depth <= self.max_depth
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
