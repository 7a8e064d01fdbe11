//! Dimensionality error shared across the workspace.

use std::error::Error;
use std::fmt;

/// Two coordinates of different dimensionality were combined.
///
/// Raised by [`Coord::add`](crate::Coord::add) and propagated unchanged by
/// neighbour computation. Always a configuration bug: every coordinate in a
/// simulation must share the lattice dimensionality fixed at construction
/// time. Fatal to the offending operation, never retried.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DimensionMismatch {
    /// Dimensionality of the left-hand operand.
    pub left: usize,
    /// Dimensionality of the right-hand operand.
    pub right: usize,
}

impl fmt::Display for DimensionMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "dimension mismatch: {}-dimensional coordinate combined with {}-dimensional",
            self.left, self.right
        )
    }
}

impl Error for DimensionMismatch {}
