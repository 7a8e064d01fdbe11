//! Error types for lattice configuration and occupancy.

use std::fmt;

/// Errors arising from neighbourhood configuration or live-set mutation.
///
/// All of these are detected eagerly — at neighbourhood construction or at
/// the offending insert — before any simulation state changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LatticeError {
    /// A neighbourhood was configured with no offsets.
    EmptyNeighbourhood,
    /// A neighbourhood was configured containing the zero offset
    /// (a cell is not its own neighbour).
    ZeroOffset {
        /// Dimensionality of the offending offset.
        dim: usize,
    },
    /// A neighbourhood offset disagrees with the others on dimensionality.
    OffsetDimension {
        /// Dimensionality fixed by the first offset.
        expected: usize,
        /// Dimensionality of the offending offset.
        got: usize,
    },
    /// A cell coordinate disagrees with the lattice dimensionality.
    CellDimension {
        /// Dimensionality of the lattice.
        expected: usize,
        /// Dimensionality of the offending coordinate.
        got: usize,
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyNeighbourhood => write!(f, "neighbourhood must have at least one offset"),
            Self::ZeroOffset { dim } => {
                write!(f, "{dim}-dimensional zero offset in neighbourhood")
            }
            Self::OffsetDimension { expected, got } => {
                write!(
                    f,
                    "offset dimensionality {got} does not match neighbourhood dimensionality {expected}"
                )
            }
            Self::CellDimension { expected, got } => {
                write!(
                    f,
                    "cell dimensionality {got} does not match lattice dimensionality {expected}"
                )
            }
        }
    }
}

impl std::error::Error for LatticeError {}
