//! Error types for rule construction and stepping.

use petri_core::DimensionMismatch;
use std::error::Error;
use std::fmt;

/// Errors arising from rule configuration or a failed step computation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleError {
    /// Threshold bounds are inverted: `lower > upper`.
    BoundsInverted {
        /// The configured lower bound.
        lower: usize,
        /// The configured upper bound.
        upper: usize,
    },
    /// Threshold bounds fall outside the attainable neighbour-count range.
    BoundsOutOfRange {
        /// The configured lower bound.
        lower: usize,
        /// The configured upper bound.
        upper: usize,
        /// Largest attainable neighbour count (the offset count).
        max: usize,
    },
    /// A walker coordinate disagrees with the lattice dimensionality.
    WalkerDimension {
        /// Dimensionality of the lattice.
        expected: usize,
        /// Dimensionality of the offending walker.
        got: usize,
    },
    /// A random walk was configured over a zero-dimensional lattice.
    ZeroDimension,
    /// A coordinate operation inside the step combined mismatched
    /// dimensionalities.
    Dimension(DimensionMismatch),
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsInverted { lower, upper } => {
                write!(f, "lower bound {lower} exceeds upper bound {upper}")
            }
            Self::BoundsOutOfRange { lower, upper, max } => {
                write!(
                    f,
                    "bounds {lower}..={upper} outside the attainable neighbour-count range 0..={max}"
                )
            }
            Self::WalkerDimension { expected, got } => {
                write!(
                    f,
                    "walker dimensionality {got} does not match lattice dimensionality {expected}"
                )
            }
            Self::ZeroDimension => write!(f, "random walk requires at least one axis"),
            Self::Dimension(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RuleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Dimension(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DimensionMismatch> for RuleError {
    fn from(err: DimensionMismatch) -> Self {
        Self::Dimension(err)
    }
}
