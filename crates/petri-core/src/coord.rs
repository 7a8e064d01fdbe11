//! The immutable lattice coordinate type.

use crate::DimensionMismatch;
use smallvec::SmallVec;
use std::fmt;

/// Inline storage for up to 4 components; higher dimensions spill to the heap.
type Components = SmallVec<[i64; 4]>;

/// An immutable position (or offset) on the integer lattice.
///
/// A coordinate is a fixed-length vector of signed integers. Its
/// dimensionality is set at construction and never changes; every coordinate
/// participating in one simulation must share the lattice dimensionality.
/// Equality and hashing are structural: two coordinates are equal iff all
/// components are equal.
///
/// The same type doubles as a relative offset in a
/// neighbourhood definition — an offset is just a coordinate added to
/// another.
///
/// ```
/// use petri_core::Coord;
///
/// let cell = Coord::from([2, 0, 3]);
/// let offset = Coord::from([-1, 0, 1]);
/// assert_eq!(cell.add(&offset).unwrap(), Coord::from([1, 0, 4]));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord(Components);

impl Coord {
    /// The all-zero coordinate of the given dimensionality.
    pub fn origin(dim: usize) -> Coord {
        Coord(std::iter::repeat(0).take(dim).collect())
    }

    /// Number of components.
    pub fn dim(&self) -> usize {
        self.0.len()
    }

    /// The components as a slice, in axis order.
    pub fn components(&self) -> &[i64] {
        &self.0
    }

    /// The component along `axis`, or `None` if the axis is out of range.
    pub fn get(&self, axis: usize) -> Option<i64> {
        self.0.get(axis).copied()
    }

    /// Component-wise sum of two coordinates of equal dimensionality.
    ///
    /// Fails with [`DimensionMismatch`] when the operands disagree on
    /// dimensionality. Components are plain `i64` additions; the lattice is
    /// bounded only by the native integer range.
    pub fn add(&self, other: &Coord) -> Result<Coord, DimensionMismatch> {
        if self.dim() != other.dim() {
            return Err(DimensionMismatch {
                left: self.dim(),
                right: other.dim(),
            });
        }
        Ok(Coord(
            self.0
                .iter()
                .zip(other.0.iter())
                .map(|(a, b)| a + b)
                .collect(),
        ))
    }
}

impl<const N: usize> From<[i64; N]> for Coord {
    fn from(components: [i64; N]) -> Self {
        Coord(SmallVec::from_slice(&components))
    }
}

impl From<&[i64]> for Coord {
    fn from(components: &[i64]) -> Self {
        Coord(SmallVec::from_slice(components))
    }
}

impl From<Vec<i64>> for Coord {
    fn from(components: Vec<i64>) -> Self {
        Coord(SmallVec::from_vec(components))
    }
}

impl FromIterator<i64> for Coord {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Coord(iter.into_iter().collect())
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}
