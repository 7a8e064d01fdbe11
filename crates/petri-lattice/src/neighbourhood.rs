//! Validated neighbourhood offset sets.

use crate::LatticeError;
use indexmap::IndexSet;
use petri_core::Coord;

/// The adjacency model: the set of relative offsets that count as
/// "neighbouring".
///
/// Invariants, enforced at construction:
/// - at least one offset;
/// - all offsets share one dimensionality (which becomes the lattice
///   dimensionality);
/// - the zero offset is absent — a cell is never its own neighbour.
///
/// Duplicate offsets are silently collapsed (set semantics). Iteration order
/// is the insertion order of the first occurrence, so identical construction
/// sequences yield identical iteration orders.
///
/// A neighbourhood is configuration data: built once before a run and read
/// by every neighbour query afterwards. Replacing it mid-run is a rule
/// reconfiguration, performed through the driver while no tick is in flight,
/// never a mutation of an existing instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Neighbourhood {
    offsets: IndexSet<Coord>,
    dim: usize,
}

impl Neighbourhood {
    /// Build a neighbourhood from explicit offsets.
    ///
    /// Fails with [`LatticeError::EmptyNeighbourhood`],
    /// [`LatticeError::OffsetDimension`], or [`LatticeError::ZeroOffset`]
    /// when the corresponding invariant is violated.
    pub fn new(offsets: impl IntoIterator<Item = Coord>) -> Result<Self, LatticeError> {
        let mut set = IndexSet::new();
        let mut dim: Option<usize> = None;
        for offset in offsets {
            let expected = *dim.get_or_insert(offset.dim());
            if offset.dim() != expected {
                return Err(LatticeError::OffsetDimension {
                    expected,
                    got: offset.dim(),
                });
            }
            if offset.components().iter().all(|&c| c == 0) {
                return Err(LatticeError::ZeroOffset { dim: offset.dim() });
            }
            set.insert(offset);
        }
        match dim {
            Some(dim) => Ok(Self { offsets: set, dim }),
            None => Err(LatticeError::EmptyNeighbourhood),
        }
    }

    /// The Moore neighbourhood: every nonzero offset with components in
    /// `{-1, 0, 1}`, giving `3^dim − 1` offsets.
    ///
    /// For `dim = 2` this is Conway's classic 8-neighbourhood. The offset
    /// count grows exponentially with `dim`; keep the dimensionality small.
    pub fn moore(dim: usize) -> Result<Self, LatticeError> {
        if dim == 0 {
            return Err(LatticeError::EmptyNeighbourhood);
        }
        let mut offsets = Vec::new();
        let mut digits = vec![-1i64; dim];
        'emit: loop {
            if digits.iter().any(|&d| d != 0) {
                offsets.push(Coord::from(digits.as_slice()));
            }
            // Odometer over {-1, 0, 1}^dim.
            for axis in 0..dim {
                if digits[axis] < 1 {
                    digits[axis] += 1;
                    continue 'emit;
                }
                digits[axis] = -1;
            }
            break;
        }
        Self::new(offsets)
    }

    /// The von Neumann neighbourhood: the `2·dim` unit steps along each
    /// axis.
    pub fn von_neumann(dim: usize) -> Result<Self, LatticeError> {
        let mut offsets = Vec::with_capacity(2 * dim);
        for axis in 0..dim {
            for direction in [-1i64, 1] {
                let mut components = vec![0i64; dim];
                components[axis] = direction;
                offsets.push(Coord::from(components));
            }
        }
        Self::new(offsets)
    }

    /// Dimensionality shared by every offset.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of offsets.
    pub fn offset_count(&self) -> usize {
        self.offsets.len()
    }

    /// Whether `offset` is part of this neighbourhood.
    pub fn contains_offset(&self, offset: &Coord) -> bool {
        self.offsets.contains(offset)
    }

    /// The offsets, in deterministic insertion order.
    pub fn offsets(&self) -> impl Iterator<Item = &Coord> + '_ {
        self.offsets.iter()
    }
}
