//! The authoritative live-cell set.

use crate::LatticeError;
use indexmap::IndexSet;
use petri_core::Coord;

/// Cell counts actually changed by a committed delta.
///
/// Already-live births and already-dead deaths are no-ops and do not count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeltaStats {
    /// Coordinates newly inserted.
    pub born: usize,
    /// Coordinates removed.
    pub died: usize,
}

/// The set of coordinates currently occupied by a live cell.
///
/// Backed by an insertion-ordered set: membership tests are O(1) and
/// iteration order is determined solely by the sequence of operations, so
/// identical runs reproduce identical iteration orders. Equality ignores
/// order (set semantics).
///
/// A population is dimension-typed: every cell must match the lattice
/// dimensionality fixed at construction, enforced on insert. The driver owns
/// the population exclusively; everything else sees it through `&Population`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Population {
    cells: IndexSet<Coord>,
    dim: usize,
}

impl Population {
    /// An empty population over a `dim`-dimensional lattice.
    pub fn new(dim: usize) -> Self {
        Self {
            cells: IndexSet::new(),
            dim,
        }
    }

    /// A population seeded with the given cells.
    pub fn with_cells(
        dim: usize,
        cells: impl IntoIterator<Item = Coord>,
    ) -> Result<Self, LatticeError> {
        let mut population = Self::new(dim);
        for cell in cells {
            population.insert(cell)?;
        }
        Ok(population)
    }

    /// Lattice dimensionality.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Insert a cell. Idempotent: returns `Ok(false)` if it was already
    /// live. Rejects coordinates of the wrong dimensionality.
    pub fn insert(&mut self, cell: Coord) -> Result<bool, LatticeError> {
        if cell.dim() != self.dim {
            return Err(LatticeError::CellDimension {
                expected: self.dim,
                got: cell.dim(),
            });
        }
        Ok(self.cells.insert(cell))
    }

    /// Remove a cell if present; returns whether it was live. Removal uses
    /// swap semantics, so iteration order after a removal is still
    /// deterministic but not insertion-ordered.
    pub fn remove(&mut self, cell: &Coord) -> bool {
        self.cells.swap_remove(cell)
    }

    /// Empty the population. The caller's generation counter is unaffected;
    /// this only drops occupancy.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Whether `cell` is live.
    pub fn contains(&self, cell: &Coord) -> bool {
        self.cells.contains(cell)
    }

    /// Number of live cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell is live.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The live cells, in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = &Coord> + '_ {
        self.cells.iter()
    }

    /// The live cells as a set.
    pub fn as_set(&self) -> &IndexSet<Coord> {
        &self.cells
    }

    /// Commit one tick's delta: union `births` in, then subtract `deaths`.
    ///
    /// All-or-nothing: every coordinate in both sets is validated against the
    /// lattice dimensionality before the first mutation, so a failed commit
    /// leaves the population exactly as it was. Deaths apply after births; a
    /// coordinate present in both sets ends up dead.
    pub fn apply_delta(
        &mut self,
        births: &IndexSet<Coord>,
        deaths: &IndexSet<Coord>,
    ) -> Result<DeltaStats, LatticeError> {
        for cell in births.iter().chain(deaths.iter()) {
            if cell.dim() != self.dim {
                return Err(LatticeError::CellDimension {
                    expected: self.dim,
                    got: cell.dim(),
                });
            }
        }
        let mut stats = DeltaStats::default();
        for cell in births {
            if self.cells.insert(cell.clone()) {
                stats.born += 1;
            }
        }
        for cell in deaths {
            if self.cells.swap_remove(cell) {
                stats.died += 1;
            }
        }
        Ok(stats)
    }
}
