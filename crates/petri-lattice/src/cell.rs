//! Neighbour queries for a single coordinate.

use crate::{Neighbourhood, Population};
use petri_core::{Coord, DimensionMismatch};

/// A borrowed view of one coordinate against a live set and a neighbourhood.
///
/// This is the hot path of the whole engine: both queries cost exactly one
/// set-membership test per offset — O(|offsets|) — and never touch any
/// coordinate further than one neighbourhood hop away. The unbounded lattice
/// is never scanned.
///
/// Dimension mismatches between the viewed coordinate and the offsets
/// surface as [`DimensionMismatch`] from the offending addition; they cannot
/// occur when the coordinate, population, and neighbourhood were all built
/// for the same lattice.
#[derive(Clone, Copy, Debug)]
pub struct Cell<'a> {
    coord: &'a Coord,
    population: &'a Population,
    neighbourhood: &'a Neighbourhood,
}

impl<'a> Cell<'a> {
    /// View `coord` against `population` and `neighbourhood`.
    pub fn new(
        coord: &'a Coord,
        population: &'a Population,
        neighbourhood: &'a Neighbourhood,
    ) -> Self {
        Self {
            coord,
            population,
            neighbourhood,
        }
    }

    /// The viewed coordinate.
    pub fn coord(&self) -> &Coord {
        self.coord
    }

    /// Whether the viewed coordinate is itself live.
    pub fn is_live(&self) -> bool {
        self.population.contains(self.coord)
    }

    /// Number of offsets landing on a live coordinate.
    pub fn live_neighbours(&self) -> Result<usize, DimensionMismatch> {
        let mut count = 0;
        for offset in self.neighbourhood.offsets() {
            if self.population.contains(&self.coord.add(offset)?) {
                count += 1;
            }
        }
        Ok(count)
    }

    /// The dead coordinates adjacent to the viewed coordinate, in offset
    /// order.
    ///
    /// This is the birth-candidate pool: in one tick, only coordinates
    /// within one neighbourhood hop of a live cell can ever be born.
    pub fn neighbour_complement(&self) -> Result<Vec<Coord>, DimensionMismatch> {
        let mut dead = Vec::with_capacity(self.neighbourhood.offset_count());
        for offset in self.neighbourhood.offsets() {
            let adjacent = self.coord.add(offset)?;
            if !self.population.contains(&adjacent) {
                dead.push(adjacent);
            }
        }
        Ok(dead)
    }
}
