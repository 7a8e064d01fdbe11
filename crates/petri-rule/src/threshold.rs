//! The neighbourhood-threshold rule (generalized Game of Life).

use crate::{RuleError, StepDelta};
use indexmap::IndexSet;
use petri_core::Coord;
use petri_lattice::{Cell, Neighbourhood, Population};

/// Default lower bound of the simplest deployment.
pub const DEFAULT_LOWER_BOUND: usize = 1;

/// Default upper bound of the simplest deployment.
pub const DEFAULT_UPPER_BOUND: usize = 4;

/// Birth/survival/death by live-neighbour count against a neighbourhood.
///
/// Per tick, against the pre-tick live set:
///
/// - **death**: a live coordinate with `count <= lower` or `count > upper`
///   dies;
/// - **birth**: a dead coordinate adjacent to at least one live cell is born
///   iff its own `count == upper` **exactly**.
///
/// The birth condition is deliberately an equality, not the survival range:
/// the thresholds are asymmetric, and the lifetimes of the classic
/// oscillators depend on that exact policy. With `lower = 1`, `upper = 3`
/// over the planar 8-neighbourhood this is precisely Conway's Game of Life
/// (survive on 2 or 3, born on 3).
///
/// Birth candidates are drawn from the neighbour complements of live cells,
/// so a step costs O(live · |offsets|) membership tests and never scans the
/// lattice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThresholdRule {
    lower: usize,
    upper: usize,
    neighbourhood: Neighbourhood,
}

impl ThresholdRule {
    /// Build a rule with explicit bounds.
    ///
    /// Fails with [`RuleError::BoundsInverted`] if `lower > upper`, or
    /// [`RuleError::BoundsOutOfRange`] if `upper` exceeds the offset count
    /// (a neighbour count can never reach it).
    pub fn new(
        lower: usize,
        upper: usize,
        neighbourhood: Neighbourhood,
    ) -> Result<Self, RuleError> {
        if lower > upper {
            return Err(RuleError::BoundsInverted { lower, upper });
        }
        if upper > neighbourhood.offset_count() {
            return Err(RuleError::BoundsOutOfRange {
                lower,
                upper,
                max: neighbourhood.offset_count(),
            });
        }
        Ok(Self {
            lower,
            upper,
            neighbourhood,
        })
    }

    /// Build a rule with the default bounds
    /// ([`DEFAULT_LOWER_BOUND`]`..=`[`DEFAULT_UPPER_BOUND`]).
    ///
    /// The neighbourhood must have at least [`DEFAULT_UPPER_BOUND`] offsets.
    pub fn with_default_bounds(neighbourhood: Neighbourhood) -> Result<Self, RuleError> {
        Self::new(DEFAULT_LOWER_BOUND, DEFAULT_UPPER_BOUND, neighbourhood)
    }

    /// The death threshold: live cells at or below this count die.
    pub fn lower_bound(&self) -> usize {
        self.lower
    }

    /// The crowding/birth threshold: live cells above this count die, dead
    /// cells exactly at it are born.
    pub fn upper_bound(&self) -> usize {
        self.upper
    }

    /// The adjacency model.
    pub fn neighbourhood(&self) -> &Neighbourhood {
        &self.neighbourhood
    }

    /// Lattice dimensionality.
    pub fn dim(&self) -> usize {
        self.neighbourhood.dim()
    }

    /// Stage one tick against the pre-tick live set.
    ///
    /// Each birth candidate is evaluated once even when it appears in the
    /// complement of several live cells.
    pub fn step(&self, population: &Population) -> Result<StepDelta, RuleError> {
        let mut delta = StepDelta::default();
        let mut considered: IndexSet<Coord> = IndexSet::new();
        for coord in population.iter() {
            let cell = Cell::new(coord, population, &self.neighbourhood);
            let count = cell.live_neighbours()?;
            if count <= self.lower || count > self.upper {
                delta.deaths.insert(coord.clone());
            }
            for candidate in cell.neighbour_complement()? {
                if !considered.insert(candidate.clone()) {
                    continue;
                }
                let candidate_count =
                    Cell::new(&candidate, population, &self.neighbourhood).live_neighbours()?;
                if candidate_count == self.upper {
                    delta.births.insert(candidate);
                }
            }
        }
        Ok(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn c(x: i64, y: i64, z: i64) -> Coord {
        Coord::from([x, y, z])
    }

    /// The eight unit and diagonal steps in the y = 0 plane of a 3D lattice.
    fn plane8() -> Neighbourhood {
        Neighbourhood::new([
            c(-1, 0, 0),
            c(1, 0, 0),
            c(-1, 0, -1),
            c(-1, 0, 1),
            c(1, 0, -1),
            c(1, 0, 1),
            c(0, 0, -1),
            c(0, 0, 1),
        ])
        .unwrap()
    }

    fn conway() -> ThresholdRule {
        ThresholdRule::new(1, 3, plane8()).unwrap()
    }

    fn population(cells: &[Coord]) -> Population {
        Population::with_cells(3, cells.iter().cloned()).unwrap()
    }

    fn set(cells: &[Coord]) -> IndexSet<Coord> {
        cells.iter().cloned().collect()
    }

    #[test]
    fn rejects_inverted_bounds() {
        assert_eq!(
            ThresholdRule::new(4, 2, plane8()),
            Err(RuleError::BoundsInverted { lower: 4, upper: 2 })
        );
    }

    #[test]
    fn rejects_unreachable_upper_bound() {
        assert_eq!(
            ThresholdRule::new(1, 9, plane8()),
            Err(RuleError::BoundsOutOfRange {
                lower: 1,
                upper: 9,
                max: 8
            })
        );
    }

    #[test]
    fn equal_bounds_are_valid() {
        let rule = ThresholdRule::new(2, 2, plane8()).unwrap();
        assert_eq!(rule.lower_bound(), 2);
        assert_eq!(rule.upper_bound(), 2);
    }

    #[test]
    fn default_bounds() {
        let rule = ThresholdRule::with_default_bounds(plane8()).unwrap();
        assert_eq!(rule.lower_bound(), 1);
        assert_eq!(rule.upper_bound(), 4);
    }

    #[test]
    fn isolated_cell_is_staged_to_die() {
        let pop = population(&[c(0, 0, 0)]);
        let delta = conway().step(&pop).unwrap();
        assert_eq!(delta.deaths, set(&[c(0, 0, 0)]));
        assert!(delta.births.is_empty());
    }

    #[test]
    fn blinker_delta_flips_the_line() {
        let pop = population(&[c(0, 0, -1), c(0, 0, 0), c(0, 0, 1)]);
        let delta = conway().step(&pop).unwrap();
        assert_eq!(delta.births, set(&[c(-1, 0, 0), c(1, 0, 0)]));
        assert_eq!(delta.deaths, set(&[c(0, 0, -1), c(0, 0, 1)]));
    }

    #[test]
    fn birth_requires_count_equal_to_upper_exactly() {
        // L-triomino: (1,0,1) sees all three live cells and is born;
        // (-1,0,0) sees only two and is not.
        let pop = population(&[c(0, 0, 0), c(1, 0, 0), c(0, 0, 1)]);
        let delta = conway().step(&pop).unwrap();
        assert_eq!(delta.births, set(&[c(1, 0, 1)]));
        assert!(delta.deaths.is_empty());
    }

    #[test]
    fn crowded_cells_die_sparse_corners_survive() {
        // Full 3x3 block in the plane: centre sees 8, edges see 5 (both die),
        // corners see 3 (survive).
        let mut cells = Vec::new();
        for x in -1..=1 {
            for z in -1..=1 {
                cells.push(c(x, 0, z));
            }
        }
        let pop = population(&cells);
        let delta = conway().step(&pop).unwrap();
        assert!(delta.deaths.contains(&c(0, 0, 0)));
        assert!(delta.deaths.contains(&c(0, 0, 1)));
        assert!(delta.deaths.contains(&c(1, 0, 0)));
        assert!(!delta.deaths.contains(&c(1, 0, 1)));
        assert!(!delta.deaths.contains(&c(-1, 0, -1)));
    }

    #[test]
    fn decisions_use_the_pre_tick_snapshot() {
        // A naive implementation that removes deaths before computing births
        // starves the blinker: with the ends already gone, no candidate
        // reaches three neighbours and the line collapses to its centre.
        let pop = population(&[c(0, 0, -1), c(0, 0, 0), c(0, 0, 1)]);
        let rule = conway();

        let delta = rule.step(&pop).unwrap();
        let mut committed = pop.clone();
        committed.apply_delta(&delta.births, &delta.deaths).unwrap();
        let snapshot_next: IndexSet<Coord> = committed.iter().cloned().collect();

        let mut incremental = pop.clone();
        for death in &delta.deaths {
            incremental.remove(death);
        }
        let rebirth = rule.step(&incremental).unwrap();
        let naive_next: IndexSet<Coord> = incremental
            .iter()
            .cloned()
            .chain(rebirth.births.iter().cloned())
            .collect();

        assert_eq!(snapshot_next, set(&[c(-1, 0, 0), c(0, 0, 0), c(1, 0, 0)]));
        assert_eq!(naive_next, set(&[c(0, 0, 0)]));
        assert_ne!(snapshot_next, naive_next);
    }

    proptest! {
        #[test]
        fn births_and_deaths_are_disjoint(
            seeds in proptest::collection::hash_set((-8i64..8, -8i64..8), 0..40)
        ) {
            let cells: Vec<Coord> = seeds.iter().map(|&(x, z)| c(x, 0, z)).collect();
            let pop = population(&cells);
            let delta = conway().step(&pop).unwrap();
            for birth in &delta.births {
                prop_assert!(!pop.contains(birth));
                prop_assert!(!delta.deaths.contains(birth));
            }
            for death in &delta.deaths {
                prop_assert!(pop.contains(death));
            }
        }

        #[test]
        fn births_stay_within_one_hop_of_the_population(
            seeds in proptest::collection::hash_set((-8i64..8, -8i64..8), 1..30)
        ) {
            let cells: Vec<Coord> = seeds.iter().map(|&(x, z)| c(x, 0, z)).collect();
            let pop = population(&cells);
            let hood = plane8();
            let delta = conway().step(&pop).unwrap();
            for birth in &delta.births {
                let near = Cell::new(birth, &pop, &hood).live_neighbours().unwrap();
                prop_assert!(near > 0, "birth {} has no live neighbour", birth);
            }
        }
    }
}
