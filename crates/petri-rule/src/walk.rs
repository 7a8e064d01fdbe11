//! The degenerate random-walk rule.

use crate::{RuleError, StepDelta};
use indexmap::IndexSet;
use petri_core::Coord;
use petri_lattice::Population;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Independent random walkers leaving a permanent trail.
///
/// No birth/death semantics: each tick, every walker is replaced by
/// `walker.add(unit_step)` and the new position is staged as a birth. A
/// death is never staged, so the driver's live set accumulates the full
/// trail of every walker; the rule itself keeps only the current positions.
///
/// The unit step is drawn uniformly over all `2·dim` axis-unit vectors —
/// axis uniform over `0..dim`, direction uniform over `{+1, -1}` — so no
/// axis is favoured. Randomness comes from a ChaCha8 generator seeded with a
/// caller-supplied value: a fixed seed reproduces a fixed trajectory.
///
/// Two walkers landing on the same coordinate merge (set semantics), so the
/// walker count never grows and may shrink.
#[derive(Clone, Debug)]
pub struct RandomWalk {
    walkers: IndexSet<Coord>,
    dim: usize,
    rng: ChaCha8Rng,
}

impl RandomWalk {
    /// Build a walk over a `dim`-dimensional lattice from initial walker
    /// positions.
    ///
    /// The initial positions are *not* staged as births; seed them into the
    /// driver's live set as well if the trail should include them. Fails if
    /// `dim` is zero or any walker disagrees with `dim`.
    pub fn new(
        dim: usize,
        walkers: impl IntoIterator<Item = Coord>,
        seed: u64,
    ) -> Result<Self, RuleError> {
        if dim == 0 {
            return Err(RuleError::ZeroDimension);
        }
        let mut set = IndexSet::new();
        for walker in walkers {
            if walker.dim() != dim {
                return Err(RuleError::WalkerDimension {
                    expected: dim,
                    got: walker.dim(),
                });
            }
            set.insert(walker);
        }
        Ok(Self {
            walkers: set,
            dim,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Lattice dimensionality.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of distinct walkers.
    pub fn walker_count(&self) -> usize {
        self.walkers.len()
    }

    /// Current walker positions, in deterministic order.
    pub fn walkers(&self) -> impl Iterator<Item = &Coord> + '_ {
        self.walkers.iter()
    }

    /// Move every walker one unit step; stage the new positions as births.
    ///
    /// The live set is ignored — walkers move regardless of occupancy.
    pub fn step(&mut self, _population: &Population) -> Result<StepDelta, RuleError> {
        let mut moved = IndexSet::with_capacity(self.walkers.len());
        let mut delta = StepDelta::default();
        for walker in &self.walkers {
            let axis = self.rng.random_range(0..self.dim);
            let direction: i64 = if self.rng.random::<bool>() { 1 } else { -1 };
            let step: Coord = (0..self.dim)
                .map(|a| if a == axis { direction } else { 0 })
                .collect();
            let next = walker.add(&step)?;
            delta.births.insert(next.clone());
            moved.insert(next);
        }
        self.walkers = moved;
        Ok(delta)
    }
}
