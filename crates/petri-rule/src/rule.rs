//! The closed sum over rule behaviours.

use crate::{RandomWalk, RuleError, StepDelta, ThresholdRule};
use petri_lattice::Population;

/// The rule driving a simulation, selected by pattern-matching.
///
/// A deliberately closed enum: the two variants are the only genuinely
/// distinct tick behaviours, and each holds exactly the state it needs.
/// The driver calls [`step`](Rule::step) once per tick with the pre-tick
/// live set and commits the returned [`StepDelta`] itself.
#[derive(Clone, Debug)]
pub enum Rule {
    /// Birth/survival/death by neighbour-count thresholds.
    Threshold(ThresholdRule),
    /// Independent random walkers leaving a trail.
    Walk(RandomWalk),
}

impl Rule {
    /// Stage one tick against the pre-tick live set.
    ///
    /// Takes `&mut self` because the walk variant advances its RNG and
    /// walker positions; the threshold variant is a pure function of the
    /// population.
    pub fn step(&mut self, population: &Population) -> Result<StepDelta, RuleError> {
        match self {
            Self::Threshold(rule) => rule.step(population),
            Self::Walk(walk) => walk.step(population),
        }
    }

    /// Lattice dimensionality the rule was built for.
    pub fn dim(&self) -> usize {
        match self {
            Self::Threshold(rule) => rule.dim(),
            Self::Walk(walk) => walk.dim(),
        }
    }

    /// Short stable name for reporting.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Threshold(_) => "threshold",
            Self::Walk(_) => "random-walk",
        }
    }
}

impl From<ThresholdRule> for Rule {
    fn from(rule: ThresholdRule) -> Self {
        Self::Threshold(rule)
    }
}

impl From<RandomWalk> for Rule {
    fn from(walk: RandomWalk) -> Self {
        Self::Walk(walk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petri_core::Coord;
    use petri_lattice::Neighbourhood;

    #[test]
    fn threshold_variant_dispatches() {
        let hood = Neighbourhood::moore(2).unwrap();
        let mut rule = Rule::from(ThresholdRule::new(1, 3, hood).unwrap());
        assert_eq!(rule.name(), "threshold");
        assert_eq!(rule.dim(), 2);

        let pop = Population::with_cells(2, [Coord::from([0, 0])]).unwrap();
        let delta = rule.step(&pop).unwrap();
        // An isolated cell under Conway bounds is staged to die.
        assert!(delta.deaths.contains(&Coord::from([0, 0])));
    }

    #[test]
    fn walk_variant_dispatches() {
        let mut rule = Rule::from(RandomWalk::new(3, [Coord::from([0, 0, 0])], 5).unwrap());
        assert_eq!(rule.name(), "random-walk");
        assert_eq!(rule.dim(), 3);

        let pop = Population::new(3);
        let delta = rule.step(&pop).unwrap();
        assert_eq!(delta.births.len(), 1);
        assert!(delta.deaths.is_empty());
    }

    #[test]
    fn walk_state_advances_across_steps() {
        let mut rule = Rule::from(RandomWalk::new(2, [Coord::from([0, 0])], 11).unwrap());
        let pop = Population::new(2);
        let first = rule.step(&pop).unwrap();
        let second = rule.step(&pop).unwrap();
        // The second move starts from the first move's landing position.
        let a = first.births.first().unwrap();
        let b = second.births.first().unwrap();
        let manhattan: i64 = a
            .components()
            .iter()
            .zip(b.components())
            .map(|(p, q)| (p - q).abs())
            .sum();
        assert_eq!(manhattan, 1);
    }
}
