//! The simulation driver: owned world state and the tick loop body.

use std::fmt;
use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;
use petri_core::{Coord, Generation};
use petri_lattice::{DeltaStats, LatticeError, Population};
use petri_rule::{Rule, RuleError};

use crate::config::{ConfigError, WorldConfig};
use crate::events::{EventBus, TickEvent};
use crate::snapshot::WorldSnapshot;
use crate::TickMetrics;

// Compile-time assertion: World moves onto the tick thread.
const _: fn() = || {
    fn assert<T: Send>() {}
    assert::<World>();
};

// ── TickReport ───────────────────────────────────────────────────

/// Result of a successful [`World::tick()`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickReport {
    /// The generation the tick advanced to.
    pub generation: Generation,
    /// Cell counts actually changed by the commit.
    pub stats: DeltaStats,
    /// Timing and size data for the tick.
    pub metrics: TickMetrics,
}

// ── TickError ────────────────────────────────────────────────────

/// Error returned from [`World::tick()`].
///
/// A failed tick changes nothing: the live set is exactly as it was, the
/// generation does not advance, and no event is emitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TickError {
    /// The rule failed to stage a delta.
    Rule(RuleError),
    /// The staged delta failed commit validation.
    Commit(LatticeError),
}

impl fmt::Display for TickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rule(err) => write!(f, "rule step failed: {err}"),
            Self::Commit(err) => write!(f, "delta commit failed: {err}"),
        }
    }
}

impl std::error::Error for TickError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Rule(err) => Some(err),
            Self::Commit(err) => Some(err),
        }
    }
}

// ── World ────────────────────────────────────────────────────────

/// The authoritative simulation state and its driver.
///
/// Owns the live set, the active rule, the generation counter, and the
/// event fan-out. Explicitly constructed and owned by the caller — there is
/// no global instance. All mutation goes through `&mut self`, so in
/// synchronous mode the borrow checker guarantees that no reader can
/// observe a tick in progress and that at most one tick is ever in flight.
///
/// Per tick: the rule stages a delta against the pre-tick live set, the
/// delta is committed all-or-nothing (births union in, then deaths
/// subtract), the generation advances exactly once, and a [`TickEvent`]
/// fans out to subscribers. `last_tick_duration()` measures the commit
/// phase only; [`TickMetrics`] carries the rule-phase and whole-tick
/// timings under their own names.
#[derive(Debug)]
pub struct World {
    population: Population,
    rule: Rule,
    generation: Generation,
    last_tick_duration: Duration,
    metrics: TickMetrics,
    events: EventBus,
    tick_rate_hz: Option<f64>,
    max_pending_edits: usize,
}

impl World {
    /// Build a world from a validated configuration.
    ///
    /// The seed cells are committed before the first tick; generation
    /// starts at 0.
    pub fn new(config: WorldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let dim = config.rule.dim();
        // Seed dimensions were checked by validate(); inserts can only fail
        // on a cell dimension mismatch.
        let population = Population::with_cells(dim, config.seed_cells).map_err(|err| {
            let (expected, got) = match err {
                LatticeError::CellDimension { expected, got } => (expected, got),
                _ => (dim, dim),
            };
            ConfigError::SeedCellDimension { expected, got }
        })?;
        Ok(Self {
            population,
            rule: config.rule,
            generation: Generation::default(),
            last_tick_duration: Duration::ZERO,
            metrics: TickMetrics::default(),
            events: EventBus::new(config.event_capacity),
            tick_rate_hz: config.tick_rate_hz,
            max_pending_edits: config.max_pending_edits,
        })
    }

    // ── manual edits ─────────────────────────────────────────────

    /// Insert a cell; idempotent. Returns whether the live set changed.
    pub fn add(&mut self, cell: Coord) -> Result<bool, LatticeError> {
        self.population.insert(cell)
    }

    /// Remove a cell if present. Returns whether the live set changed.
    pub fn remove(&mut self, cell: &Coord) -> bool {
        self.population.remove(cell)
    }

    /// Empty the live set. The generation counter is unaffected.
    pub fn clear(&mut self) {
        self.population.clear();
    }

    // ── accessors ────────────────────────────────────────────────

    /// The live cells, in deterministic order.
    pub fn cells(&self) -> impl Iterator<Item = &Coord> + '_ {
        self.population.iter()
    }

    /// Whether `cell` is live.
    pub fn contains(&self, cell: &Coord) -> bool {
        self.population.contains(cell)
    }

    /// Number of live cells.
    pub fn population_size(&self) -> usize {
        self.population.len()
    }

    /// Count of completed ticks.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Commit-phase duration of the most recent tick.
    pub fn last_tick_duration(&self) -> Duration {
        self.last_tick_duration
    }

    /// Full metrics of the most recent tick.
    pub fn metrics(&self) -> TickMetrics {
        self.metrics
    }

    /// The active rule.
    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// The live set as a read-only view.
    pub fn population(&self) -> &Population {
        &self.population
    }

    pub(crate) fn tick_rate_hz(&self) -> Option<f64> {
        self.tick_rate_hz
    }

    pub(crate) fn max_pending_edits(&self) -> usize {
        self.max_pending_edits
    }

    // ── reconfiguration ──────────────────────────────────────────

    /// Swap the active rule, returning the previous one.
    ///
    /// Taking `&mut self` guarantees no tick is in flight. The replacement
    /// must match the lattice dimensionality.
    pub fn replace_rule(&mut self, rule: Rule) -> Result<Rule, ConfigError> {
        if rule.dim() != self.population.dim() {
            return Err(ConfigError::RuleDimension {
                expected: self.population.dim(),
                got: rule.dim(),
            });
        }
        Ok(std::mem::replace(&mut self.rule, rule))
    }

    // ── observation ──────────────────────────────────────────────

    /// Register a tick-completed subscriber.
    ///
    /// Delivery is non-blocking: a subscriber whose channel is full misses
    /// events rather than delaying the tick. In realtime mode subscribe
    /// before [`RealtimeWorld::spawn`](crate::RealtimeWorld::spawn); the
    /// receiver is independent of the tick thread.
    pub fn subscribe(&mut self) -> Receiver<TickEvent> {
        self.events.subscribe()
    }

    /// An immutable copy of the current state.
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot::new(
            self.generation,
            self.population.clone(),
            self.last_tick_duration,
            self.metrics,
        )
    }

    // ── the tick ─────────────────────────────────────────────────

    /// Advance one generation.
    ///
    /// Stages the delta via the active rule against the pre-tick live set,
    /// commits it all-or-nothing, advances the generation, and publishes
    /// one [`TickEvent`]. On failure the live set, generation, and metrics
    /// are untouched and no event is emitted.
    pub fn tick(&mut self) -> Result<TickReport, TickError> {
        let tick_start = Instant::now();

        // ComputingDelta: everything reads the pre-tick snapshot.
        let rule_start = Instant::now();
        let delta = self.rule.step(&self.population).map_err(TickError::Rule)?;
        let rule_us = rule_start.elapsed().as_micros() as u64;

        // Committing: apply_delta validates before the first mutation.
        let apply_start = Instant::now();
        let stats = self
            .population
            .apply_delta(&delta.births, &delta.deaths)
            .map_err(TickError::Commit)?;
        let apply = apply_start.elapsed();

        self.last_tick_duration = apply;
        self.generation = self.generation.next();
        self.metrics = TickMetrics {
            rule_us,
            apply_us: apply.as_micros() as u64,
            total_us: tick_start.elapsed().as_micros() as u64,
            births: stats.born,
            deaths: stats.died,
            population: self.population.len(),
        };

        self.events.publish(TickEvent {
            generation: self.generation,
        });

        Ok(TickReport {
            generation: self.generation,
            stats,
            metrics: self.metrics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petri_lattice::Neighbourhood;
    use petri_rule::{RandomWalk, ThresholdRule};

    fn conway_world(seed_cells: &[[i64; 2]]) -> World {
        let hood = Neighbourhood::moore(2).unwrap();
        let rule = ThresholdRule::new(1, 3, hood).unwrap();
        let mut config = WorldConfig::new(Rule::from(rule));
        config.seed_cells = seed_cells.iter().map(|&c| Coord::from(c)).collect();
        World::new(config).unwrap()
    }

    #[test]
    fn starts_at_generation_zero_with_the_seed() {
        let world = conway_world(&[[0, 0], [0, 1]]);
        assert_eq!(world.generation(), Generation(0));
        assert_eq!(world.population_size(), 2);
        assert!(world.contains(&Coord::from([0, 1])));
        assert_eq!(world.last_tick_duration(), Duration::ZERO);
    }

    #[test]
    fn generation_advances_once_per_tick() {
        let mut world = conway_world(&[]);
        for expected in 1..=25u64 {
            world.tick().unwrap();
            assert_eq!(world.generation(), Generation(expected));
        }
    }

    #[test]
    fn add_is_idempotent_and_remove_absent_is_a_noop() {
        let mut world = conway_world(&[]);
        assert_eq!(world.add(Coord::from([2, 3])), Ok(true));
        assert_eq!(world.add(Coord::from([2, 3])), Ok(false));
        assert_eq!(world.population_size(), 1);
        assert!(!world.remove(&Coord::from([9, 9])));
        assert_eq!(world.population_size(), 1);
    }

    #[test]
    fn clear_keeps_the_generation_counter() {
        let mut world = conway_world(&[[0, 0], [1, 0], [0, 1]]);
        world.tick().unwrap();
        world.clear();
        assert_eq!(world.population_size(), 0);
        assert_eq!(world.generation(), Generation(1));
    }

    #[test]
    fn tick_report_carries_stats_and_metrics() {
        // A lone pair: both die, nothing is born.
        let mut world = conway_world(&[[0, 0], [0, 1]]);
        let report = world.tick().unwrap();
        assert_eq!(report.generation, Generation(1));
        assert_eq!(report.stats, DeltaStats { born: 0, died: 2 });
        assert_eq!(report.metrics.population, 0);
        assert_eq!(report.metrics.deaths, 2);
        assert_eq!(report.metrics, world.metrics());
    }

    #[test]
    fn subscribers_see_each_committed_tick() {
        let mut world = conway_world(&[]);
        let rx = world.subscribe();
        world.tick().unwrap();
        world.tick().unwrap();
        assert_eq!(rx.try_recv().unwrap().generation, Generation(1));
        assert_eq!(rx.try_recv().unwrap().generation, Generation(2));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn replace_rule_swaps_and_returns_the_previous() {
        let mut world = conway_world(&[]);
        let walk = RandomWalk::new(2, [Coord::from([0, 0])], 9).unwrap();
        let previous = world.replace_rule(Rule::from(walk)).unwrap();
        assert_eq!(previous.name(), "threshold");
        assert_eq!(world.rule().name(), "random-walk");
    }

    #[test]
    fn replace_rule_rejects_mismatched_dimensionality() {
        let mut world = conway_world(&[]);
        let walk = RandomWalk::new(3, [], 9).unwrap();
        assert_eq!(
            world.replace_rule(Rule::from(walk)).unwrap_err(),
            ConfigError::RuleDimension {
                expected: 2,
                got: 3
            }
        );
        assert_eq!(world.rule().name(), "threshold");
    }

    #[test]
    fn walk_world_accumulates_a_trail() {
        let walk = RandomWalk::new(2, [Coord::from([0, 0])], 31).unwrap();
        let mut config = WorldConfig::new(Rule::from(walk));
        config.seed_cells = vec![Coord::from([0, 0])];
        let mut world = World::new(config).unwrap();

        let mut previous = world.population_size();
        for _ in 0..60 {
            world.tick().unwrap();
            let now = world.population_size();
            // The trail never shrinks and grows by at most one walker.
            assert!(now >= previous);
            assert!(now <= previous + 1);
            previous = now;
        }
        assert!(world.population_size() > 1);
    }

    #[test]
    fn snapshot_captures_the_committed_state() {
        let mut world = conway_world(&[[0, 0], [1, 0], [0, 1]]);
        world.tick().unwrap();
        let snap = world.snapshot();
        assert_eq!(snap.generation(), world.generation());
        assert_eq!(snap.population_size(), world.population_size());
        for cell in world.cells() {
            assert!(snap.contains(cell));
        }
    }
}
