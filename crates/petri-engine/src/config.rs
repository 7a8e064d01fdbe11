//! World configuration, validation, and error types.

use std::error::Error;
use std::fmt;

use petri_core::Coord;
use petri_rule::Rule;

/// Default per-subscriber event channel capacity.
pub(crate) const DEFAULT_EVENT_CAPACITY: usize = 64;

/// Default bound on the realtime pending-edit queue.
pub(crate) const DEFAULT_MAX_PENDING_EDITS: usize = 256;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`WorldConfig::validate()`] or world
/// construction.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Event channel capacity is zero.
    EventCapacityZero,
    /// Pending-edit queue capacity is zero.
    EditQueueZero,
    /// `tick_rate_hz` is NaN, infinite, zero, or negative.
    InvalidTickRate {
        /// The invalid value.
        value: f64,
    },
    /// A seed cell disagrees with the rule's lattice dimensionality.
    SeedCellDimension {
        /// Dimensionality fixed by the rule.
        expected: usize,
        /// Dimensionality of the offending cell.
        got: usize,
    },
    /// A replacement rule disagrees with the world's lattice
    /// dimensionality.
    RuleDimension {
        /// Dimensionality of the world's lattice.
        expected: usize,
        /// Dimensionality of the offered rule.
        got: usize,
    },
    /// The tick thread could not be spawned.
    ThreadSpawnFailed {
        /// Description of the spawn failure.
        reason: String,
    },
    /// The world could not be recovered from the tick thread (the thread
    /// panicked).
    WorldRecoveryFailed,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventCapacityZero => write!(f, "event_capacity must be at least 1"),
            Self::EditQueueZero => write!(f, "max_pending_edits must be at least 1"),
            Self::InvalidTickRate { value } => {
                write!(f, "tick_rate_hz must be finite and positive, got {value}")
            }
            Self::SeedCellDimension { expected, got } => {
                write!(
                    f,
                    "seed cell dimensionality {got} does not match rule dimensionality {expected}"
                )
            }
            Self::RuleDimension { expected, got } => {
                write!(
                    f,
                    "rule dimensionality {got} does not match world dimensionality {expected}"
                )
            }
            Self::ThreadSpawnFailed { reason } => {
                write!(f, "thread spawn failed: {reason}")
            }
            Self::WorldRecoveryFailed => {
                write!(f, "world could not be recovered from tick thread")
            }
        }
    }
}

impl Error for ConfigError {}

// ── WorldConfig ────────────────────────────────────────────────────

/// Complete configuration for constructing a simulation world.
///
/// Plain public fields; [`new()`](WorldConfig::new) fills the capacities
/// with sensible defaults. Consumed by [`World::new`](crate::World::new),
/// which validates first.
#[derive(Debug)]
pub struct WorldConfig {
    /// The rule driving every tick. Embeds the neighbourhood and
    /// thresholds (or the walker set) and fixes the lattice
    /// dimensionality.
    pub rule: Rule,
    /// Initial live coordinates, committed before the first tick.
    pub seed_cells: Vec<Coord>,
    /// Bound of each subscriber's tick-event channel. A subscriber whose
    /// channel is full misses events rather than delaying the tick.
    pub event_capacity: usize,
    /// Bound of the realtime pending-edit queue.
    pub max_pending_edits: usize,
    /// Optional target tick rate for the realtime thread. `None` means
    /// free-running.
    pub tick_rate_hz: Option<f64>,
}

impl WorldConfig {
    /// A configuration with default capacities, an empty seed, and no tick
    /// rate budget.
    pub fn new(rule: Rule) -> Self {
        Self {
            rule,
            seed_cells: Vec::new(),
            event_capacity: DEFAULT_EVENT_CAPACITY,
            max_pending_edits: DEFAULT_MAX_PENDING_EDITS,
            tick_rate_hz: None,
        }
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Channel capacities must be usable.
        if self.event_capacity == 0 {
            return Err(ConfigError::EventCapacityZero);
        }
        if self.max_pending_edits == 0 {
            return Err(ConfigError::EditQueueZero);
        }
        // 2. tick_rate_hz, if present, must be finite and positive, and its
        //    reciprocal must also be finite (rejects subnormals where
        //    1.0/hz = inf, which would panic in Duration::from_secs_f64).
        if let Some(hz) = self.tick_rate_hz {
            if !hz.is_finite() || hz <= 0.0 || !(1.0 / hz).is_finite() {
                return Err(ConfigError::InvalidTickRate { value: hz });
            }
        }
        // 3. Every seed cell must match the rule's lattice dimensionality.
        let dim = self.rule.dim();
        for cell in &self.seed_cells {
            if cell.dim() != dim {
                return Err(ConfigError::SeedCellDimension {
                    expected: dim,
                    got: cell.dim(),
                });
            }
        }
        Ok(())
    }
}
