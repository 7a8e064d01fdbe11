//! Immutable published world state for realtime observers.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use petri_core::{Coord, Generation};
use petri_lattice::Population;

use crate::TickMetrics;

/// An immutable copy of the world as of some completed tick.
///
/// Observers in realtime mode only ever see these: the tick thread
/// publishes a fresh snapshot after every committed tick (and after
/// applying an edit batch), so a reader can never observe a tick in
/// progress.
#[derive(Clone, Debug)]
pub struct WorldSnapshot {
    generation: Generation,
    cells: Population,
    last_tick_duration: Duration,
    metrics: TickMetrics,
}

impl WorldSnapshot {
    pub(crate) fn new(
        generation: Generation,
        cells: Population,
        last_tick_duration: Duration,
        metrics: TickMetrics,
    ) -> Self {
        Self {
            generation,
            cells,
            last_tick_duration,
            metrics,
        }
    }

    /// Generation of the tick this snapshot was taken after.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// The live cells as of this snapshot.
    pub fn cells(&self) -> impl Iterator<Item = &Coord> + '_ {
        self.cells.iter()
    }

    /// Whether `cell` was live as of this snapshot.
    pub fn contains(&self, cell: &Coord) -> bool {
        self.cells.contains(cell)
    }

    /// Population size as of this snapshot.
    pub fn population_size(&self) -> usize {
        self.cells.len()
    }

    /// Commit-phase duration of the snapshot's tick.
    pub fn last_tick_duration(&self) -> Duration {
        self.last_tick_duration
    }

    /// Full metrics of the snapshot's tick.
    pub fn metrics(&self) -> TickMetrics {
        self.metrics
    }
}

/// Latest-snapshot slot: single producer (the tick thread), any number of
/// readers.
///
/// Readers clone the `Arc` and release the lock immediately, so a reader
/// holding a snapshot never blocks the next publish. Mutex poisoning is a
/// programming error (a panic on the tick thread) and is unwrapped.
#[derive(Debug)]
pub(crate) struct SnapshotSlot {
    slot: Mutex<Arc<WorldSnapshot>>,
}

// Compile-time assertion: the slot is shared across threads.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<SnapshotSlot>();
};

impl SnapshotSlot {
    pub(crate) fn new(initial: WorldSnapshot) -> Self {
        Self {
            slot: Mutex::new(Arc::new(initial)),
        }
    }

    pub(crate) fn publish(&self, snapshot: WorldSnapshot) {
        *self.slot.lock().unwrap() = Arc::new(snapshot);
    }

    pub(crate) fn latest(&self) -> Arc<WorldSnapshot> {
        Arc::clone(&self.slot.lock().unwrap())
    }
}
