//! Dedicated tick thread and the user-facing realtime handle.
//!
//! [`RealtimeWorld::spawn`] moves an owned [`World`] onto a named thread
//! that ticks until stopped. Other threads never touch live state: they
//! submit [`Edit`]s through a bounded queue (drained and applied between
//! ticks) and read immutable [`WorldSnapshot`]s published after every
//! committed tick.
//!
//! ```text
//! User thread(s)                 Tick thread ("petri-tick")
//!     |                              |
//!     |--submit(edits)-------------->| edit_rx.try_recv()
//!     |   [edit_tx: bounded]         | apply edits, reply receipts
//!     |<--receipts via reply channel | world.tick()
//!     |                              | slot.publish(snapshot)
//!     |--latest()----> slot          | sleep(budget - elapsed)
//!     |--stop()------> shutdown flag | (exit between ticks)
//!     |<--World via JoinHandle-------|
//! ```

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use petri_core::Generation;

use crate::config::ConfigError;
use crate::edit::{Edit, EditBatch, EditReceipt};
use crate::snapshot::{SnapshotSlot, WorldSnapshot};
use crate::world::World;

// ── SubmitError ──────────────────────────────────────────────────

/// Error submitting edits to the tick thread.
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// The tick thread has shut down.
    Shutdown,
    /// The edit queue is full (back-pressure).
    QueueFull,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shutdown => write!(f, "tick thread has shut down"),
            Self::QueueFull => write!(f, "edit queue full"),
        }
    }
}

impl std::error::Error for SubmitError {}

// ── tick thread loop ─────────────────────────────────────────────

struct TickThreadState {
    world: World,
    slot: Arc<SnapshotSlot>,
    edit_rx: Receiver<EditBatch>,
    shutdown: Arc<AtomicBool>,
    halted: Arc<AtomicBool>,
    tick_budget: Option<Duration>,
}

impl TickThreadState {
    /// Main loop. Runs until the shutdown flag is set; consumes self and
    /// returns the `World` so `stop()` can recover it via the join handle.
    fn run(mut self) -> World {
        loop {
            if self.shutdown.load(Ordering::Acquire) {
                break;
            }

            // A failed tick freezes ticking but reads and edits keep
            // working until shutdown.
            if self.halted.load(Ordering::Acquire) {
                if self.drain_edits() {
                    self.slot.publish(self.world.snapshot());
                }
                thread::sleep(Duration::from_millis(10));
                continue;
            }

            let tick_start = Instant::now();

            // 1. Apply pending edits between ticks, never mid-tick.
            self.drain_edits();

            // 2. Advance one generation against the post-edit state.
            match self.world.tick() {
                Ok(_) => {
                    // 3. Publish the committed state for observers.
                    self.slot.publish(self.world.snapshot());
                }
                Err(_) => {
                    self.halted.store(true, Ordering::Release);
                    continue;
                }
            }

            // 4. Sleep out the remaining tick budget, if any.
            if let Some(budget) = self.tick_budget {
                if let Some(remaining) = budget.checked_sub(tick_start.elapsed()) {
                    thread::sleep(remaining);
                }
            }
        }
        self.world
    }

    /// Drain all pending edit batches. Returns whether any edit changed
    /// the live set.
    fn drain_edits(&mut self) -> bool {
        let mut changed = false;
        while let Ok(batch) = self.edit_rx.try_recv() {
            let generation = self.world.generation();
            let receipts: Vec<EditReceipt> = batch
                .edits
                .into_iter()
                .enumerate()
                .map(|(edit_index, edit)| {
                    let receipt = apply_edit(&mut self.world, edit, generation, edit_index);
                    changed |= receipt.changed;
                    receipt
                })
                .collect();
            // Best-effort reply — the submitter may have given up.
            let _ = batch.reply.send(receipts);
        }
        changed
    }
}

fn apply_edit(world: &mut World, edit: Edit, generation: Generation, edit_index: usize) -> EditReceipt {
    match edit {
        Edit::Add(cell) => match world.add(cell) {
            Ok(changed) => EditReceipt {
                accepted: true,
                changed,
                generation: Some(generation),
                reason: None,
                edit_index,
            },
            Err(err) => EditReceipt {
                accepted: false,
                changed: false,
                generation: None,
                reason: Some(err),
                edit_index,
            },
        },
        Edit::Remove(cell) => {
            let changed = world.remove(&cell);
            EditReceipt {
                accepted: true,
                changed,
                generation: Some(generation),
                reason: None,
                edit_index,
            }
        }
        Edit::Clear => {
            let changed = world.population_size() > 0;
            world.clear();
            EditReceipt {
                accepted: true,
                changed,
                generation: Some(generation),
                reason: None,
                edit_index,
            }
        }
    }
}

// ── RealtimeWorld ────────────────────────────────────────────────

/// Handle to a world ticking on its own dedicated thread.
///
/// Register event subscribers on the [`World`] *before* spawning — the
/// receivers outlive the move onto the tick thread. Cancellation takes
/// effect between ticks, never mid-tick; [`stop()`](RealtimeWorld::stop)
/// joins the thread and returns the owned world for inspection or reuse.
#[derive(Debug)]
pub struct RealtimeWorld {
    slot: Arc<SnapshotSlot>,
    edit_tx: Option<Sender<EditBatch>>,
    shutdown: Arc<AtomicBool>,
    halted: Arc<AtomicBool>,
    handle: Option<JoinHandle<World>>,
}

impl RealtimeWorld {
    /// Move `world` onto a dedicated tick thread and start ticking.
    ///
    /// The thread free-runs unless the world was configured with a
    /// `tick_rate_hz` budget, in which case it sleeps out the remainder of
    /// each tick interval.
    pub fn spawn(world: World) -> Result<Self, ConfigError> {
        let tick_budget = world.tick_rate_hz().map(|hz| Duration::from_secs_f64(1.0 / hz));
        let (edit_tx, edit_rx) = bounded(world.max_pending_edits());
        let slot = Arc::new(SnapshotSlot::new(world.snapshot()));
        let shutdown = Arc::new(AtomicBool::new(false));
        let halted = Arc::new(AtomicBool::new(false));

        let state = TickThreadState {
            world,
            slot: Arc::clone(&slot),
            edit_rx,
            shutdown: Arc::clone(&shutdown),
            halted: Arc::clone(&halted),
            tick_budget,
        };
        let handle = thread::Builder::new()
            .name("petri-tick".into())
            .spawn(move || state.run())
            .map_err(|err| ConfigError::ThreadSpawnFailed {
                reason: err.to_string(),
            })?;

        Ok(Self {
            slot,
            edit_tx: Some(edit_tx),
            shutdown,
            halted,
            handle: Some(handle),
        })
    }

    /// Submit a batch of edits; blocks until the tick thread replies with
    /// per-edit receipts.
    ///
    /// Edits are applied between ticks in submission order. Fails with
    /// [`SubmitError::QueueFull`] under back-pressure and
    /// [`SubmitError::Shutdown`] once the thread has stopped.
    pub fn submit(&self, edits: Vec<Edit>) -> Result<Vec<EditReceipt>, SubmitError> {
        let edit_tx = self.edit_tx.as_ref().ok_or(SubmitError::Shutdown)?;
        let (reply_tx, reply_rx) = bounded(1);
        let batch = EditBatch {
            edits,
            reply: reply_tx,
        };
        match edit_tx.try_send(batch) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => return Err(SubmitError::QueueFull),
            Err(TrySendError::Disconnected(_)) => return Err(SubmitError::Shutdown),
        }
        reply_rx.recv().map_err(|_| SubmitError::Shutdown)
    }

    /// The most recently published snapshot.
    ///
    /// Always a value from some completed tick (or the pre-spawn state),
    /// never a tick in progress.
    pub fn latest(&self) -> Arc<WorldSnapshot> {
        self.slot.latest()
    }

    /// Whether ticking froze after a failed tick. Reads and edits keep
    /// working while halted.
    pub fn is_halted(&self) -> bool {
        self.halted.load(Ordering::Acquire)
    }

    /// Signal shutdown, join the tick thread, and recover the owned world.
    ///
    /// Takes effect between ticks; the final state is fully committed.
    pub fn stop(mut self) -> Result<World, ConfigError> {
        self.shutdown.store(true, Ordering::Release);
        // Close the edit queue so blocked submitters observe Shutdown.
        self.edit_tx = None;
        let handle = self.handle.take().ok_or(ConfigError::WorldRecoveryFailed)?;
        handle.join().map_err(|_| ConfigError::WorldRecoveryFailed)
    }
}

impl Drop for RealtimeWorld {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::Release);
        self.edit_tx = None;
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
