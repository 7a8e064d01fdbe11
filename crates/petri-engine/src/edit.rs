//! Manual-edit commands and receipts for realtime mode.

use crossbeam_channel::Sender;
use petri_core::{Coord, Generation};
use petri_lattice::LatticeError;

/// A manual mutation of the live set.
///
/// In synchronous mode callers mutate the [`World`](crate::World) directly;
/// in realtime mode edits travel through a bounded queue and are applied by
/// the tick thread between ticks, so they never race a tick in flight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Edit {
    /// Insert a coordinate (idempotent).
    Add(Coord),
    /// Remove a coordinate (no-op if absent).
    Remove(Coord),
    /// Empty the live set. Does not reset the generation counter.
    Clear,
}

/// Outcome of one submitted [`Edit`].
///
/// `generation` is the generation the edit landed at — the last completed
/// tick at application time — so remote editors can correlate their
/// mutations with observed generations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditReceipt {
    /// Whether the edit was applied.
    pub accepted: bool,
    /// Whether the edit changed the live set (an `Add` of an already-live
    /// cell is accepted but changes nothing).
    pub changed: bool,
    /// Generation at which the edit was applied, when accepted.
    pub generation: Option<Generation>,
    /// Why the edit was rejected, when not accepted.
    pub reason: Option<LatticeError>,
    /// The edit's index within its submitted batch.
    pub edit_index: usize,
}

/// A batch of edits paired with a reply channel for the receipts.
#[derive(Debug)]
pub(crate) struct EditBatch {
    pub(crate) edits: Vec<Edit>,
    pub(crate) reply: Sender<Vec<EditReceipt>>,
}
