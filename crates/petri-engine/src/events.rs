//! Tick-completed event fan-out.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use petri_core::Generation;

/// Published at the end of each committed tick.
///
/// Deliberately thin: subscribers pull population, timing, and cell data
/// through the driver's accessors (synchronous mode) or published snapshots
/// (realtime mode).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickEvent {
    /// The generation the tick advanced to.
    pub generation: Generation,
}

/// Fan-out of [`TickEvent`]s to zero or more bounded subscriber channels.
///
/// Delivery is non-blocking: a subscriber whose channel is full misses that
/// event rather than delaying the tick, and a subscriber that dropped its
/// receiver is pruned on the next publish. A slow observer can therefore
/// never stall or corrupt the driver.
#[derive(Debug)]
pub(crate) struct EventBus {
    subscribers: Vec<Sender<TickEvent>>,
    capacity: usize,
}

impl EventBus {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            subscribers: Vec::new(),
            capacity,
        }
    }

    /// Register a subscriber; returns its receiving end.
    pub(crate) fn subscribe(&mut self) -> Receiver<TickEvent> {
        let (tx, rx) = bounded(self.capacity);
        self.subscribers.push(tx);
        rx
    }

    /// Deliver `event` to every live subscriber, pruning disconnected ones.
    pub(crate) fn publish(&mut self, event: TickEvent) {
        self.subscribers
            .retain(|tx| !matches!(tx.try_send(event), Err(TrySendError::Disconnected(_))));
    }

    #[cfg(test)]
    pub(crate) fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
