//! Simulation driver for the Petri cellular automaton engine.
//!
//! [`World`] owns the authoritative live set and advances it one tick at a
//! time: the active [`Rule`](petri_rule::Rule) stages a delta against the
//! pre-tick snapshot, the delta is committed all-or-nothing, the generation
//! counter advances, and a [`TickEvent`] fans out to subscribers.
//!
//! Two execution modes share the same world:
//!
//! - **synchronous** — the caller owns the [`World`] and calls
//!   [`tick()`](World::tick) directly; `&mut self` gives compile-time
//!   exclusion between ticks, reads, and edits;
//! - **realtime** — [`RealtimeWorld::spawn`] moves the world onto a
//!   dedicated tick thread; other threads submit [`Edit`]s through a bounded
//!   queue and read immutable [`WorldSnapshot`]s published after every tick.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod config;
mod edit;
mod events;
mod metrics;
mod realtime;
mod seed;
mod snapshot;
mod world;

pub use config::{ConfigError, WorldConfig};
pub use edit::{Edit, EditReceipt};
pub use events::TickEvent;
pub use metrics::TickMetrics;
pub use realtime::{RealtimeWorld, SubmitError};
pub use seed::{scatter, SeedError};
pub use snapshot::WorldSnapshot;
pub use world::{TickError, TickReport, World};
