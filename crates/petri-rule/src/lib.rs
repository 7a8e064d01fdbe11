//! Tick rules for the Petri cellular automaton engine.
//!
//! A rule consumes a read-only view of the live set and stages one tick's
//! result as a [`StepDelta`] (coordinates to add, coordinates to remove).
//! The driver commits the delta afterwards — a rule never mutates the live
//! set itself, which is what guarantees every decision in a tick is made
//! against the pre-tick snapshot.
//!
//! [`Rule`] is a closed sum over the two genuinely distinct behaviours:
//! the threshold birth/survival/death rule ([`ThresholdRule`], generalizing
//! Conway's Game of Life to any dimension and offset set) and the degenerate
//! random-walk rule ([`RandomWalk`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod delta;
mod error;
mod rule;
mod threshold;
mod walk;

pub use delta::StepDelta;
pub use error::RuleError;
pub use rule::Rule;
pub use threshold::{ThresholdRule, DEFAULT_LOWER_BOUND, DEFAULT_UPPER_BOUND};
pub use walk::RandomWalk;
