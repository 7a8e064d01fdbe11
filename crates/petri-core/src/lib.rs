//! Core lattice types for the Petri cellular automaton engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! coordinate value type ([`Coord`]), the generation counter
//! ([`Generation`]), and the dimensionality error shared by every layer
//! above ([`DimensionMismatch`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod coord;
mod error;
mod generation;

pub use coord::Coord;
pub use error::DimensionMismatch;
pub use generation::Generation;
