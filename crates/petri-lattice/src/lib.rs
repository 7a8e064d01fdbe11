//! Sparse lattice occupancy and neighbourhood adjacency for the Petri engine.
//!
//! The lattice itself is unbounded and never materialized: the only state is
//! the [`Population`] (which coordinates are live) and the [`Neighbourhood`]
//! (which relative offsets count as adjacent). [`Cell`] answers the two
//! derived queries everything else is built on — live-neighbour count and
//! neighbour complement — in O(|offsets|) set-membership tests, never a
//! lattice scan.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod cell;
pub mod compliance;
mod error;
mod neighbourhood;
mod population;

pub use cell::Cell;
pub use error::LatticeError;
pub use neighbourhood::Neighbourhood;
pub use population::{DeltaStats, Population};
