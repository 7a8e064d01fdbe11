//! Petri: a sparse cellular automaton engine over an unbounded integer
//! lattice.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Petri sub-crates. For most users, adding `petri` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use petri::prelude::*;
//!
//! // Conway's Game of Life: the 2D Moore neighbourhood with the classic
//! // bounds (survive on 2 or 3 neighbours, born on exactly 3).
//! let neighbourhood = Neighbourhood::moore(2).unwrap();
//! let rule = ThresholdRule::new(1, 3, neighbourhood).unwrap();
//!
//! // Seed a blinker and tick it twice: period 2 brings it home.
//! let mut config = WorldConfig::new(Rule::from(rule));
//! config.seed_cells = vec![
//!     Coord::from([0, -1]),
//!     Coord::from([0, 0]),
//!     Coord::from([0, 1]),
//! ];
//! let mut world = World::new(config).unwrap();
//!
//! world.tick().unwrap();
//! assert!(world.contains(&Coord::from([1, 0])));
//! world.tick().unwrap();
//! assert!(world.contains(&Coord::from([0, 1])));
//! assert_eq!(world.generation(), Generation(2));
//! assert_eq!(world.population_size(), 3);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `petri-core` | `Coord`, `Generation`, `DimensionMismatch` |
//! | [`lattice`] | `petri-lattice` | `Neighbourhood`, `Population`, `Cell` |
//! | [`rule`] | `petri-rule` | `Rule`, `ThresholdRule`, `RandomWalk` |
//! | [`engine`] | `petri-engine` | `World`, `RealtimeWorld`, events, seeding |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core lattice types (`petri-core`).
///
/// The coordinate value type ([`types::Coord`]), the generation counter
/// ([`types::Generation`]), and the dimensionality error shared by every
/// layer above.
pub use petri_core as types;

/// Sparse occupancy and adjacency (`petri-lattice`).
///
/// The validated offset set ([`lattice::Neighbourhood`]), the live set
/// ([`lattice::Population`]), and the per-coordinate neighbour queries
/// ([`lattice::Cell`]).
pub use petri_lattice as lattice;

/// Tick rules (`petri-rule`).
///
/// The closed [`rule::Rule`] enum over the threshold rule (generalized
/// Game of Life) and the degenerate random walk.
pub use petri_rule as rule;

/// Simulation driver (`petri-engine`).
///
/// [`engine::World`] for synchronous stepping, [`engine::RealtimeWorld`]
/// for the dedicated tick thread, plus tick events, published snapshots,
/// edits, and the scatter seeder.
pub use petri_engine as engine;

/// Commonly used types, re-exported flat.
pub mod prelude {
    pub use petri_core::{Coord, DimensionMismatch, Generation};
    pub use petri_engine::{
        scatter, Edit, EditReceipt, RealtimeWorld, TickEvent, TickMetrics, TickReport, World,
        WorldConfig, WorldSnapshot,
    };
    pub use petri_lattice::{Cell, Neighbourhood, Population};
    pub use petri_rule::{RandomWalk, Rule, StepDelta, ThresholdRule};
}
