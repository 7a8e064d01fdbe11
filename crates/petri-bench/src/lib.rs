//! Benchmark profiles for the Petri cellular automaton engine.
//!
//! Pre-built worlds with deterministic random soups, shared by the
//! criterion benches:
//!
//! - [`soup_world`]: ~10% density over a 64x64 plane under Conway bounds
//! - [`dense_soup_world`]: ~30% density over the same plane

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use petri_engine::{scatter, World, WorldConfig};
use petri_lattice::Neighbourhood;
use petri_rule::{Rule, ThresholdRule};

/// Side length of the benchmark soup box.
pub const SOUP_EXTENT: i64 = 64;

fn soup(density: f64, seed: u64) -> World {
    let neighbourhood = Neighbourhood::moore(2).expect("2D Moore neighbourhood is valid");
    let rule = ThresholdRule::new(1, 3, neighbourhood).expect("classic bounds are valid");
    let mut config = WorldConfig::new(Rule::from(rule));
    config.seed_cells =
        scatter(&[SOUP_EXTENT, SOUP_EXTENT], density, seed).expect("soup parameters are valid");
    World::new(config).expect("soup config is valid")
}

/// A 64x64 Conway soup at ~10% density, deterministic per seed.
pub fn soup_world(seed: u64) -> World {
    soup(0.1, seed)
}

/// A 64x64 Conway soup at ~30% density, deterministic per seed.
pub fn dense_soup_world(seed: u64) -> World {
    soup(0.3, seed)
}
