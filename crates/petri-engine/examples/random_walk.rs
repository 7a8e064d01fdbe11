//! The degenerate random-walk rule: walkers leaving a trail.
//!
//! Demonstrates:
//!   1. Building the walk rule (no thresholds, no deaths)
//!   2. Seeding the walkers into the live set so the trail includes them
//!   3. Ticking synchronously and watching the trail accumulate
//!
//! Run with:
//!   cargo run --example random_walk

use petri_core::Coord;
use petri_engine::{World, WorldConfig};
use petri_rule::{RandomWalk, Rule};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Three walkers on a 2D lattice, deterministic per seed.
    let starts = [
        Coord::from([0, 0]),
        Coord::from([10, 0]),
        Coord::from([0, 10]),
    ];
    let walk = RandomWalk::new(2, starts.clone(), 7)?;

    // 2. The rule never stages a death, so the driver's live set is the
    //    accumulated history of every walker.
    let mut config = WorldConfig::new(Rule::from(walk));
    config.seed_cells = starts.to_vec();
    let mut world = World::new(config)?;

    // 3. Walk for a while.
    for _ in 0..100 {
        world.tick()?;
    }

    println!(
        "after {} ticks the trail covers {} coordinates",
        world.generation(),
        world.population_size(),
    );
    println!("starting points are still part of the trail:");
    for start in &starts {
        println!("  {} live: {}", start, world.contains(start));
    }
    Ok(())
}
