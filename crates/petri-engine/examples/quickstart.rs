//! Petri quickstart — a complete, minimal simulation from scratch.
//!
//! Demonstrates:
//!   1. Building a neighbourhood (Conway's 8-neighbourhood)
//!   2. Building a threshold rule with the classic bounds
//!   3. Seeding a world with a blinker and ticking it synchronously
//!   4. Reading generation, population, and timing after each tick
//!
//! Run with:
//!   cargo run --example quickstart

use petri_core::Coord;
use petri_engine::{World, WorldConfig};
use petri_lattice::Neighbourhood;
use petri_rule::{Rule, ThresholdRule};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Petri Quickstart ===\n");

    // 1. The adjacency model: every nonzero offset with components in
    //    {-1, 0, 1} — Conway's 8-neighbourhood on a 2D lattice.
    let neighbourhood = Neighbourhood::moore(2)?;

    // 2. The classic ruleset: survive on 2 or 3 neighbours, born on
    //    exactly 3.
    let rule = ThresholdRule::new(1, 3, neighbourhood)?;

    // 3. Seed a blinker: a 3-cell line that oscillates with period 2.
    let mut config = WorldConfig::new(Rule::from(rule));
    config.seed_cells = vec![
        Coord::from([0, -1]),
        Coord::from([0, 0]),
        Coord::from([0, 1]),
    ];
    let mut world = World::new(config)?;

    // 4. Tick and watch the phases flip.
    for _ in 0..6 {
        let report = world.tick()?;
        let cells: Vec<String> = world.cells().map(|c| c.to_string()).collect();
        println!(
            "generation {:>2}  population {}  apply {:>4} us  cells: {}",
            report.generation.0,
            world.population_size(),
            report.metrics.apply_us,
            cells.join(" "),
        );
    }

    println!("\nThe live set flips between the vertical and horizontal line.");
    Ok(())
}
