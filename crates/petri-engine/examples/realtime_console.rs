//! Realtime mode with a console observer.
//!
//! Demonstrates:
//!   1. Scattering a random initial population over a box
//!   2. Subscribing a console logger to tick events
//!   3. Spawning the world onto its own tick thread
//!   4. Submitting a manual edit while the world runs
//!   5. Stopping the thread and recovering the world
//!
//! Run with:
//!   cargo run --example realtime_console

use petri_core::Coord;
use petri_engine::{scatter, Edit, RealtimeWorld, World, WorldConfig};
use petri_lattice::Neighbourhood;
use petri_rule::{Rule, ThresholdRule};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    print!("Starting server... ");

    // 1. Classic bounds over the planar 8-neighbourhood, embedded in 3D.
    let neighbourhood = Neighbourhood::new(
        [
            [1, 0, -1],
            [1, 0, 0],
            [1, 0, 1],
            [0, 0, -1],
            [0, 0, 1],
            [-1, 0, -1],
            [-1, 0, 0],
            [-1, 0, 1],
        ]
        .map(Coord::from),
    )?;
    let rule = ThresholdRule::new(1, 3, neighbourhood)?;

    // 2. Random soup: 10% density over a 40 x 1 x 40 slab.
    let mut config = WorldConfig::new(Rule::from(rule));
    config.seed_cells = scatter(&[40, 1, 40], 0.1, 42)?;
    config.tick_rate_hz = Some(20.0);

    let mut world = World::new(config)?;
    let events = world.subscribe();

    // 3. Tick on a dedicated thread; this thread only observes.
    let realtime = RealtimeWorld::spawn(world)?;
    println!("OK");

    for event in events.iter().take(40) {
        let snapshot = realtime.latest();
        println!(
            "Generation: {}    Number of cells: {}    Tick time: {} s",
            event.generation,
            snapshot.population_size(),
            snapshot.last_tick_duration().as_secs_f64(),
        );

        // 4. Drop a cell into the soup mid-run.
        if event.generation.0 == 20 {
            let receipts = realtime.submit(vec![Edit::Add(Coord::from([20, 0, 20]))])?;
            println!("manual edit landed at generation {:?}", receipts[0].generation);
        }
    }

    // 5. Shut down between ticks and inspect the final state.
    let world = realtime.stop()?;
    println!(
        "stopped at generation {} with {} cells",
        world.generation(),
        world.population_size(),
    );

    Ok(())
}
