//! Scenario tests for the classic Game of Life deployment.
//!
//! The planar 8-neighbourhood with `lower = 1, upper = 3` is Conway's
//! Game of Life; these scenarios pin the engine's behaviour to known
//! pattern lifetimes, including the asymmetric equality-based birth
//! threshold the Die Hard lifetime depends on.

use indexmap::IndexSet;
use petri_core::{Coord, Generation};
use petri_engine::{World, WorldConfig};
use petri_rule::Rule;
use petri_test_utils::{blinker, blinker_flipped, c3, classic_rule, die_hard, two_blocks};

fn classic_world(seed_cells: Vec<Coord>) -> World {
    let mut config = WorldConfig::new(Rule::from(classic_rule()));
    config.seed_cells = seed_cells;
    World::new(config).unwrap()
}

fn live_set(world: &World) -> IndexSet<Coord> {
    world.cells().cloned().collect()
}

#[test]
fn empty_world_stays_empty() {
    let mut world = classic_world(Vec::new());
    for expected in 1..100u64 {
        world.tick().unwrap();
        assert_eq!(world.generation(), Generation(expected));
        assert_eq!(world.population_size(), 0);
    }
    assert_eq!(world.generation(), Generation(99));
}

#[test]
fn single_cell_dies_in_one_tick() {
    let mut world = classic_world(vec![c3(0, 0, 0)]);
    assert_eq!(world.generation(), Generation(0));
    assert_eq!(world.population_size(), 1);

    world.tick().unwrap();
    assert!(!world.contains(&c3(0, 0, 0)));
    assert_eq!(world.generation(), Generation(1));
    assert_eq!(world.population_size(), 0);
}

#[test]
fn blinker_oscillates_with_period_two() {
    let mut world = classic_world(blinker());
    let vertical: IndexSet<Coord> = blinker().into_iter().collect();
    let horizontal: IndexSet<Coord> = blinker_flipped().into_iter().collect();

    for tick in 1..=100u64 {
        world.tick().unwrap();
        let expected = if tick % 2 == 1 { &horizontal } else { &vertical };
        assert_eq!(&live_set(&world), expected, "wrong phase at tick {tick}");
        assert_eq!(world.population_size(), 3);
    }
}

#[test]
fn stable_blocks_are_a_fixed_point() {
    let mut world = classic_world(two_blocks());
    let initial = live_set(&world);
    assert_eq!(initial.len(), 9);

    for _ in 0..100 {
        world.tick().unwrap();
        assert_eq!(world.population_size(), 9);
        assert_eq!(live_set(&world), initial);
    }
}

#[test]
fn die_hard_dies_at_exactly_tick_130() {
    let mut world = classic_world(die_hard());
    assert_eq!(world.population_size(), 7);

    for tick in 1..130u64 {
        world.tick().unwrap();
        assert_ne!(
            world.population_size(),
            0,
            "population vanished early at tick {tick}"
        );
    }

    world.tick().unwrap();
    assert_eq!(world.generation(), Generation(130));
    assert_eq!(world.population_size(), 0);
}

#[test]
fn cells_stay_unique_across_mixed_operations() {
    let mut world = classic_world(blinker());
    for _ in 0..10 {
        world.add(c3(0, 0, 0)).unwrap();
        world.tick().unwrap();
        world.add(c3(0, 0, 0)).unwrap();
    }
    let seen: Vec<Coord> = world.cells().cloned().collect();
    let unique: IndexSet<Coord> = seen.iter().cloned().collect();
    assert_eq!(seen.len(), unique.len());
}

#[test]
fn failed_seed_is_rejected_before_any_tick() {
    let mut config = WorldConfig::new(Rule::from(classic_rule()));
    config.seed_cells = vec![c3(0, 0, 0), Coord::from([0, 0])];
    assert!(World::new(config).is_err());
}
