//! Classic-rule fixtures shared across the workspace's test suites.

use petri_core::Coord;
use petri_lattice::Neighbourhood;
use petri_rule::ThresholdRule;

/// Shorthand for a 3D coordinate.
pub fn c3(x: i64, y: i64, z: i64) -> Coord {
    Coord::from([x, y, z])
}

/// The eight unit and diagonal steps in the y = 0 plane of a 3D lattice.
///
/// This is Conway's 8-neighbourhood embedded in 3D: all cells live in one
/// plane, and the classic patterns behave exactly as they do on a flat
/// board.
pub fn plane8() -> Neighbourhood {
    Neighbourhood::new([
        c3(1, 0, -1),
        c3(1, 0, 0),
        c3(1, 0, 1),
        c3(0, 0, -1),
        c3(0, 0, 1),
        c3(-1, 0, -1),
        c3(-1, 0, 0),
        c3(-1, 0, 1),
    ])
    .expect("planar neighbourhood is valid")
}

/// The classic ruleset: `lower = 1, upper = 3` over [`plane8`].
///
/// Survive on 2 or 3 neighbours, born on exactly 3 — Conway's Game of
/// Life.
pub fn classic_rule() -> ThresholdRule {
    ThresholdRule::new(1, 3, plane8()).expect("classic bounds are valid")
}

/// A vertical 3-cell line through the origin: oscillates with period 2.
pub fn blinker() -> Vec<Coord> {
    vec![c3(0, 0, -1), c3(0, 0, 0), c3(0, 0, 1)]
}

/// The horizontal phase the blinker flips into on odd generations.
pub fn blinker_flipped() -> Vec<Coord> {
    vec![c3(-1, 0, 0), c3(0, 0, 0), c3(1, 0, 0)]
}

/// Two disjoint stable clusters, 9 cells total: a fixed point.
///
/// ```text
///   | 0 1 2 3 4 5 6 7 8
/// --|------------------
/// 1 | 0 1 1 0 0 1 1 0 0
/// 2 | 0 1 1 0 0 1 0 1 0
/// 3 | 0 0 0 0 0 0 1 0 0
/// ```
pub fn two_blocks() -> Vec<Coord> {
    vec![
        // the square
        c3(1, 0, 1),
        c3(2, 0, 1),
        c3(1, 0, 2),
        c3(2, 0, 2),
        // the other thing
        c3(5, 0, 1),
        c3(5, 0, 2),
        c3(6, 0, 1),
        c3(6, 0, 3),
        c3(7, 0, 2),
    ]
}

/// The "Die Hard" pattern: 7 cells that vanish at exactly generation 130.
///
/// ```text
///   | 1 2 3 4 5 6 7 8
/// --|----------------
/// 1 | 0 0 0 0 0 0 1 0
/// 2 | 1 1 0 0 0 0 0 0
/// 3 | 0 1 0 0 0 1 1 1
/// ```
pub fn die_hard() -> Vec<Coord> {
    vec![
        // the bottom left thing
        c3(1, 0, 2),
        c3(2, 0, 2),
        c3(2, 0, 3),
        // other thing
        c3(7, 0, 1),
        c3(6, 0, 3),
        c3(7, 0, 3),
        c3(8, 0, 3),
    ]
}
