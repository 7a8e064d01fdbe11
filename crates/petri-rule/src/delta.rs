//! One tick's staged result.

use indexmap::IndexSet;
use petri_core::Coord;

/// The coordinates a rule wants added to and removed from the live set.
///
/// Computed entirely against the pre-tick live set; the driver commits it
/// afterwards (births union in first, deaths subtract last). For the
/// threshold rule the two sets are disjoint by construction — births are
/// drawn from dead coordinates, deaths from live ones. The random-walk rule
/// never stages a death.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepDelta {
    /// Coordinates to union into the live set.
    pub births: IndexSet<Coord>,
    /// Coordinates to subtract from the live set.
    pub deaths: IndexSet<Coord>,
}

impl StepDelta {
    /// Whether the tick changes nothing.
    pub fn is_empty(&self) -> bool {
        self.births.is_empty() && self.deaths.is_empty()
    }
}
