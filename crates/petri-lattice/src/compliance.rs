//! Neighbourhood invariant assertion helpers.
//!
//! These functions verify that a [`Neighbourhood`] satisfies the invariants
//! its constructor promises, plus the symmetry property the preset
//! constructors guarantee. Reused across the preset test modules here and
//! the fixture tests downstream.

use crate::Neighbourhood;
use petri_core::Coord;

/// Assert the zero offset is absent.
pub fn assert_no_zero_offset(neighbourhood: &Neighbourhood) {
    for offset in neighbourhood.offsets() {
        assert!(
            offset.components().iter().any(|&c| c != 0),
            "zero offset {offset} present in neighbourhood"
        );
    }
}

/// Assert every offset matches the neighbourhood dimensionality.
pub fn assert_uniform_dimensionality(neighbourhood: &Neighbourhood) {
    for offset in neighbourhood.offsets() {
        assert_eq!(
            offset.dim(),
            neighbourhood.dim(),
            "offset {offset} has dimensionality {} in a {}-dimensional neighbourhood",
            offset.dim(),
            neighbourhood.dim()
        );
    }
}

/// Assert symmetry: for every offset `o`, `-o` is also present.
///
/// Not required by the constructor, but guaranteed by the Moore and
/// von Neumann presets, and assumed by rules that treat "a sees b" and
/// "b sees a" as the same adjacency.
pub fn assert_symmetric(neighbourhood: &Neighbourhood) {
    for offset in neighbourhood.offsets() {
        let negated: Coord = offset.components().iter().map(|c| -c).collect();
        assert!(
            neighbourhood.contains_offset(&negated),
            "offset {offset} present but its negation {negated} is not"
        );
    }
}
