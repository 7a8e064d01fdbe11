//! Random initial-population seeding.

use std::error::Error;
use std::fmt;

use petri_core::Coord;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Errors rejected by [`scatter`] before any point is generated.
#[derive(Clone, Debug, PartialEq)]
pub enum SeedError {
    /// Density is NaN or outside `[0, 1]`.
    InvalidDensity {
        /// The offending density.
        density: f64,
    },
    /// A box extent is zero or negative.
    InvalidExtent {
        /// Axis of the offending extent.
        axis: usize,
        /// The offending extent.
        extent: i64,
    },
    /// The box has no axes.
    EmptyBox,
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDensity { density } => {
                write!(f, "density must be within [0, 1], got {density}")
            }
            Self::InvalidExtent { axis, extent } => {
                write!(f, "extent {extent} along axis {axis} must be positive")
            }
            Self::EmptyBox => write!(f, "scatter box must have at least one axis"),
        }
    }
}

impl Error for SeedError {}

/// Scatter a random population over the box `[0, extents[0]) × … ×
/// [0, extents[D-1])`.
///
/// Every lattice point of the box is included independently with
/// probability `density`, drawn from a ChaCha8 generator seeded with
/// `seed` — a fixed seed reproduces the exact scatter. Density 0 yields an
/// empty set, density 1 fills the box exactly. The returned coordinates
/// are in deterministic box-iteration order.
///
/// The box volume is visited exhaustively (this is the one deliberately
/// bounded scan in the system), so keep `extents` products modest.
pub fn scatter(extents: &[i64], density: f64, seed: u64) -> Result<Vec<Coord>, SeedError> {
    if extents.is_empty() {
        return Err(SeedError::EmptyBox);
    }
    if !density.is_finite() || !(0.0..=1.0).contains(&density) {
        return Err(SeedError::InvalidDensity { density });
    }
    for (axis, &extent) in extents.iter().enumerate() {
        if extent <= 0 {
            return Err(SeedError::InvalidExtent { axis, extent });
        }
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut cells = Vec::new();
    let mut point = vec![0i64; extents.len()];
    'emit: loop {
        // random::<f64>() is in [0, 1), so density 1.0 always includes.
        if rng.random::<f64>() < density {
            cells.push(Coord::from(point.as_slice()));
        }
        // Odometer over the box.
        for axis in 0..extents.len() {
            if point[axis] + 1 < extents[axis] {
                point[axis] += 1;
                continue 'emit;
            }
            point[axis] = 0;
        }
        break;
    }
    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rejects_invalid_densities() {
        for density in [-0.1, 1.1, f64::NAN, f64::INFINITY] {
            match scatter(&[4, 4], density, 1) {
                Err(SeedError::InvalidDensity { .. }) => {}
                other => panic!("expected InvalidDensity for {density}, got {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_non_positive_extents() {
        assert_eq!(
            scatter(&[4, 0, 4], 0.5, 1),
            Err(SeedError::InvalidExtent { axis: 1, extent: 0 })
        );
        assert_eq!(
            scatter(&[-3], 0.5, 1),
            Err(SeedError::InvalidExtent {
                axis: 0,
                extent: -3
            })
        );
    }

    #[test]
    fn rejects_an_empty_box() {
        assert_eq!(scatter(&[], 0.5, 1), Err(SeedError::EmptyBox));
    }

    #[test]
    fn density_zero_is_empty() {
        assert!(scatter(&[10, 10], 0.0, 7).unwrap().is_empty());
    }

    #[test]
    fn density_one_fills_the_box_exactly() {
        let cells = scatter(&[4, 3, 2], 1.0, 7).unwrap();
        assert_eq!(cells.len(), 24);
        // No duplicates, all inside the box.
        let unique: std::collections::HashSet<_> = cells.iter().collect();
        assert_eq!(unique.len(), 24);
        for cell in &cells {
            for (axis, &extent) in [4i64, 3, 2].iter().enumerate() {
                let c = cell.get(axis).unwrap();
                assert!((0..extent).contains(&c));
            }
        }
    }

    #[test]
    fn fixed_seed_reproduces_the_scatter() {
        let a = scatter(&[20, 20], 0.3, 1234).unwrap();
        let b = scatter(&[20, 20], 0.3, 1234).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_diverge() {
        let a = scatter(&[20, 20], 0.3, 1).unwrap();
        let b = scatter(&[20, 20], 0.3, 2).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn density_roughly_controls_the_count() {
        let cells = scatter(&[40, 40], 0.25, 99).unwrap();
        let count = cells.len() as f64;
        // 1600 points at p = 0.25: expect about 400, allow wide slack.
        assert!(count > 250.0 && count < 550.0, "got {count}");
    }

    proptest! {
        #[test]
        fn scatter_stays_inside_the_box_without_duplicates(
            extents in proptest::collection::vec(1i64..12, 1..4),
            density in 0.0f64..=1.0,
            seed in any::<u64>(),
        ) {
            let cells = scatter(&extents, density, seed).unwrap();
            let unique: std::collections::HashSet<_> = cells.iter().collect();
            prop_assert_eq!(unique.len(), cells.len());
            for cell in &cells {
                prop_assert_eq!(cell.dim(), extents.len());
                for (axis, &extent) in extents.iter().enumerate() {
                    let c = cell.get(axis).unwrap();
                    prop_assert!((0..extent).contains(&c));
                }
            }
        }
    }
}
