//! Analytic terrain heightfield.
//!
//! The terrain is a fixed superposition of three low-frequency ridge waves
//! over a square footprint, deterministic for any (x, z) column. Columns
//! outside the footprint have no surface; queries there fall back to the
//! ground base elevation.

use skystrike_core::constants::{GROUND_BASE_ELEVATION, TERRAIN_HALF_EXTENT};
use skystrike_core::services::GroundHeight;

/// Deterministic rolling-hills height function.
#[derive(Debug, Clone, Copy)]
pub struct Heightfield {
    base_elevation: f64,
    half_extent: f64,
}

impl Default for Heightfield {
    fn default() -> Self {
        Self {
            base_elevation: GROUND_BASE_ELEVATION,
            half_extent: TERRAIN_HALF_EXTENT,
        }
    }
}

impl Heightfield {
    pub fn new(base_elevation: f64, half_extent: f64) -> Self {
        Self {
            base_elevation,
            half_extent,
        }
    }

    /// Surface height at a column, or the base elevation outside the
    /// footprint.
    pub fn height_at(&self, x: f64, z: f64) -> f64 {
        if x.abs() > self.half_extent || z.abs() > self.half_extent {
            return self.base_elevation;
        }
        self.base_elevation + relief(x, z)
    }

    /// Largest possible height offset from the base elevation.
    pub fn max_relief() -> f64 {
        30.0 + 25.0 + 15.0
    }
}

/// Ridge spectrum: two diagonal waves plus a long east-west swell.
fn relief(x: f64, z: f64) -> f64 {
    (x * 0.004 - z * 0.001).sin() * 30.0
        + (x * 0.001 - z * 0.006).cos() * 25.0
        + (x * 0.0008).sin() * 15.0
}

impl GroundHeight for Heightfield {
    fn ground_height_at(&self, x: f64, z: f64) -> f64 {
        self.height_at(x, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_is_deterministic() {
        let field = Heightfield::default();
        for &(x, z) in &[(0.0, 0.0), (123.4, -987.6), (-2000.0, 1500.0)] {
            assert_eq!(field.height_at(x, z), field.height_at(x, z));
        }
    }

    #[test]
    fn test_height_stays_within_relief_bound() {
        let field = Heightfield::default();
        let mut x = -2500.0;
        while x <= 2500.0 {
            let mut z = -2500.0;
            while z <= 2500.0 {
                let h = field.height_at(x, z);
                assert!(
                    (h - GROUND_BASE_ELEVATION).abs() <= Heightfield::max_relief(),
                    "Relief at ({x}, {z}) out of bounds: {h}"
                );
                z += 250.0;
            }
            x += 250.0;
        }
    }

    #[test]
    fn test_fallback_outside_footprint() {
        let field = Heightfield::default();
        assert_eq!(field.height_at(3000.0, 0.0), GROUND_BASE_ELEVATION);
        assert_eq!(field.height_at(0.0, -9999.0), GROUND_BASE_ELEVATION);
    }

    #[test]
    fn test_terrain_is_not_flat() {
        let field = Heightfield::default();
        let a = field.height_at(100.0, 200.0);
        let b = field.height_at(900.0, -400.0);
        assert!((a - b).abs() > 1.0, "Expected distinct hills: {a} vs {b}");
    }
}
