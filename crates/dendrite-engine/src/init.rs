//! Initial seed geometries for the phase field.
//!
//! Fills touch interior cells only; the boundary ring is rebuilt by
//! the initial boundary pass, matching the reference initialization
//! order.

use dendrite_core::Field2D;

/// Shape of the initial solid seed written into φ.
///
/// Cells inside the seed get `phi_fill`, cells outside get
/// `1 − phi_fill`, so a `phi_fill` of 1.0 seeds solid in liquid and
/// 0.0 seeds liquid in solid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SeedGeometry {
    /// A planar front: the seed occupies all cells with
    /// `i < fraction · nx`. The reference setup uses a quarter-width
    /// front (`fraction = 0.25`).
    PlanarFront {
        /// Fraction of the x extent occupied by the seed, in `[0, 1]`.
        fraction: f64,
    },
    /// A circular nucleus centred on a grid cell, radius measured in
    /// cells.
    CircularSeed {
        /// x index of the centre cell.
        center_x: usize,
        /// y index of the centre cell.
        center_y: usize,
        /// Radius in cell units.
        radius: f64,
    },
}

impl Default for SeedGeometry {
    fn default() -> Self {
        Self::PlanarFront { fraction: 0.25 }
    }
}

impl SeedGeometry {
    /// Write the seed pattern into the interior of `phi`.
    pub fn fill_phase(&self, phi: &mut Field2D, phi_fill: f64) {
        let outside = 1.0 - phi_fill;
        match *self {
            Self::PlanarFront { fraction } => {
                let threshold = (phi.nx() as f64 * fraction).floor() as usize;
                for i in phi.interior_x() {
                    let value = if i < threshold { phi_fill } else { outside };
                    for j in phi.interior_y() {
                        phi.set(i, j, value);
                    }
                }
            }
            Self::CircularSeed {
                center_x,
                center_y,
                radius,
            } => {
                let r2 = radius * radius;
                for i in phi.interior_x() {
                    for j in phi.interior_y() {
                        let di = i as f64 - center_x as f64;
                        let dj = j as f64 - center_y as f64;
                        let value = if di * di + dj * dj <= r2 {
                            phi_fill
                        } else {
                            outside
                        };
                        phi.set(i, j, value);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planar_front_splits_at_quarter_width() {
        let mut phi = Field2D::new(8, 6, 0.1, 0.1, -1.0);
        SeedGeometry::default().fill_phase(&mut phi, 1.0);
        // threshold = 8 * 0.25 = 2: interior i = 1 is seed, i >= 2 is not.
        for j in phi.interior_y() {
            assert_eq!(phi.get(1, j), 1.0);
            for i in 2..7 {
                assert_eq!(phi.get(i, j), 0.0);
            }
        }
    }

    #[test]
    fn planar_front_threshold_uses_floor() {
        // 10 * 0.3 = 3: seed is i < 3, matching integer-division
        // semantics of the reference fill.
        let mut phi = Field2D::new(10, 10, 0.1, 0.1, -1.0);
        let geom = SeedGeometry::PlanarFront { fraction: 0.3 };
        geom.fill_phase(&mut phi, 0.0);
        assert_eq!(phi.get(2, 5), 0.0);
        assert_eq!(phi.get(3, 5), 1.0);
    }

    #[test]
    fn boundary_ring_is_left_alone() {
        let mut phi = Field2D::new(6, 6, 0.1, 0.1, -1.0);
        SeedGeometry::default().fill_phase(&mut phi, 1.0);
        for k in 0..6 {
            assert_eq!(phi.get(0, k), -1.0);
            assert_eq!(phi.get(5, k), -1.0);
            assert_eq!(phi.get(k, 0), -1.0);
            assert_eq!(phi.get(k, 5), -1.0);
        }
    }

    #[test]
    fn circular_seed_is_radially_symmetric() {
        let mut phi = Field2D::new(21, 21, 0.1, 0.1, 0.0);
        let geom = SeedGeometry::CircularSeed {
            center_x: 10,
            center_y: 10,
            radius: 4.0,
        };
        geom.fill_phase(&mut phi, 1.0);
        assert_eq!(phi.get(10, 10), 1.0);
        assert_eq!(phi.get(10, 14), 1.0);
        assert_eq!(phi.get(14, 10), 1.0);
        assert_eq!(phi.get(10, 15), 0.0);
        assert_eq!(phi.get(15, 15), 0.0);
    }

    #[test]
    fn inverted_fill_swaps_phases() {
        let mut phi = Field2D::new(8, 8, 0.1, 0.1, 0.0);
        let geom = SeedGeometry::PlanarFront { fraction: 0.5 };
        geom.fill_phase(&mut phi, 0.0);
        assert_eq!(phi.get(2, 4), 0.0);
        assert_eq!(phi.get(5, 4), 1.0);
    }
}
