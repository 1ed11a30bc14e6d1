//! Central-difference stencil operators.
//!
//! All operators require a strictly interior `(i, j)` — that is the
//! caller's contract, debug-asserted here. The Laplacian is returned
//! split by axis because the anisotropy correction needs `lapY − lapX`
//! independently of the sum.

use dendrite_core::Field2D;

/// First-order gradient at a cell, second-order accurate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gradient {
    /// ∂f/∂x.
    pub x: f64,
    /// ∂f/∂y.
    pub y: f64,
}

/// Axis-split second derivatives at a cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Laplacian {
    /// ∂²f/∂x².
    pub x: f64,
    /// ∂²f/∂y².
    pub y: f64,
}

impl Laplacian {
    /// The full Laplacian `∂²f/∂x² + ∂²f/∂y²`.
    #[inline]
    pub fn sum(self) -> f64 {
        self.x + self.y
    }
}

/// Central-difference gradient of `f` at interior `(i, j)`.
#[inline]
pub fn gradient(f: &Field2D, i: usize, j: usize) -> Gradient {
    debug_assert!(f.is_interior(i, j), "stencil at boundary cell ({i}, {j})");
    Gradient {
        x: (f.get(i + 1, j) - f.get(i - 1, j)) * 0.5 / f.dx(),
        y: (f.get(i, j + 1) - f.get(i, j - 1)) * 0.5 / f.dy(),
    }
}

/// Mixed second partial ∂²f/∂x∂y of `f` at interior `(i, j)`.
#[inline]
pub fn mixed_xy(f: &Field2D, i: usize, j: usize) -> f64 {
    debug_assert!(f.is_interior(i, j), "stencil at boundary cell ({i}, {j})");
    (f.get(i + 1, j + 1) - f.get(i + 1, j - 1) - f.get(i - 1, j + 1) + f.get(i - 1, j - 1)) * 0.25
        / (f.dx() * f.dy())
}

/// Axis-split Laplacian of `f` at interior `(i, j)`.
#[inline]
pub fn laplacian(f: &Field2D, i: usize, j: usize) -> Laplacian {
    debug_assert!(f.is_interior(i, j), "stencil at boundary cell ({i}, {j})");
    let c = f.get(i, j);
    Laplacian {
        x: (f.get(i + 1, j) - 2.0 * c + f.get(i - 1, j)) / (f.dx() * f.dx()),
        y: (f.get(i, j + 1) - 2.0 * c + f.get(i, j - 1)) / (f.dy() * f.dy()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Field sampled from an analytic function of physical coordinates.
    fn sampled(nx: usize, ny: usize, h: f64, f: impl Fn(f64, f64) -> f64) -> Field2D {
        let mut field = Field2D::new(nx, ny, h, h, 0.0);
        for i in 0..nx {
            for j in 0..ny {
                field.set(i, j, f(i as f64 * h, j as f64 * h));
            }
        }
        field
    }

    #[test]
    fn laplacian_of_quadratic_is_four() {
        // f = x² + y² has exact Laplacian 4 under central differences,
        // independent of spacing.
        for h in [0.03, 0.1, 0.5] {
            let f = sampled(8, 8, h, |x, y| x * x + y * y);
            for i in f.interior_x() {
                for j in f.interior_y() {
                    let lap = laplacian(&f, i, j);
                    assert!(
                        (lap.sum() - 4.0).abs() < 1e-9,
                        "lap = {} at ({i}, {j}), h = {h}",
                        lap.sum()
                    );
                }
            }
        }
    }

    #[test]
    fn laplacian_axis_split_separates_curvature() {
        // f = x² is flat in y: lapX = 2, lapY = 0.
        let f = sampled(6, 6, 0.1, |x, _| x * x);
        let lap = laplacian(&f, 2, 3);
        assert!((lap.x - 2.0).abs() < 1e-9);
        assert!(lap.y.abs() < 1e-9);
    }

    #[test]
    fn gradient_of_linear_field_is_exact() {
        let f = sampled(6, 6, 0.1, |x, y| 3.0 * x - 2.0 * y);
        for i in f.interior_x() {
            for j in f.interior_y() {
                let g = gradient(&f, i, j);
                assert!((g.x - 3.0).abs() < 1e-9);
                assert!((g.y + 2.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn mixed_xy_of_bilinear_field_is_exact() {
        // f = x·y has ∂²f/∂x∂y = 1 exactly under the four-corner stencil.
        let f = sampled(6, 6, 0.2, |x, y| x * y);
        for i in f.interior_x() {
            for j in f.interior_y() {
                assert!((mixed_xy(&f, i, j) - 1.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn uniform_field_has_zero_derivatives() {
        let f = Field2D::new(5, 5, 0.1, 0.1, 7.0);
        let g = gradient(&f, 2, 2);
        let lap = laplacian(&f, 2, 2);
        assert_eq!(g, Gradient { x: 0.0, y: 0.0 });
        assert_eq!(lap.sum(), 0.0);
        assert_eq!(mixed_xy(&f, 2, 2), 0.0);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn boundary_cell_is_rejected_in_debug() {
        let f = Field2D::new(5, 5, 0.1, 0.1, 0.0);
        let _ = laplacian(&f, 0, 2);
    }
}
