//! Boundary conditions applied to a freshly computed buffer.
//!
//! The stencil never writes the outermost ring; after every sweep the
//! ring is rebuilt from the interior according to the configured
//! boundary kind, before the buffer swap commits the step.

use dendrite_core::Field2D;

/// Boundary treatment for both fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoundaryKind {
    /// Zero-flux (homogeneous Neumann): mirror each edge row/column
    /// from its nearest interior neighbour. Idempotent.
    #[default]
    ZeroFlux,
    /// Periodic: each edge copies the opposite side's nearest interior
    /// row/column, wrapping the domain into a torus.
    Periodic,
}

impl BoundaryKind {
    /// Rebuild the boundary ring of `field` from its interior.
    ///
    /// Rows (x edges) first, then columns (y edges); the column pass
    /// reads the already-rewritten edge rows, which fixes the corner
    /// cells the same way the reference scheme does.
    pub fn apply(self, field: &mut Field2D) {
        let nx = field.nx();
        let ny = field.ny();
        match self {
            Self::ZeroFlux => {
                for j in 0..ny {
                    field.set(0, j, field.get(1, j));
                    field.set(nx - 1, j, field.get(nx - 2, j));
                }
                for i in 0..nx {
                    field.set(i, 0, field.get(i, 1));
                    field.set(i, ny - 1, field.get(i, ny - 2));
                }
            }
            Self::Periodic => {
                for j in 0..ny {
                    field.set(0, j, field.get(nx - 2, j));
                    field.set(nx - 1, j, field.get(1, j));
                }
                for i in 0..nx {
                    field.set(i, 0, field.get(i, ny - 2));
                    field.set(i, ny - 1, field.get(i, 1));
                }
            }
        }
    }
}
