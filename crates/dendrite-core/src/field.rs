//! Dense 2D field storage and the double buffer used by the time stepper.

use std::ops::Range;

/// A dense `nx × ny` grid of f64 values with fixed spacing.
///
/// Storage is row-major with the x index `i` as the major axis:
/// cell `(i, j)` lives at `data[i * ny + j]`, matching the sweep
/// order of the update loop. Indices `i ∈ [0, nx)`, `j ∈ [0, ny)`;
/// the interior is `[1, nx-1) × [1, ny-1)` and the outermost ring is
/// boundary-only — never written by stencil updates, only mirrored.
///
/// Accessors go through slice indexing and therefore panic on
/// out-of-bounds coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Field2D {
    nx: usize,
    ny: usize,
    dx: f64,
    dy: f64,
    data: Vec<f64>,
}

impl Field2D {
    /// Create a grid with every cell set to `fill`.
    ///
    /// Callers are expected to have validated the dimensions and
    /// spacing (see [`Params::validate`](crate::Params::validate));
    /// the constructor only debug-asserts them.
    pub fn new(nx: usize, ny: usize, dx: f64, dy: f64, fill: f64) -> Self {
        debug_assert!(nx > 0 && ny > 0, "zero-sized grid");
        debug_assert!(dx > 0.0 && dy > 0.0, "non-positive spacing");
        Self {
            nx,
            ny,
            dx,
            dy,
            data: vec![fill; nx * ny],
        }
    }

    /// Number of cells along x.
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Number of cells along y.
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Grid spacing along x.
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Grid spacing along y.
    pub fn dy(&self) -> f64 {
        self.dy
    }

    /// Value at cell `(i, j)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        debug_assert!(i < self.nx && j < self.ny);
        self.data[i * self.ny + j]
    }

    /// Set cell `(i, j)` to `value`.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        debug_assert!(i < self.nx && j < self.ny);
        self.data[i * self.ny + j] = value;
    }

    /// Interior index range along x: `[1, nx-1)`.
    pub fn interior_x(&self) -> Range<usize> {
        1..self.nx.saturating_sub(1)
    }

    /// Interior index range along y: `[1, ny-1)`.
    pub fn interior_y(&self) -> Range<usize> {
        1..self.ny.saturating_sub(1)
    }

    /// Whether `(i, j)` is strictly interior (has all eight neighbours).
    #[inline]
    pub fn is_interior(&self, i: usize, j: usize) -> bool {
        i >= 1 && i + 1 < self.nx && j >= 1 && j + 1 < self.ny
    }

    /// Raw row-major cell data.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// First cell holding a non-finite value, scanning in row-major
    /// order. Used by the engine's instability guard before a buffer
    /// swap commits a sweep.
    pub fn first_non_finite(&self) -> Option<(usize, usize)> {
        self.data
            .iter()
            .position(|v| !v.is_finite())
            .map(|idx| (idx / self.ny, idx % self.ny))
    }
}

/// Double buffer for one field: the authoritative `current` state and
/// a write-only `scratch` for the sweep in flight.
///
/// Ownership of the two roles flips at every step boundary via
/// [`swap`](FieldPair::swap); no reference ever plays both roles at
/// once. The scratch interior is fully overwritten each sweep and the
/// scratch ring is rewritten by the boundary pass, so stale scratch
/// data is never observable after a swap.
#[derive(Clone, Debug)]
pub struct FieldPair {
    current: Field2D,
    scratch: Field2D,
}

impl FieldPair {
    /// Create a pair whose current and scratch buffers both start as
    /// copies of `initial`.
    pub fn new(initial: Field2D) -> Self {
        Self {
            scratch: initial.clone(),
            current: initial,
        }
    }

    /// The authoritative current state.
    pub fn current(&self) -> &Field2D {
        &self.current
    }

    /// Mutable access to the current state. Used only during
    /// initialization (fills and the initial boundary pass).
    pub fn current_mut(&mut self) -> &mut Field2D {
        &mut self.current
    }

    /// The scratch buffer a sweep writes into.
    pub fn scratch(&self) -> &Field2D {
        &self.scratch
    }

    /// Borrow `(current, scratch)` simultaneously for a sweep:
    /// read-only old state, writable new state.
    pub fn split(&mut self) -> (&Field2D, &mut Field2D) {
        (&self.current, &mut self.scratch)
    }

    /// Mutable access to the scratch buffer (boundary pass).
    pub fn scratch_mut(&mut self) -> &mut Field2D {
        &mut self.scratch
    }

    /// Commit a sweep: scratch becomes current, the old current
    /// becomes scratch for the next step.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.current, &mut self.scratch);
    }
}
