//! Explicit Euler update for the anisotropic Allen-Cahn equation.

use crate::anisotropy::AnisotropyTerms;
use crate::stencil::Laplacian;
use dendrite_core::Params;

/// One-cell phase update.
///
/// Combines the Laplacian, the driving force, and the angle-weighted
/// anisotropy correction into
///
/// ```text
/// φ_new = φ_old + (ε²·∇²φ + driving + anisoTerm)·(Δt/τ)
/// ```
///
/// Stability of the explicit scheme is a precondition on `Δt/τ` and
/// `ε²/Δx²`; it is not checked here (see `Params::stability_ratio`).
#[derive(Clone, Copy, Debug)]
pub struct PhaseUpdate {
    epsilon: f64,
    tau: f64,
    dt: f64,
}

impl PhaseUpdate {
    /// Build from interface width ε, relaxation time τ, and timestep.
    pub fn new(epsilon: f64, tau: f64, dt: f64) -> Self {
        Self { epsilon, tau, dt }
    }

    /// Extract the update constants from a parameter set.
    pub fn from_params(params: &Params) -> Self {
        Self::new(params.epsilon, params.tau, params.dt)
    }

    /// Advance φ at one cell by one timestep.
    ///
    /// `lap` is the axis-split Laplacian of the *old* φ, `driving` the
    /// reaction term, and `aniso` the cell's anisotropy result. The
    /// arithmetic mirrors the reference scheme term for term so the
    /// physics is preserved bit-for-bit.
    #[inline]
    pub fn apply(&self, phi_old: f64, lap: Laplacian, driving: f64, aniso: &AnisotropyTerms) -> f64 {
        let eps2 = self.epsilon * self.epsilon;
        let lap_sum = lap.sum();
        let c1 = lap.y - lap.x;
        let s2t = (2.0 * aniso.theta).sin();
        let c2t = (2.0 * aniso.theta).cos();
        let aniso_term = eps2 * aniso.eta * aniso.eta_d1 * (s2t * c1 + 2.0 * c2t * aniso.mixed_xy)
            - 0.5
                * eps2
                * (aniso.eta_d1 * aniso.eta_d1 + aniso.eta * aniso.eta_d2)
                * (2.0 * s2t * aniso.mixed_xy - lap_sum - c2t * c1);
        let total = eps2 * lap_sum + driving + aniso_term;
        phi_old + total * (self.dt / self.tau)
    }
}
