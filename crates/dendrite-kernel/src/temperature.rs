//! Explicit update for the temperature field with latent-heat release.

use crate::stencil::Laplacian;
use dendrite_core::Params;

/// One-cell temperature update.
///
/// Diffusion plus a latent-heat source proportional to the rate of
/// phase change at the same cell:
///
/// ```text
/// T_new = T_old + (∇²T + K·(φ_new − φ_old)/Δt)·Δt
/// ```
///
/// The source consumes the *already updated* φ of the same cell within
/// the same sweep — an intra-cell dependency only; no neighbour's new
/// φ is ever read.
#[derive(Clone, Copy, Debug)]
pub struct TemperatureUpdate {
    latent_heat: f64,
    dt: f64,
}

impl TemperatureUpdate {
    /// Build from the latent-heat coupling K and the timestep.
    pub fn new(latent_heat: f64, dt: f64) -> Self {
        Self { latent_heat, dt }
    }

    /// Extract the update constants from a parameter set.
    pub fn from_params(params: &Params) -> Self {
        Self::new(params.latent_heat, params.dt)
    }

    /// Advance T at one cell by one timestep.
    #[inline]
    pub fn apply(&self, temp_old: f64, lap: Laplacian, phi_new: f64, phi_old: f64) -> f64 {
        let source = (phi_new - phi_old) / self.dt * self.latent_heat;
        temp_old + (lap.sum() + source) * self.dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_diffusion_no_phase_change_is_identity() {
        let update = TemperatureUpdate::new(0.9, 1e-5);
        let lap = Laplacian { x: 0.0, y: 0.0 };
        assert_eq!(update.apply(0.4, lap, 0.7, 0.7), 0.4);
    }

    #[test]
    fn solidification_releases_latent_heat() {
        // φ rising (liquid → solid) must heat the cell.
        let update = TemperatureUpdate::new(0.9, 1e-5);
        let lap = Laplacian { x: 0.0, y: 0.0 };
        let t_new = update.apply(0.0, lap, 0.6, 0.5);
        // source = 0.1/1e-5 * 0.9 = 9000; ΔT = 9000 * 1e-5 = 0.09
        assert!((t_new - 0.09).abs() < 1e-12);
    }

    #[test]
    fn melting_absorbs_heat() {
        let update = TemperatureUpdate::new(0.9, 1e-5);
        let lap = Laplacian { x: 0.0, y: 0.0 };
        assert!(update.apply(0.0, lap, 0.4, 0.5) < 0.0);
    }

    #[test]
    fn diffusion_term_scales_with_dt() {
        let update = TemperatureUpdate::new(0.0, 2e-5);
        let lap = Laplacian { x: 300.0, y: 200.0 };
        let t_new = update.apply(1.0, lap, 0.5, 0.5);
        assert!((t_new - (1.0 + 500.0 * 2e-5)).abs() < 1e-15);
    }

    #[test]
    fn phase_increment_cancellation_is_exact() {
        // The Δt in the source cancels the outer Δt: the temperature
        // kick from phase change is K·Δφ regardless of timestep.
        for dt in [1e-6, 1e-5, 1e-3] {
            let update = TemperatureUpdate::new(0.9, dt);
            let lap = Laplacian { x: 0.0, y: 0.0 };
            let t_new = update.apply(0.0, lap, 1.0, 0.0);
            assert!((t_new - 0.9).abs() < 1e-12, "dt = {dt}: {t_new}");
        }
    }
}
