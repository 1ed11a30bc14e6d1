//! Simulation parameters and construction-time validation.

use crate::error::ConfigError;

/// Complete parameter set for a solidification run.
///
/// An explicit immutable value passed into the engine at construction;
/// there is no ambient/global configuration. The defaults reproduce the
/// reference Kobayashi setup: a 400×100 grid with a planar solid front,
/// four-fold anisotropy disabled, and output every 1000 steps.
///
/// [`validate`](Params::validate) must pass before a simulation is
/// built; the engine calls it for you.
#[derive(Clone, Debug, PartialEq)]
pub struct Params {
    /// Grid cells along x. Minimum 3 (the stencil needs an interior).
    pub nx: usize,
    /// Grid cells along y. Minimum 3.
    pub ny: usize,
    /// Grid spacing along x.
    pub dx: f64,
    /// Grid spacing along y.
    pub dy: f64,
    /// Timestep.
    pub dt: f64,
    /// Total number of timesteps for a full run.
    pub total_steps: u64,
    /// Emit snapshots every this many steps.
    pub snapshot_interval: u64,
    /// Interface relaxation time τ.
    pub tau: f64,
    /// Interface width ε.
    pub epsilon: f64,
    /// Anisotropy strength δ. Zero disables anisotropy.
    pub delta: f64,
    /// Anisotropy fold order m (4 for cubic crystal symmetry).
    pub fold: u32,
    /// Base orientation θ₀ of the anisotropy, radians.
    pub theta0: f64,
    /// Driving-force coupling constant α.
    pub alpha: f64,
    /// Undercooling sensitivity γ.
    pub gamma: f64,
    /// Thermal noise amplitude A. Zero disables noise.
    pub noise_amplitude: f64,
    /// Latent-heat coupling K.
    pub latent_heat: f64,
    /// Equilibrium temperature T_E.
    pub t_eq: f64,
    /// Initial φ value inside the seed region.
    pub phi_fill: f64,
    /// Initial uniform temperature.
    pub temp_fill: f64,
    /// RNG seed for the thermal noise source.
    pub seed: u64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            nx: 400,
            ny: 100,
            dx: 0.03,
            dy: 0.03,
            dt: 1e-5,
            total_steps: 50_000,
            snapshot_interval: 1000,
            tau: 3e-4,
            epsilon: 0.01,
            delta: 0.0,
            fold: 4,
            theta0: 0.0,
            alpha: 0.9,
            gamma: 10.0,
            noise_amplitude: 0.01,
            latent_heat: 0.9,
            t_eq: 1.0,
            phi_fill: 1.0,
            temp_fill: 0.0,
            seed: 0,
        }
    }
}

impl Params {
    /// Validate all structural invariants.
    ///
    /// Rejects grids without an interior, non-positive or non-finite
    /// spacing/timestep/τ/ε, a fold order of zero, a negative or
    /// non-finite noise amplitude, a zero snapshot interval, and any
    /// non-finite physical constant. Stability of the explicit scheme
    /// is deliberately *not* enforced; see
    /// [`stability_ratio`](Params::stability_ratio) for an advisory
    /// check.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.nx < 3 || self.ny < 3 {
            return Err(ConfigError::GridTooSmall {
                nx: self.nx,
                ny: self.ny,
            });
        }
        for (name, value) in [
            ("dx", self.dx),
            ("dy", self.dy),
            ("dt", self.dt),
            ("tau", self.tau),
            ("epsilon", self.epsilon),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositiveConstant { name, value });
            }
        }
        if self.fold < 1 {
            return Err(ConfigError::FoldOrderZero);
        }
        if !self.noise_amplitude.is_finite() || self.noise_amplitude < 0.0 {
            return Err(ConfigError::InvalidNoiseAmplitude {
                value: self.noise_amplitude,
            });
        }
        if self.snapshot_interval == 0 {
            return Err(ConfigError::ZeroSnapshotInterval);
        }
        for (name, value) in [
            ("delta", self.delta),
            ("theta0", self.theta0),
            ("alpha", self.alpha),
            ("gamma", self.gamma),
            ("latent_heat", self.latent_heat),
            ("t_eq", self.t_eq),
            ("phi_fill", self.phi_fill),
            ("temp_fill", self.temp_fill),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteConstant { name, value });
            }
        }
        Ok(())
    }

    /// Advisory explicit-scheme stability ratio for the phase equation:
    /// `(Δt/τ)·ε²·(2/Δx² + 2/Δy²)`. Values approaching 1 indicate the
    /// diffusive term alone can destabilize the update; drivers may
    /// warn, the engine does not reject.
    pub fn stability_ratio(&self) -> f64 {
        let eps2 = self.epsilon * self.epsilon;
        (self.dt / self.tau) * eps2 * (2.0 / (self.dx * self.dx) + 2.0 / (self.dy * self.dy))
    }
}
