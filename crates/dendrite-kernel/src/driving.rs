//! Double-well driving force with undercooling bias and thermal noise.

use std::f64::consts::PI;

use crate::noise::NoiseSource;
use dendrite_core::Params;

/// Tilted double-well reaction kinetics.
///
/// The local undercooling shifts the well balance through
/// `m(T) = (α/π)·atan(γ·(T_E − T))`, bounded in `(−α/2, α/2)`, and a
/// uniform draw per cell per step adds `A·(U − 0.5)` of thermal noise.
#[derive(Clone, Copy, Debug)]
pub struct DrivingForce {
    alpha: f64,
    gamma: f64,
    t_eq: f64,
    noise_amplitude: f64,
}

impl DrivingForce {
    /// Build from the coupling constants.
    pub fn new(alpha: f64, gamma: f64, t_eq: f64, noise_amplitude: f64) -> Self {
        Self {
            alpha,
            gamma,
            t_eq,
            noise_amplitude,
        }
    }

    /// Extract the driving-force constants from a parameter set.
    pub fn from_params(params: &Params) -> Self {
        Self::new(
            params.alpha,
            params.gamma,
            params.t_eq,
            params.noise_amplitude,
        )
    }

    /// The undercooling bias `m(T)`.
    #[inline]
    pub fn undercooling_bias(&self, temp: f64) -> f64 {
        (self.alpha / PI) * (self.gamma * (self.t_eq - temp)).atan()
    }

    /// Reaction term `φ·(1−φ)·(φ − 0.5 + m(T) + noise)` for one cell,
    /// consuming one uniform draw from `noise`.
    #[inline]
    pub fn evaluate(&self, phi: f64, temp: f64, noise: &mut dyn NoiseSource) -> f64 {
        let noise_term = self.noise_amplitude * (noise.next_uniform() - 0.5);
        let m = self.undercooling_bias(temp);
        phi * (1.0 - phi) * (phi - 0.5 + m + noise_term)
    }
}
