//! Per-cell numerics for the dendrite phase-field engine.
//!
//! The kernel is the bit-exact arithmetic core of the model: stencil
//! operators, the anisotropic interface-energy correction, the tilted
//! double-well driving force, and the explicit Euler update rules for
//! φ and T. All of it reads previous-step values only; the
//! read-old/write-new discipline is enforced by the engine's sweep.
//!
//! # Per-cell pipeline (one interior cell, one step)
//!
//! 1. [`stencil`] — gradients, mixed derivative, axis-split Laplacians
//! 2. [`Anisotropy::evaluate`] — θ, η(θ), η′, η″
//! 3. [`DrivingForce::evaluate`] — reaction term with thermal noise
//! 4. [`PhaseUpdate::apply`] then [`TemperatureUpdate::apply`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod anisotropy;
pub mod driving;
pub mod noise;
pub mod phase;
pub mod stencil;
pub mod temperature;

pub use anisotropy::{Anisotropy, AnisotropyTerms};
pub use driving::DrivingForce;
pub use noise::{NoiseSource, SeededNoise, ZeroNoise};
pub use phase::PhaseUpdate;
pub use stencil::{Gradient, Laplacian};
pub use temperature::TemperatureUpdate;
