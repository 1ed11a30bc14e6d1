//! Dendrite: phase-field simulation of dendritic solidification.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Dendrite sub-crates. For most users, adding `dendrite` as
//! a single dependency is sufficient.
//!
//! The model couples an anisotropic Allen-Cahn equation for the phase
//! field φ (0 liquid, 1 solid) to a heat equation with latent-heat
//! release, marched explicitly on a dense 2D grid. Runs are
//! deterministic: the same parameter set and seed reproduce fields
//! bit for bit.
//!
//! # Quick start
//!
//! ```rust
//! use dendrite::prelude::*;
//!
//! // A small, quick run: 10 steps of an undercooled melt with a
//! // planar solid front, snapshots every 5 steps.
//! let params = Params {
//!     nx: 32,
//!     ny: 32,
//!     total_steps: 10,
//!     snapshot_interval: 5,
//!     ..Params::default()
//! };
//!
//! let mut sim = Simulation::new(params).unwrap();
//! let mut sink = MemorySink::new();
//! let outcome = sim.run(&mut sink).unwrap();
//!
//! assert_eq!(outcome, RunOutcome::Completed { steps: 10 });
//! // Initial pair, periodic pair at step 5, final pair at step 10.
//! assert_eq!(sink.snapshots().len(), 6);
//! assert_eq!(sink.snapshots()[0].label(), "phi_0");
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`core`] | `dendrite-core` | Parameters, fields, snapshots, errors |
//! | [`kernel`] | `dendrite-kernel` | Stencils, anisotropy, update rules, noise |
//! | [`engine`] | `dendrite-engine` | The time stepper, boundaries, sinks |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Parameters, grid fields, snapshot payloads, and the error taxonomy
/// (`dendrite-core`).
pub use dendrite_core as core;

/// Per-cell numerics: stencil operators, anisotropy, driving force,
/// explicit update rules, and noise sources (`dendrite-kernel`).
pub use dendrite_kernel as kernel;

/// The double-buffered time stepper, boundary conditions, seed
/// geometries, cancellation, and snapshot sinks (`dendrite-engine`).
pub use dendrite_engine as engine;

/// Common imports for typical usage.
///
/// ```rust
/// use dendrite::prelude::*;
/// ```
pub mod prelude {
    // Parameters and state
    pub use dendrite_core::{Field2D, Params};

    // Snapshots
    pub use dendrite_core::{FieldName, Snapshot, SnapshotKind, SnapshotSink};

    // Errors
    pub use dendrite_core::{ConfigError, StepError};

    // Kernel extension points
    pub use dendrite_kernel::{NoiseSource, SeededNoise, ZeroNoise};

    // Engine
    pub use dendrite_engine::{
        BoundaryKind, CancelToken, ChannelSink, MemorySink, NullSink, RunOutcome, RunState,
        SeedGeometry, Simulation, SimulationBuilder,
    };
}
