//! Time-stepping engine for the dendrite phase-field simulator.
//!
//! [`Simulation`] owns the double-buffered φ and T state and drives
//! the per-timestep pipeline: full-grid sweep (stencil → anisotropy →
//! driving force → phase/temperature updates, reading old buffers
//! only) → boundary conditions on the scratch buffers → non-finite
//! guard → buffer swap → snapshot emission on the configured cadence.
//!
//! A sweep is atomic from the observer's perspective: either it has
//! not started or it is fully committed, boundary pass and swap
//! included. Cancellation is cooperative and polled once per sweep
//! boundary.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod cancel;
pub mod init;
pub mod simulation;
pub mod sink;

pub use boundary::BoundaryKind;
pub use cancel::CancelToken;
pub use init::SeedGeometry;
pub use simulation::{RunOutcome, RunState, Simulation, SimulationBuilder};
pub use sink::{ChannelSink, MemorySink, NullSink};
