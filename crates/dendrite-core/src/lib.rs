//! Core types for the dendrite phase-field solidification engine.
//!
//! This is the leaf crate with zero dependencies. It defines the
//! fundamental abstractions shared by the kernel and engine crates:
//! the simulation parameter set ([`Params`]), the dense grid type
//! ([`Field2D`]) and its double buffer ([`FieldPair`]), snapshot
//! payloads, and the error taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod field;
pub mod params;
pub mod snapshot;

pub use error::{ConfigError, StepError};
pub use field::{Field2D, FieldPair};
pub use params::Params;
pub use snapshot::{FieldName, Snapshot, SnapshotKind, SnapshotSink};
