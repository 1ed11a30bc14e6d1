//! Snapshot payloads handed to external I/O collaborators.
//!
//! The engine emits one [`Snapshot`] per field at step 0, on the
//! configured cadence, at completion, and on interruption. Consumers
//! (CSV writers, plotters) receive an owned copy of the grid, so the
//! engine is free to reuse its buffers on the very next sweep.

use std::fmt;

use crate::field::Field2D;

/// Which physical field a snapshot carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldName {
    /// The order parameter φ.
    Phase,
    /// The temperature field T.
    Temperature,
}

impl FieldName {
    /// Short name used in snapshot labels: `phi` or `temp`.
    pub fn short_name(self) -> &'static str {
        match self {
            Self::Phase => "phi",
            Self::Temperature => "temp",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Why a snapshot was emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapshotKind {
    /// The initial state at step 0, after fills and the first
    /// boundary pass.
    Initial,
    /// Periodic emission on the configured cadence.
    Periodic,
    /// The state at normal completion, or the last valid state when
    /// the run aborts on a numerical failure.
    Final,
    /// Checkpoint taken when a cancellation request stopped the run.
    Interrupt,
}

/// An immutable copy of one field at one step, plus a human-readable
/// label. The core dictates neither file format nor path.
#[derive(Clone, Debug)]
pub struct Snapshot {
    /// Which field this is.
    pub field: FieldName,
    /// The step the state belongs to.
    pub step: u64,
    /// Emission reason.
    pub kind: SnapshotKind,
    /// The field data.
    pub data: Field2D,
}

impl Snapshot {
    /// Label in the reference output scheme: `phi_0`, `temp_3000`,
    /// `phi_int_1234` for interrupt checkpoints.
    pub fn label(&self) -> String {
        match self.kind {
            SnapshotKind::Interrupt => {
                format!("{}_int_{}", self.field.short_name(), self.step)
            }
            _ => format!("{}_{}", self.field.short_name(), self.step),
        }
    }
}

/// Consumer of emitted snapshots.
///
/// Implementations own serialization and visualization; they never
/// feed data back into the engine. An implementation backed by a
/// channel may hand snapshots to another thread — the payload is
/// owned, so this is safe while the engine keeps stepping.
pub trait SnapshotSink {
    /// Accept one snapshot.
    fn emit(&mut self, snapshot: Snapshot);
}
