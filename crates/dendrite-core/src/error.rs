//! Error types for the dendrite engine.
//!
//! Two fatal classes: [`ConfigError`] (caught at construction, the
//! simulation never starts) and [`StepError`] (numerical instability
//! detected mid-run). Interruption is *not* an error — it is a normal
//! outcome reported through `RunOutcome` in the engine crate.

use std::error::Error;
use std::fmt;

use crate::snapshot::FieldName;

/// Invalid or missing simulation constants, rejected at construction.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Grid smaller than 3 cells on an axis has no interior to update.
    GridTooSmall {
        /// Configured cell count along x.
        nx: usize,
        /// Configured cell count along y.
        ny: usize,
    },
    /// A constant that must be finite and strictly positive is not
    /// (spacing, timestep, τ, ε).
    NonPositiveConstant {
        /// Parameter name.
        name: &'static str,
        /// The offending value.
        value: f64,
    },
    /// Anisotropy fold order must be at least 1.
    FoldOrderZero,
    /// Noise amplitude must be finite and non-negative.
    InvalidNoiseAmplitude {
        /// The offending value.
        value: f64,
    },
    /// Snapshot cadence of zero would divide by zero at every step.
    ZeroSnapshotInterval,
    /// A physical constant is NaN or infinite.
    NonFiniteConstant {
        /// Parameter name.
        name: &'static str,
        /// The offending value.
        value: f64,
    },
    /// Externally supplied initial fields do not match the configured
    /// grid shape.
    InitialFieldShape {
        /// Shape demanded by the parameters, `(nx, ny)`.
        expected: (usize, usize),
        /// Shape of the supplied field.
        got: (usize, usize),
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GridTooSmall { nx, ny } => {
                write!(f, "grid {nx}x{ny} has no interior (minimum 3x3)")
            }
            Self::NonPositiveConstant { name, value } => {
                write!(f, "{name} must be finite and positive, got {value}")
            }
            Self::FoldOrderZero => write!(f, "anisotropy fold order must be at least 1"),
            Self::InvalidNoiseAmplitude { value } => {
                write!(f, "noise amplitude must be finite and >= 0, got {value}")
            }
            Self::ZeroSnapshotInterval => write!(f, "snapshot interval must be at least 1"),
            Self::NonFiniteConstant { name, value } => {
                write!(f, "{name} must be finite, got {value}")
            }
            Self::InitialFieldShape { expected, got } => write!(
                f,
                "initial field shape {}x{} does not match grid {}x{}",
                got.0, got.1, expected.0, expected.1
            ),
        }
    }
}

impl Error for ConfigError {}

/// Fatal numerical failure during a sweep.
///
/// Raised when a freshly computed buffer contains a non-finite value.
/// The check runs *before* the buffer swap, so the last valid state is
/// still current when this error surfaces and the engine emits a final
/// snapshot of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepError {
    /// A non-finite φ or T value emerged from the explicit update.
    NonFinite {
        /// Which field diverged.
        field: FieldName,
        /// The step whose sweep produced the value.
        step: u64,
        /// x index of the first offending cell.
        i: usize,
        /// y index of the first offending cell.
        j: usize,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { field, step, i, j } => write!(
                f,
                "non-finite {field} value at cell ({i}, {j}) during step {step}"
            ),
        }
    }
}

impl Error for StepError {}
