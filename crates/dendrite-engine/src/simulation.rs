//! The double-buffered time stepper.

use std::fmt;

use dendrite_core::{
    ConfigError, Field2D, FieldName, FieldPair, Params, Snapshot, SnapshotKind, SnapshotSink,
    StepError,
};
use dendrite_kernel::{
    stencil, Anisotropy, DrivingForce, NoiseSource, PhaseUpdate, SeededNoise, TemperatureUpdate,
};

use crate::boundary::BoundaryKind;
use crate::cancel::CancelToken;
use crate::init::SeedGeometry;

// ── Run states and outcomes ─────────────────────────────────────

/// Lifecycle state of a [`Simulation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    /// Constructed and initialized; no sweep has run yet.
    Initializing,
    /// At least one sweep has been committed.
    Running,
    /// All configured steps completed.
    Completed,
    /// Stopped early by a cancellation request.
    Interrupted,
}

/// How a [`Simulation::run`] ended. Interruption is a normal outcome,
/// not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// Reached the configured total step count.
    Completed {
        /// Number of steps committed.
        steps: u64,
    },
    /// A cancellation request stopped the run.
    Interrupted {
        /// Last fully committed step.
        step: u64,
    },
}

// ── Builder ─────────────────────────────────────────────────────

/// Builder for a [`Simulation`].
///
/// All knobs beyond [`Params`] have reference defaults: a quarter-width
/// planar front, zero-flux boundaries, and a ChaCha8 noise source
/// seeded from `params.seed`.
pub struct SimulationBuilder {
    params: Params,
    geometry: SeedGeometry,
    boundary: BoundaryKind,
    noise: Option<Box<dyn NoiseSource>>,
    initial: Option<(Field2D, Field2D)>,
    start_step: u64,
}

impl SimulationBuilder {
    /// Set the initial seed geometry for φ.
    pub fn seed_geometry(mut self, geometry: SeedGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Set the boundary treatment (default: zero-flux).
    pub fn boundary(mut self, boundary: BoundaryKind) -> Self {
        self.boundary = boundary;
        self
    }

    /// Replace the noise source. Use [`ZeroNoise`]
    /// (dendrite_kernel::ZeroNoise) for noiseless runs.
    ///
    /// [`ZeroNoise`]: dendrite_kernel::ZeroNoise
    pub fn noise(mut self, noise: Box<dyn NoiseSource>) -> Self {
        self.noise = Some(noise);
        self
    }

    /// Start from externally supplied φ and T fields instead of the
    /// seed-geometry fill. This is the restart path: a driver that
    /// parsed an earlier snapshot resumes from it. The fields must
    /// match the configured grid shape; their boundary ring is
    /// rebuilt during initialization.
    pub fn initial_fields(mut self, phi: Field2D, temp: Field2D) -> Self {
        self.initial = Some((phi, temp));
        self
    }

    /// Resume the step counter at `step` instead of 0. Used together
    /// with [`initial_fields`](Self::initial_fields) to continue an
    /// earlier run: the noise stream is keyed by absolute step number,
    /// so a resumed run replays the uninterrupted one exactly.
    pub fn resume_from(mut self, step: u64) -> Self {
        self.start_step = step;
        self
    }

    /// Validate the configuration and build the simulation.
    pub fn build(self) -> Result<Simulation, ConfigError> {
        self.params.validate()?;
        let p = &self.params;

        let (mut phi, mut temp) = match self.initial {
            Some((phi, temp)) => {
                for field in [&phi, &temp] {
                    if field.nx() != p.nx || field.ny() != p.ny {
                        return Err(ConfigError::InitialFieldShape {
                            expected: (p.nx, p.ny),
                            got: (field.nx(), field.ny()),
                        });
                    }
                }
                (phi, temp)
            }
            None => {
                let mut phi = Field2D::new(p.nx, p.ny, p.dx, p.dy, 0.0);
                let mut temp = Field2D::new(p.nx, p.ny, p.dx, p.dy, 0.0);
                self.geometry.fill_phase(&mut phi, p.phi_fill);
                for i in temp.interior_x() {
                    for j in temp.interior_y() {
                        temp.set(i, j, p.temp_fill);
                    }
                }
                (phi, temp)
            }
        };

        self.boundary.apply(&mut phi);
        self.boundary.apply(&mut temp);

        let noise = self
            .noise
            .unwrap_or_else(|| Box::new(SeededNoise::new(p.seed)));

        Ok(Simulation {
            anisotropy: Anisotropy::from_params(p),
            driving: DrivingForce::from_params(p),
            phase_update: PhaseUpdate::from_params(p),
            temp_update: TemperatureUpdate::from_params(p),
            phase: FieldPair::new(phi),
            temp: FieldPair::new(temp),
            step: self.start_step,
            state: RunState::Initializing,
            boundary: self.boundary,
            cancel: CancelToken::new(),
            noise,
            params: self.params,
        })
    }
}

// ── Simulation ──────────────────────────────────────────────────

/// The time stepper: owns the double-buffered field state and drives
/// the per-timestep pipeline.
///
/// # Ownership model
///
/// All mutating methods take `&mut self`; field accessors borrow the
/// current buffers, so a caller cannot observe a half-applied sweep.
/// Between steps the buffers are always in the committed state.
///
/// # Example
///
/// ```ignore
/// let mut sim = Simulation::new(params)?;
/// let mut sink = MemorySink::new();
/// let outcome = sim.run(&mut sink)?;
/// ```
pub struct Simulation {
    params: Params,
    phase: FieldPair,
    temp: FieldPair,
    step: u64,
    state: RunState,
    boundary: BoundaryKind,
    noise: Box<dyn NoiseSource>,
    cancel: CancelToken,
    anisotropy: Anisotropy,
    driving: DrivingForce,
    phase_update: PhaseUpdate,
    temp_update: TemperatureUpdate,
}

impl Simulation {
    /// Build with reference defaults (planar front, zero-flux
    /// boundaries, seeded noise).
    pub fn new(params: Params) -> Result<Self, ConfigError> {
        Self::builder(params).build()
    }

    /// Start configuring a simulation.
    pub fn builder(params: Params) -> SimulationBuilder {
        SimulationBuilder {
            params,
            geometry: SeedGeometry::default(),
            boundary: BoundaryKind::default(),
            noise: None,
            initial: None,
            start_step: 0,
        }
    }

    /// The parameter set this simulation runs under.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Last fully committed step (0 before any sweep).
    pub fn current_step(&self) -> u64 {
        self.step
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// The current φ field.
    pub fn phase(&self) -> &Field2D {
        self.phase.current()
    }

    /// The current T field.
    pub fn temperature(&self) -> &Field2D {
        self.temp.current()
    }

    /// A clone of the cancellation token. Cancel it from any thread;
    /// the run stops at the next sweep boundary.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Execute one full timestep: sweep into the scratch buffers,
    /// boundary pass, non-finite guard, swap.
    ///
    /// Every interior cell reads the *old* buffers only; the one
    /// exception is the temperature source term, which uses the φ
    /// value just written for the same cell. On error the swap has
    /// not happened and the current buffers still hold the last
    /// valid state.
    pub fn step_once(&mut self) -> Result<(), StepError> {
        let next = self.step + 1;
        self.noise.begin_sweep(next);

        let (phi_old, phi_new) = self.phase.split();
        let (temp_old, temp_new) = self.temp.split();

        for i in phi_old.interior_x() {
            for j in phi_old.interior_y() {
                let lap_phi = stencil::laplacian(phi_old, i, j);
                let lap_temp = stencil::laplacian(temp_old, i, j);
                let grad = stencil::gradient(phi_old, i, j);
                let mixed = stencil::mixed_xy(phi_old, i, j);

                let aniso = self.anisotropy.evaluate(grad, mixed);
                let driving =
                    self.driving
                        .evaluate(phi_old.get(i, j), temp_old.get(i, j), &mut *self.noise);

                let phi_next = self
                    .phase_update
                    .apply(phi_old.get(i, j), lap_phi, driving, &aniso);
                phi_new.set(i, j, phi_next);
                temp_new.set(
                    i,
                    j,
                    self.temp_update
                        .apply(temp_old.get(i, j), lap_temp, phi_next, phi_old.get(i, j)),
                );
            }
        }

        self.boundary.apply(self.phase.scratch_mut());
        self.boundary.apply(self.temp.scratch_mut());

        if let Some((i, j)) = self.phase.scratch().first_non_finite() {
            return Err(StepError::NonFinite {
                field: FieldName::Phase,
                step: next,
                i,
                j,
            });
        }
        if let Some((i, j)) = self.temp.scratch().first_non_finite() {
            return Err(StepError::NonFinite {
                field: FieldName::Temperature,
                step: next,
                i,
                j,
            });
        }

        self.phase.swap();
        self.temp.swap();
        self.step = next;
        self.state = RunState::Running;
        Ok(())
    }

    /// Drive the run to completion, interruption, or numerical failure.
    ///
    /// Emits step-0 snapshots on first entry, periodic snapshots every
    /// `snapshot_interval` steps, and a guaranteed pair of final
    /// snapshots on *every* exit path: `Final` at completion, `Final`
    /// of the last valid state when a sweep diverges, `Interrupt` when
    /// the cancellation token fires.
    pub fn run(&mut self, sink: &mut dyn SnapshotSink) -> Result<RunOutcome, StepError> {
        match self.state {
            RunState::Completed => return Ok(RunOutcome::Completed { steps: self.step }),
            RunState::Interrupted => return Ok(RunOutcome::Interrupted { step: self.step }),
            RunState::Initializing => {
                self.emit_pair(sink, SnapshotKind::Initial);
                self.state = RunState::Running;
            }
            RunState::Running => {}
        }

        while self.step < self.params.total_steps {
            if self.cancel.is_cancelled() {
                self.state = RunState::Interrupted;
                self.emit_pair(sink, SnapshotKind::Interrupt);
                return Ok(RunOutcome::Interrupted { step: self.step });
            }
            match self.step_once() {
                Ok(()) => {
                    if self.step % self.params.snapshot_interval == 0
                        && self.step != self.params.total_steps
                    {
                        self.emit_pair(sink, SnapshotKind::Periodic);
                    }
                }
                Err(err) => {
                    // The failed sweep was never swapped in; preserve
                    // the last valid state for post-mortem inspection.
                    self.emit_pair(sink, SnapshotKind::Final);
                    return Err(err);
                }
            }
        }

        self.state = RunState::Completed;
        self.emit_pair(sink, SnapshotKind::Final);
        Ok(RunOutcome::Completed { steps: self.step })
    }

    fn emit_pair(&self, sink: &mut dyn SnapshotSink, kind: SnapshotKind) {
        sink.emit(Snapshot {
            field: FieldName::Phase,
            step: self.step,
            kind,
            data: self.phase.current().clone(),
        });
        sink.emit(Snapshot {
            field: FieldName::Temperature,
            step: self.step,
            kind,
            data: self.temp.current().clone(),
        });
    }
}

impl fmt::Debug for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulation")
            .field("step", &self.step)
            .field("state", &self.state)
            .field("grid", &(self.params.nx, self.params.ny))
            .field("boundary", &self.boundary)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{MemorySink, NullSink};
    use dendrite_kernel::ZeroNoise;

    fn small_params() -> Params {
        Params {
            nx: 10,
            ny: 10,
            dx: 0.1,
            dy: 0.1,
            total_steps: 10,
            snapshot_interval: 3,
            delta: 0.0,
            noise_amplitude: 0.0,
            ..Params::default()
        }
    }

    #[test]
    fn new_starts_initializing_at_step_zero() {
        let sim = Simulation::new(small_params()).unwrap();
        assert_eq!(sim.current_step(), 0);
        assert_eq!(sim.state(), RunState::Initializing);
    }

    #[test]
    fn invalid_params_rejected_at_build() {
        let params = Params {
            dt: 0.0,
            ..small_params()
        };
        assert!(Simulation::new(params).is_err());
    }

    #[test]
    fn initial_boundary_pass_applied_before_first_step() {
        let sim = Simulation::new(small_params()).unwrap();
        let phi = sim.phase();
        for j in 0..10 {
            assert_eq!(phi.get(0, j), phi.get(1, j));
            assert_eq!(phi.get(9, j), phi.get(8, j));
        }
    }

    #[test]
    fn step_once_advances_and_transitions_to_running() {
        let mut sim = Simulation::new(small_params()).unwrap();
        sim.step_once().unwrap();
        assert_eq!(sim.current_step(), 1);
        assert_eq!(sim.state(), RunState::Running);
    }

    #[test]
    fn run_completes_and_reports_steps() {
        let mut sim = Simulation::new(small_params()).unwrap();
        let outcome = sim.run(&mut NullSink).unwrap();
        assert_eq!(outcome, RunOutcome::Completed { steps: 10 });
        assert_eq!(sim.state(), RunState::Completed);
    }

    #[test]
    fn run_after_completion_is_a_no_op() {
        let mut sim = Simulation::new(small_params()).unwrap();
        sim.run(&mut NullSink).unwrap();
        let mut sink = MemorySink::new();
        let outcome = sim.run(&mut sink).unwrap();
        assert_eq!(outcome, RunOutcome::Completed { steps: 10 });
        assert!(sink.snapshots().is_empty(), "no re-emission after completion");
    }

    #[test]
    fn snapshot_cadence_and_labels() {
        let mut sim = Simulation::new(small_params()).unwrap();
        let mut sink = MemorySink::new();
        sim.run(&mut sink).unwrap();
        // Initial pair + periodic pairs at 3, 6, 9 + final pair at 10.
        assert_eq!(
            sink.labels(),
            vec![
                "phi_0", "temp_0", "phi_3", "temp_3", "phi_6", "temp_6", "phi_9", "temp_9",
                "phi_10", "temp_10",
            ]
        );
        let kinds: Vec<SnapshotKind> = sink.snapshots().iter().map(|s| s.kind).collect();
        assert_eq!(kinds[0], SnapshotKind::Initial);
        assert_eq!(kinds[2], SnapshotKind::Periodic);
        assert_eq!(kinds[8], SnapshotKind::Final);
    }

    #[test]
    fn completion_step_emits_final_not_periodic() {
        let params = Params {
            total_steps: 6,
            snapshot_interval: 3,
            ..small_params()
        };
        let mut sim = Simulation::new(params).unwrap();
        let mut sink = MemorySink::new();
        sim.run(&mut sink).unwrap();
        // Step 6 is both on-cadence and final; only the final pair is
        // emitted for it.
        assert_eq!(
            sink.labels(),
            vec!["phi_0", "temp_0", "phi_3", "temp_3", "phi_6", "temp_6"]
        );
        assert_eq!(sink.snapshots()[4].kind, SnapshotKind::Final);
    }

    #[test]
    fn cancellation_yields_interrupt_snapshot() {
        let mut sim = Simulation::new(small_params()).unwrap();
        let token = sim.cancel_token();
        let mut sink = MemorySink::new();
        token.cancel();
        let outcome = sim.run(&mut sink).unwrap();
        assert_eq!(outcome, RunOutcome::Interrupted { step: 0 });
        assert_eq!(sim.state(), RunState::Interrupted);
        let last = sink.snapshots().last().unwrap();
        assert_eq!(last.kind, SnapshotKind::Interrupt);
        assert_eq!(last.label(), "temp_int_0");
    }

    #[test]
    fn interrupt_preserves_committed_state() {
        // Run a few steps, then cancel: the interrupt snapshot must
        // match the live field exactly.
        let mut sim = Simulation::new(small_params()).unwrap();
        for _ in 0..4 {
            sim.step_once().unwrap();
        }
        sim.cancel_token().cancel();
        let mut sink = MemorySink::new();
        let outcome = sim.run(&mut sink).unwrap();
        assert_eq!(outcome, RunOutcome::Interrupted { step: 4 });
        let phi_snap = &sink.snapshots()[sink.snapshots().len() - 2];
        assert_eq!(phi_snap.step, 4);
        assert_eq!(&phi_snap.data, sim.phase());
    }

    #[test]
    fn non_finite_sweep_fails_without_corrupting_state() {
        let params = Params {
            total_steps: 5,
            ..small_params()
        };
        let mut phi = Field2D::new(10, 10, 0.1, 0.1, 0.0);
        // Adjacent opposite-sign near-max values overflow the Laplacian.
        phi.set(4, 5, 1e308);
        phi.set(5, 5, -1e308);
        let temp = Field2D::new(10, 10, 0.1, 0.1, 0.0);
        let mut sim = Simulation::builder(params)
            .initial_fields(phi, temp)
            .build()
            .unwrap();
        let mut sink = MemorySink::new();
        let err = sim.run(&mut sink).unwrap_err();
        match err {
            StepError::NonFinite { step: 1, .. } => {}
            other => panic!("expected NonFinite at step 1, got {other:?}"),
        }
        // Last valid state (step 0) was emitted and is still current.
        assert_eq!(sim.current_step(), 0);
        let last = sink.snapshots().last().unwrap();
        assert_eq!(last.kind, SnapshotKind::Final);
        assert_eq!(last.step, 0);
        assert!(sim.phase().first_non_finite().is_none());
    }

    #[test]
    fn initial_field_shape_mismatch_rejected() {
        let phi = Field2D::new(5, 5, 0.1, 0.1, 0.0);
        let temp = Field2D::new(5, 5, 0.1, 0.1, 0.0);
        let err = Simulation::builder(small_params())
            .initial_fields(phi, temp)
            .build()
            .unwrap_err();
        match err {
            ConfigError::InitialFieldShape {
                expected: (10, 10),
                got: (5, 5),
            } => {}
            other => panic!("expected InitialFieldShape, got {other:?}"),
        }
    }

    #[test]
    fn zero_noise_uniform_interior_is_steady() {
        // A flat φ with zero gradient and zero noise must not move,
        // apart from the driving force vanishing at φ ∈ {0, 1}.
        let params = Params {
            phi_fill: 1.0,
            ..small_params()
        };
        let mut sim = Simulation::builder(params)
            .seed_geometry(SeedGeometry::PlanarFront { fraction: 0.0 })
            .noise(Box::new(ZeroNoise))
            .build()
            .unwrap();
        // fraction 0: every interior cell is 1 − phi_fill = 0.
        let before = sim.phase().clone();
        for _ in 0..5 {
            sim.step_once().unwrap();
        }
        assert_eq!(sim.phase(), &before);
    }

    #[test]
    fn debug_impl_reports_step_and_state() {
        let sim = Simulation::new(small_params()).unwrap();
        let text = format!("{sim:?}");
        assert!(text.contains("Simulation"));
        assert!(text.contains("Initializing"));
    }
}
