// src/simulation/mod.rs

//! Evaluates `StatePreparation`s into `AmplitudeVector`s.
//!
//! `SimulationBackend` is the narrow contract the pipeline depends on.
//! `Simulator` implements it in closed form: one qubit needs nothing more
//! than a 2x2 matrix product per rotation.

pub(crate) mod engine;

use crate::core::{AmplitudeVector, AnomalyError};
use crate::preparation::StatePreparation;
use crate::validation::validate_state;
use engine::SimulationEngine;
use tracing::{debug, trace};

/// Capability to turn a preparation into its normalized amplitude vector.
///
/// Implementations need not be reentrant; callers running several
/// independent pipelines give each its own backend.
pub trait SimulationBackend {
    /// Simulates `prep` starting from `|0>`.
    ///
    /// # Errors
    /// `AnomalyError::Simulation` if the backend cannot be initialized or the
    /// preparation cannot be realized.
    fn simulate(&self, prep: &StatePreparation) -> Result<AmplitudeVector, AnomalyError>;
}

/// Closed-form single-qubit backend.
#[derive(Debug, Default)] // Allows Simulator::default() -> Simulator::new()
pub struct Simulator {
    norm_tolerance: Option<f64>,
}

impl Simulator {
    /// Creates a new Simulator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the normalization tolerance used to validate results.
    ///
    /// # Errors
    /// Returns `AnomalyError::Configuration` if `tolerance` is negative or not finite.
    pub fn with_norm_tolerance(mut self, tolerance: f64) -> Result<Self, AnomalyError> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(AnomalyError::configuration(format!(
                "normalization tolerance must be a finite non-negative number, got {}",
                tolerance
            )));
        }
        self.norm_tolerance = Some(tolerance);
        Ok(self)
    }
}

impl SimulationBackend for Simulator {
    fn simulate(&self, prep: &StatePreparation) -> Result<AmplitudeVector, AnomalyError> {
        let mut engine = SimulationEngine::init();
        for rotation in prep.rotations() {
            engine.apply_rotation(rotation)?;
            trace!(%rotation, state = %engine.get_state(), "Applied rotation");
        }

        let state = engine.into_state();
        validate_state(&state, self.norm_tolerance)?;
        debug!(preparation = %prep, %state, "Simulated preparation");
        Ok(state)
    }
}

impl<B: SimulationBackend + ?Sized> SimulationBackend for &B {
    fn simulate(&self, prep: &StatePreparation) -> Result<AmplitudeVector, AnomalyError> {
        (**self).simulate(prep)
    }
}
