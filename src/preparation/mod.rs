// src/preparation/mod.rs

//! Defines `StatePreparation`, the ordered list of rotations that takes a
//! single qubit from `|0>` to the state under test, and the builders for
//! the expected and anomalous branches.
//!
//! A preparation only says *which* rotations to apply. Evaluating them is
//! the job of a `simulation::SimulationBackend`, so the metric pipeline can
//! be exercised against stub backends.

mod anomaly;

pub use anomaly::{build_anomalous, build_expected, draw_anomaly_parameters, AnomalyParameters, RandomSource};

use crate::operations::Rotation;
use std::fmt;

/// An ordered sequence of rotations applied to one qubit starting in `|0>`.
///
/// Analogy: a one-qubit `QuantumCircuit` without measurement.
#[derive(Clone, PartialEq)]
pub struct StatePreparation {
    /// Applied first to last. The order matters: rotations about different
    /// axes do not commute.
    rotations: Vec<Rotation>,
}

impl StatePreparation {
    /// Creates an empty preparation, which leaves the qubit in `|0>`.
    pub fn new() -> Self {
        Self { rotations: Vec::new() }
    }

    /// Returns a slice containing the ordered rotations.
    pub fn rotations(&self) -> &[Rotation] {
        &self.rotations
    }

    /// Returns the number of rotations.
    pub fn len(&self) -> usize {
        self.rotations.len()
    }

    /// Returns `true` if the preparation contains no rotations.
    pub fn is_empty(&self) -> bool {
        self.rotations.is_empty()
    }
}

impl Default for StatePreparation {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Rotation> for StatePreparation {
    fn from_iter<I: IntoIterator<Item = Rotation>>(iter: I) -> Self {
        Self { rotations: iter.into_iter().collect() }
    }
}

//-------------------------------------------------------------------------
// Preparation Builder
//-------------------------------------------------------------------------

/// A helper struct for constructing `StatePreparation` instances using method chaining.
///
/// The builder is the only way to append rotations; once `build` returns,
/// the preparation is immutable.
pub struct PreparationBuilder {
    preparation: StatePreparation,
}

impl PreparationBuilder {
    /// Creates a new, empty PreparationBuilder.
    pub fn new() -> Self {
        Self { preparation: StatePreparation::new() }
    }

    /// Appends a single rotation.
    pub fn add_op(mut self, rotation: Rotation) -> Self {
        self.preparation.rotations.push(rotation);
        self
    }

    /// Appends multiple rotations, in iterator order.
    pub fn add_ops<I>(mut self, rotations: I) -> Self
    where
        I: IntoIterator<Item = Rotation>,
    {
        self.preparation.rotations.extend(rotations);
        self
    }

    /// Finalizes the construction process and returns the built `StatePreparation`.
    pub fn build(self) -> StatePreparation {
        self.preparation
    }
}

impl Default for PreparationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StatePreparation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const WIRE: &str = "───";
        write!(f, "q0: |0>")?;
        for rotation in &self.rotations {
            write!(f, "{}{}", WIRE, rotation)?;
        }
        write!(f, "{}", WIRE)
    }
}

// Keep the Debug impl delegating to Display
impl fmt::Debug for StatePreparation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
