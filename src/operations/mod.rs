// src/operations/mod.rs

//! Defines the single-qubit rotations a state preparation is made of.
//!
//! A rotation is a pair `(axis, angle)` and carries no simulation logic of
//! its own; backends decide how to evaluate it.

use std::fmt;

/// Rotation axis on the Bloch sphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// Rotation about X. `RX(π)` is the bit flip up to global phase.
    X,
    /// Rotation about Y. `RY(π/2)` takes `|0>` to the balanced superposition.
    Y,
    /// Rotation about Z. Changes relative phase only.
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        };
        write!(f, "{}", symbol)
    }
}

/// A rotation by `angle` radians about `axis`.
///
/// Analogy: `rx`/`ry`/`rz` gates applied to a single qubit.
#[derive(Debug, Clone, Copy, PartialEq)] // Using PartialEq only; f64 angles
pub struct Rotation {
    /// The axis rotated about.
    pub axis: Axis,
    /// Rotation angle in radians.
    pub angle: f64,
}

impl Rotation {
    /// Creates a rotation about `axis`.
    pub fn new(axis: Axis, angle: f64) -> Self {
        Self { axis, angle }
    }

    /// Shorthand for `Rotation::new(Axis::X, angle)`.
    pub fn rx(angle: f64) -> Self {
        Self::new(Axis::X, angle)
    }

    /// Shorthand for `Rotation::new(Axis::Y, angle)`.
    pub fn ry(angle: f64) -> Self {
        Self::new(Axis::Y, angle)
    }

    /// Shorthand for `Rotation::new(Axis::Z, angle)`.
    pub fn rz(angle: f64) -> Self {
        Self::new(Axis::Z, angle)
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}({:.4})", self.axis, self.angle)
    }
}
