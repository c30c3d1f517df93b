// src/core/state.rs

use num_complex::Complex;
use num_traits::{One, Zero};
use std::fmt;

/// The amplitude vector `(a0, a1)` of a single qubit.
///
/// Squared magnitudes give the probabilities of observing `|0>` and `|1>`.
/// A well-formed vector satisfies `|a0|² + |a1|² = 1` up to floating
/// tolerance; `validation::check_normalization` checks this, but nothing
/// here enforces it. Backends produce these values and the rest of the
/// crate only reads them.
#[derive(Debug, Clone, Copy, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct AmplitudeVector {
    amplitudes: [Complex<f64>; 2],
}

impl AmplitudeVector {
    /// Creates a vector from the `|0>` and `|1>` amplitudes, as given.
    pub fn new(a0: Complex<f64>, a1: Complex<f64>) -> Self {
        Self { amplitudes: [a0, a1] }
    }

    /// The all-zero basis state `|0>`, starting point of every preparation.
    pub fn ground() -> Self {
        Self::new(Complex::one(), Complex::zero())
    }

    /// Read-only access to both amplitudes, `|0>` first.
    pub fn vector(&self) -> &[Complex<f64>; 2] {
        &self.amplitudes
    }

    /// Amplitude of `|0>`.
    pub fn a0(&self) -> Complex<f64> {
        self.amplitudes[0]
    }

    /// Amplitude of `|1>`.
    pub fn a1(&self) -> Complex<f64> {
        self.amplitudes[1]
    }

    /// Outcome probabilities `|aᵢ|²`.
    pub fn probabilities(&self) -> [f64; 2] {
        [self.amplitudes[0].norm_sqr(), self.amplitudes[1].norm_sqr()]
    }

    /// Inner product `⟨self|other⟩ = Σ conj(selfᵢ) · otherᵢ`.
    pub fn inner(&self, other: &AmplitudeVector) -> Complex<f64> {
        self.amplitudes
            .iter()
            .zip(other.amplitudes.iter())
            .map(|(a, b)| a.conj() * b)
            .sum()
    }

    /// Left-multiplies the vector by a 2x2 matrix.
    pub(crate) fn transformed(&self, matrix: &[[Complex<f64>; 2]; 2]) -> Self {
        let [psi_0, psi_1] = self.amplitudes;
        Self::new(
            matrix[0][0] * psi_0 + matrix[0][1] * psi_1,
            matrix[1][0] * psi_0 + matrix[1][1] * psi_1,
        )
    }
}

impl fmt::Display for AmplitudeVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Amplitudes[{:.4}, {:.4}]", self.amplitudes[0], self.amplitudes[1])
    }
}
