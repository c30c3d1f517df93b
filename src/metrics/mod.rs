// src/metrics/mod.rs

//! Distance and information measures between single-qubit states.
//!
//! Both functions take normalization as a precondition. They are meant to
//! run on vectors that came out of a `SimulationBackend`, which validates
//! them; passing an unnormalized vector gives a meaningless number, not an
//! error.

use crate::core::{AmplitudeVector, ENTROPY_EPSILON};

/// State fidelity `|⟨a|b⟩|²` for pure states, clipped to `[0, 1]`.
///
/// Symmetric in its arguments and insensitive to global phase: it is 1.0
/// for identical states and 0.0 for orthogonal ones.
pub fn fidelity(a: &AmplitudeVector, b: &AmplitudeVector) -> f64 {
    a.inner(b).norm_sqr().clamp(0.0, 1.0)
}

/// Regularized Shannon entropy of the outcome distribution, in bits:
/// `-Σ pᵢ · log2(pᵢ + ε)` with `pᵢ = |aᵢ|²` and `ε = ENTROPY_EPSILON`.
///
/// The `ε` keeps zero-probability outcomes from producing `log2(0)`. It
/// also biases the estimate slightly: a pure basis state comes out near
/// `-1.44e-10` instead of exactly 0, and the balanced state a few `1e-10`
/// under 1.0. The bias is kept so results stay comparable with existing
/// reports.
pub fn entropy(v: &AmplitudeVector) -> f64 {
    -v.probabilities()
        .iter()
        .map(|p| p * (p + ENTROPY_EPSILON).log2())
        .sum::<f64>()
}
