// src/validation/mod.rs

//! Provides functions to validate `AmplitudeVector`s produced by a backend.
//!
//! The metrics module assumes normalized input and does not check it.
//! Backends call into here before handing a vector back.

use crate::core::{AmplitudeVector, AnomalyError, NORM_TOLERANCE};

/// Checks if the vector is normalized (`|a0|² + |a1|² ≈ 1.0`).
///
/// # Arguments
/// * `state` - The `AmplitudeVector` to check.
/// * `tolerance` - Allowed deviation from 1.0. Defaults to `NORM_TOLERANCE`.
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(AnomalyError::Simulation)` if normalization fails.
pub fn check_normalization(state: &AmplitudeVector, tolerance: Option<f64>) -> Result<(), AnomalyError> {
    let effective_tolerance = tolerance.unwrap_or(NORM_TOLERANCE);
    let norm_sq: f64 = state.probabilities().iter().sum();
    // NaN fails this comparison too, so non-finite vectors are rejected here as well
    if (norm_sq - 1.0).abs() <= effective_tolerance {
        Ok(())
    } else {
        Err(AnomalyError::simulation(format!(
            "Amplitude vector normalization failed. Sum(|a_i|^2) = {} (Deviation > {})",
            norm_sq, effective_tolerance
        )))
    }
}

/// Checks that every real and imaginary component is finite.
pub fn check_finite(state: &AmplitudeVector) -> Result<(), AnomalyError> {
    match state.vector().iter().position(|c| !c.is_finite()) {
        Some(index) => Err(AnomalyError::simulation(format!(
            "Amplitude {} is not finite: {}",
            index,
            state.vector()[index]
        ))),
        None => Ok(()),
    }
}

/// Runs every check a backend result must pass: finiteness, then normalization.
pub fn validate_state(state: &AmplitudeVector, norm_tolerance: Option<f64>) -> Result<(), AnomalyError> {
    check_finite(state)?;
    check_normalization(state, norm_tolerance)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;
    use std::f64::consts::FRAC_1_SQRT_2;

    #[test]
    fn balanced_state_is_normalized() {
        let plus = AmplitudeVector::new(Complex::new(FRAC_1_SQRT_2, 0.0), Complex::new(FRAC_1_SQRT_2, 0.0));
        assert!(validate_state(&plus, None).is_ok());
    }

    #[test]
    fn unnormalized_state_is_rejected() {
        let doubled = AmplitudeVector::new(Complex::new(1.0, 0.0), Complex::new(1.0, 0.0));
        let err = check_normalization(&doubled, None).unwrap_err();
        assert!(matches!(err, AnomalyError::Simulation { .. }));
    }

    #[test]
    fn loose_tolerance_accepts_small_drift() {
        let drifted = AmplitudeVector::new(Complex::new(1.0005, 0.0), Complex::new(0.0, 0.0));
        assert!(check_normalization(&drifted, None).is_err());
        assert!(check_normalization(&drifted, Some(1e-2)).is_ok());
    }

    #[test]
    fn nan_amplitude_is_rejected() {
        let broken = AmplitudeVector::new(Complex::new(f64::NAN, 0.0), Complex::new(0.0, 0.0));
        assert!(check_finite(&broken).is_err());
        assert!(check_normalization(&broken, None).is_err());
    }
}
