// src/simulation/engine.rs
use crate::core::{AmplitudeVector, AnomalyError};
use crate::operations::{Axis, Rotation};
use num_complex::Complex;
use num_traits::Zero; // For Complex::zero()

/// Evolves a single-qubit amplitude vector one rotation at a time.
/// (Internal visibility)
pub(crate) struct SimulationEngine {
    state: AmplitudeVector,
}

impl SimulationEngine {
    /// Initializes the engine in `|0>`.
    pub(crate) fn init() -> Self {
        Self { state: AmplitudeVector::ground() }
    }

    /// Applies one rotation to the current state.
    pub(crate) fn apply_rotation(&mut self, rotation: &Rotation) -> Result<(), AnomalyError> {
        if !rotation.angle.is_finite() {
            return Err(AnomalyError::simulation(format!(
                "Cannot realize {}: angle is not finite",
                rotation
            )));
        }
        self.state = self.state.transformed(&rotation_matrix(rotation.axis, rotation.angle));
        Ok(())
    }

    pub(crate) fn get_state(&self) -> &AmplitudeVector {
        &self.state
    }

    pub(crate) fn into_state(self) -> AmplitudeVector {
        self.state
    }
}

/// The 2x2 unitary for a rotation of `theta` radians about `axis`,
/// `exp(-i·theta·σ/2)`, row-major.
pub(crate) fn rotation_matrix(axis: Axis, theta: f64) -> [[Complex<f64>; 2]; 2] {
    let half = theta / 2.0;
    let (sin_a, cos_a) = half.sin_cos();
    match axis {
        // RX = [[cos, -i sin], [-i sin, cos]]
        Axis::X => [
            [Complex::new(cos_a, 0.0), Complex::new(0.0, -sin_a)],
            [Complex::new(0.0, -sin_a), Complex::new(cos_a, 0.0)],
        ],
        // RY = [[cos, -sin], [sin, cos]]
        Axis::Y => [
            [Complex::new(cos_a, 0.0), Complex::new(-sin_a, 0.0)],
            [Complex::new(sin_a, 0.0), Complex::new(cos_a, 0.0)],
        ],
        // RZ = diag(e^(-i·theta/2), e^(i·theta/2))
        Axis::Z => [
            [Complex::new(cos_a, -sin_a), Complex::zero()],
            [Complex::zero(), Complex::new(cos_a, sin_a)],
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_1_SQRT_2, PI};

    const TEST_TOLERANCE: f64 = 1e-12;

    /// Asserts that two complex amplitudes are approximately equal.
    fn assert_complex_approx_equal(actual: Complex<f64>, expected: Complex<f64>, context: &str) {
        let dist_sq = (actual - expected).norm_sqr();
        assert!(
            dist_sq < TEST_TOLERANCE * TEST_TOLERANCE,
            "Mismatch - Actual: {}, Expected: {}, DistSq: {:.3e}, Context: {}",
            actual, expected, dist_sq, context
        );
    }

    #[test]
    fn ry_quarter_turn_balances_ground_state() -> Result<(), AnomalyError> {
        let mut engine = SimulationEngine::init();
        engine.apply_rotation(&Rotation::ry(PI / 2.0))?;
        let state = engine.get_state();
        assert_complex_approx_equal(state.a0(), Complex::new(FRAC_1_SQRT_2, 0.0), "a0 after RY(pi/2)");
        assert_complex_approx_equal(state.a1(), Complex::new(FRAC_1_SQRT_2, 0.0), "a1 after RY(pi/2)");
        Ok(())
    }

    #[test]
    fn rx_half_turn_flips_with_global_phase() -> Result<(), AnomalyError> {
        let mut engine = SimulationEngine::init();
        engine.apply_rotation(&Rotation::rx(PI))?;
        let state = engine.into_state();
        // RX(pi)|0> = -i|1>
        assert_complex_approx_equal(state.a0(), Complex::zero(), "a0 after RX(pi)");
        assert_complex_approx_equal(state.a1(), Complex::new(0.0, -1.0), "a1 after RX(pi)");
        Ok(())
    }

    #[test]
    fn rz_only_changes_relative_phase() -> Result<(), AnomalyError> {
        let mut engine = SimulationEngine::init();
        engine.apply_rotation(&Rotation::ry(PI / 2.0))?;
        engine.apply_rotation(&Rotation::rz(PI))?;
        let [p0, p1] = engine.get_state().probabilities();
        assert!((p0 - 0.5).abs() < TEST_TOLERANCE);
        assert!((p1 - 0.5).abs() < TEST_TOLERANCE);
        // e^(-i pi/2)/sqrt2 and e^(i pi/2)/sqrt2
        assert_complex_approx_equal(engine.get_state().a0(), Complex::new(0.0, -FRAC_1_SQRT_2), "a0 after RZ(pi)");
        assert_complex_approx_equal(engine.get_state().a1(), Complex::new(0.0, FRAC_1_SQRT_2), "a1 after RZ(pi)");
        Ok(())
    }

    #[test]
    fn rotation_matrices_are_unitary() {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let m = rotation_matrix(axis, 1.234);
            // Columns must be orthonormal
            let col0 = m[0][0].norm_sqr() + m[1][0].norm_sqr();
            let col1 = m[0][1].norm_sqr() + m[1][1].norm_sqr();
            let cross = m[0][0].conj() * m[0][1] + m[1][0].conj() * m[1][1];
            assert!((col0 - 1.0).abs() < TEST_TOLERANCE, "axis {}", axis);
            assert!((col1 - 1.0).abs() < TEST_TOLERANCE, "axis {}", axis);
            assert!(cross.norm() < TEST_TOLERANCE, "axis {}", axis);
        }
    }

    #[test]
    fn non_finite_angle_is_rejected() {
        let mut engine = SimulationEngine::init();
        let err = engine.apply_rotation(&Rotation::ry(f64::INFINITY)).unwrap_err();
        assert!(matches!(err, AnomalyError::Simulation { .. }));
        // State is left untouched
        assert_eq!(engine.get_state(), &AmplitudeVector::ground());
    }
}
