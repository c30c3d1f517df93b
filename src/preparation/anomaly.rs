// src/preparation/anomaly.rs

use crate::config::RunConfig;
use crate::operations::Rotation;
use crate::preparation::{PreparationBuilder, StatePreparation};
use rand::distr::{Distribution, StandardUniform};
use rand::rngs::StdRng;
use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;
use tracing::info;

/// Source of uniformly distributed angles.
///
/// Passed explicitly into `build_anomalous` so that each run owns its
/// randomness and tests can substitute a scripted source.
pub trait RandomSource {
    /// Returns a value in `[low, high)`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;
}

impl RandomSource for StdRng {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        let unit: f64 = StandardUniform.sample(self);
        low + (high - low) * unit
    }
}

/// The three angles of a randomized anomaly, in draw order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnomalyParameters {
    /// Y rotation, drawn from `[0, π)`.
    pub theta: f64,
    /// Z rotation, drawn from `[0, 2π)`.
    pub phi: f64,
    /// X rotation, drawn from `[0, π/2)`.
    pub lambda: f64,
}

impl AnomalyParameters {
    /// The rotation sequence `[RY(theta), RZ(phi), RX(lambda)]`.
    pub fn preparation(&self) -> StatePreparation {
        PreparationBuilder::new()
            .add_op(Rotation::ry(self.theta))
            .add_op(Rotation::rz(self.phi))
            .add_op(Rotation::rx(self.lambda))
            .build()
    }
}

impl fmt::Display for AnomalyParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "theta={:.4}, phi={:.4}, lambda={:.4}", self.theta, self.phi, self.lambda)
    }
}

/// Builds the reference state: `RY(π/2)` on `|0>`, the balanced
/// superposition `(|0> + |1>)/√2`.
pub fn build_expected() -> StatePreparation {
    PreparationBuilder::new().add_op(Rotation::ry(FRAC_PI_2)).build()
}

/// Draws theta, phi and lambda from `source`, in that order.
pub fn draw_anomaly_parameters<R: RandomSource + ?Sized>(source: &mut R) -> AnomalyParameters {
    let theta = source.uniform(0.0, PI);
    let phi = source.uniform(0.0, 2.0 * PI);
    let lambda = source.uniform(0.0, FRAC_PI_2);
    AnomalyParameters { theta, phi, lambda }
}

/// Builds the perturbed state for this run.
///
/// With randomization off this is the bit flip `RX(π)` and `source` is not
/// touched. With it on, three angles are drawn and the preparation is
/// `[RY(theta), RZ(phi), RX(lambda)]`. The drawn angles are returned
/// alongside so the caller can report them.
pub fn build_anomalous<R: RandomSource + ?Sized>(
    config: &RunConfig,
    source: &mut R,
) -> (StatePreparation, Option<AnomalyParameters>) {
    if !config.use_random_anomaly() {
        let flip = PreparationBuilder::new().add_op(Rotation::rx(PI)).build();
        return (flip, None);
    }

    let params = draw_anomaly_parameters(source);
    info!(
        theta = params.theta,
        phi = params.phi,
        lambda = params.lambda,
        "Generated random anomaly with parameters: {}",
        params
    );
    (params.preparation(), Some(params))
}
