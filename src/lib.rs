// src/lib.rs

//! `qanomaly` - Scores how far a perturbed single-qubit state has drifted
//! from a reference state.
//!
//! A run builds two state preparations (a balanced superposition and an
//! anomaly), evaluates both through a `SimulationBackend`, and condenses
//! the comparison into a `TensionReport`: fidelity, entropy of each state,
//! and a severity with a LOW/MEDIUM/HIGH status.

pub mod core;
pub mod operations;
pub mod preparation;
pub mod simulation;
pub mod validation;
pub mod metrics;
pub mod severity;
pub mod config;
pub mod report;
pub mod pipeline;

#[cfg(test)]
mod test_support;

// Re-export the most common types for easier top-level use
pub use crate::core::{AmplitudeVector, AnomalyError};
pub use operations::{Axis, Rotation};
pub use preparation::{
    build_anomalous, build_expected, draw_anomaly_parameters, AnomalyParameters, PreparationBuilder,
    RandomSource, StatePreparation,
};
pub use simulation::{SimulationBackend, Simulator};
pub use validation::{check_finite, check_normalization, validate_state};
pub use metrics::{entropy, fidelity};
pub use severity::{classify, Status};
pub use config::RunConfig;
pub use report::{CollectingSink, ConsoleSink, ReportSink, TensionReport};
pub use pipeline::Pipeline;

// Example 1: Deterministic bit-flip anomaly
// The balanced superposition overlaps half with the flipped basis state.
/// ```
/// use qanomaly::{Pipeline, RunConfig, Simulator, CollectingSink, Status, AnomalyError};
///
/// fn main() -> Result<(), AnomalyError> {
///     let config = RunConfig::new(false, None, false);
///     let pipeline = Pipeline::new(config, Simulator::new());
///     let mut sink = CollectingSink::new();
///
///     let report = pipeline.run(&mut sink)?;
///     println!("{}", report);
///
///     // |<+|1>|^2 = 0.5 -> severity 0.5 -> MEDIUM
///     assert!((report.fidelity() - 0.5).abs() < 1e-9);
///     assert_eq!(report.status(), Status::Medium);
///     Ok(())
/// }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Seeded random anomaly
// Two pipelines with the same seed draw the same angles and score identically.
/// ```
/// use qanomaly::{Pipeline, RunConfig, Simulator, CollectingSink, AnomalyError};
///
/// fn main() -> Result<(), AnomalyError> {
///     let config = RunConfig::from_cli(true, Some(42), true)?;
///     let first = Pipeline::new(config, Simulator::new()).run(&mut CollectingSink::new())?;
///     let second = Pipeline::new(config, Simulator::new()).run(&mut CollectingSink::new())?;
///
///     let params = first.parameters().expect("random branch records its angles");
///     println!("theta={:.4} phi={:.4} lambda={:.4}", params.theta, params.phi, params.lambda);
///     assert_eq!(first, second);
///     Ok(())
/// }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
