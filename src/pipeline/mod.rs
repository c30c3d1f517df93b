// src/pipeline/mod.rs

//! Orchestrates one anomaly-scoring run:
//! build both preparations, simulate them, measure, classify, report.

use crate::config::RunConfig;
use crate::core::AnomalyError;
use crate::metrics::{entropy, fidelity};
use crate::preparation::{build_anomalous, build_expected, RandomSource};
use crate::report::{ReportSink, TensionReport};
use crate::severity::classify;
use crate::simulation::SimulationBackend;
use tracing::{debug, instrument};

/// Runs the expected-vs-anomalous comparison exactly once per call.
///
/// Owns its `RunConfig` and backend for the duration of the run. Backend
/// failures abort the run before anything reaches the sink.
pub struct Pipeline<B: SimulationBackend> {
    config: RunConfig,
    backend: B,
}

impl<B: SimulationBackend> Pipeline<B> {
    /// Creates a pipeline over `backend`.
    pub fn new(config: RunConfig, backend: B) -> Self {
        Self { config, backend }
    }

    /// The configuration this pipeline runs with.
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Seeds a fresh random source from the configuration, then runs.
    ///
    /// # Errors
    /// Propagates `AnomalyError::Simulation` from the backend.
    pub fn run<S: ReportSink + ?Sized>(&self, sink: &mut S) -> Result<TensionReport, AnomalyError> {
        if let Some(seed) = self.config.seed() {
            debug!(seed, "Seeding random source");
        }
        let mut source = self.config.random_source();
        self.run_with_source(&mut source, sink)
    }

    /// Runs with a caller-supplied random source.
    ///
    /// The source is only read when the configuration enables randomized
    /// anomalies, and then exactly three times.
    #[instrument(skip_all, fields(random = self.config.use_random_anomaly()))]
    pub fn run_with_source<R, S>(&self, source: &mut R, sink: &mut S) -> Result<TensionReport, AnomalyError>
    where
        R: RandomSource + ?Sized,
        S: ReportSink + ?Sized,
    {
        let report = self.evaluate(source)?;
        sink.display(&report, self.config.show_visualization());
        Ok(report)
    }

    /// Computes the report without handing it to a sink.
    pub fn evaluate<R: RandomSource + ?Sized>(&self, source: &mut R) -> Result<TensionReport, AnomalyError> {
        let expected_prep = build_expected();
        let (anomalous_prep, parameters) = build_anomalous(&self.config, source);
        debug!(expected = %expected_prep, anomalous = %anomalous_prep, "Built preparations");

        let sv_expected = self.backend.simulate(&expected_prep)?;
        let sv_anomalous = self.backend.simulate(&anomalous_prep)?;

        let fid = fidelity(&sv_expected, &sv_anomalous);
        let (severity, status) = classify(fid);
        let report = TensionReport {
            fidelity: fid,
            entropy_expected: entropy(&sv_expected),
            entropy_anomalous: entropy(&sv_anomalous),
            severity,
            status,
            parameters,
        };
        debug!(fidelity = fid, severity, %status, "Classified run");
        Ok(report)
    }
}
