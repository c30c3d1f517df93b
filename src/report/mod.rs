// src/report/mod.rs

//! The immutable result of one run and the sinks that consume it.

mod chart;

use crate::preparation::AnomalyParameters;
use crate::severity::Status;
use std::fmt;
use std::io::{self, Write};
use tracing::warn;

pub use chart::render_chart;

/// Metrics comparing the expected and anomalous states of one run.
///
/// Built only by `Pipeline` once every stage has succeeded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TensionReport {
    pub(crate) fidelity: f64,
    pub(crate) entropy_expected: f64,
    pub(crate) entropy_anomalous: f64,
    pub(crate) severity: f64,
    pub(crate) status: Status,
    pub(crate) parameters: Option<AnomalyParameters>,
}

impl TensionReport {
    /// Fidelity between the expected and anomalous states, in `[0, 1]`.
    pub fn fidelity(&self) -> f64 {
        self.fidelity
    }

    /// Entropy of the expected state's outcome distribution.
    pub fn entropy_expected(&self) -> f64 {
        self.entropy_expected
    }

    /// Entropy of the anomalous state's outcome distribution.
    pub fn entropy_anomalous(&self) -> f64 {
        self.entropy_anomalous
    }

    /// `1 - fidelity`.
    pub fn severity(&self) -> f64 {
        self.severity
    }

    /// Severity label.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Angles of the randomized anomaly, `None` for the fixed bit flip.
    pub fn parameters(&self) -> Option<&AnomalyParameters> {
        self.parameters.as_ref()
    }
}

/// Text report, one metric per line with four decimals.
impl fmt::Display for TensionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Tension Metrics ===")?;
        writeln!(f, "Fidelity between expected and anomalous state: {:.4}", self.fidelity)?;
        writeln!(f, "Expected State Entropy: {:.4}", self.entropy_expected)?;
        writeln!(f, "Anomalous State Entropy: {:.4}", self.entropy_anomalous)?;
        writeln!(f, "Anomaly Severity: {:.4} - Status: {}", self.severity, self.status)
    }
}

/// Consumer of finished reports. Nothing it does flows back into the pipeline.
pub trait ReportSink {
    /// Presents `report`; renders a chart as well when `show_visualization` is set.
    fn display(&mut self, report: &TensionReport, show_visualization: bool);
}

/// Writes the text report, and optionally the chart, to any `Write`.
pub struct ConsoleSink<W: Write> {
    out: W,
}

impl ConsoleSink<io::Stdout> {
    /// Sink writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleSink<W> {
    /// Creates a sink over `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_report(&mut self, report: &TensionReport, show_visualization: bool) -> io::Result<()> {
        write!(self.out, "{}", report)?;
        if show_visualization {
            writeln!(self.out)?;
            write!(self.out, "{}", render_chart(report))?;
        }
        self.out.flush()
    }
}

impl<W: Write> ReportSink for ConsoleSink<W> {
    fn display(&mut self, report: &TensionReport, show_visualization: bool) {
        if let Err(e) = self.write_report(report, show_visualization) {
            warn!(error = %e, "Failed to write tension report");
        }
    }
}

/// Keeps every report it receives. Useful for batch harnesses and tests.
#[derive(Debug, Default)]
pub struct CollectingSink {
    reports: Vec<(TensionReport, bool)>,
}

impl CollectingSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports received so far, each with its `show_visualization` flag.
    pub fn reports(&self) -> &[(TensionReport, bool)] {
        &self.reports
    }
}

impl ReportSink for CollectingSink {
    fn display(&mut self, report: &TensionReport, show_visualization: bool) {
        self.reports.push((*report, show_visualization));
    }
}

#[cfg(test)]
pub(crate) fn sample_report(fidelity: f64) -> TensionReport {
    let (severity, status) = crate::severity::classify(fidelity);
    TensionReport {
        fidelity,
        entropy_expected: 1.0,
        entropy_anomalous: 0.0,
        severity,
        status,
        parameters: None,
    }
}
