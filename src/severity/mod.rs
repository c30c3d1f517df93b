// src/severity/mod.rs

//! Maps fidelity onto a severity score and a three-level status.

use crate::core::{HIGH_SEVERITY_THRESHOLD, MEDIUM_SEVERITY_THRESHOLD};
use std::fmt;

/// Severity label. Ordered so that `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Status {
    /// Severity below 0.3.
    Low,
    /// Severity in `[0.3, 0.7)`.
    Medium,
    /// Severity of 0.7 and above.
    High,
}

impl Status {
    /// Step function over severity. Each threshold belongs to the higher level.
    pub fn from_severity(severity: f64) -> Self {
        if severity < MEDIUM_SEVERITY_THRESHOLD {
            Status::Low
        } else if severity < HIGH_SEVERITY_THRESHOLD {
            Status::Medium
        } else {
            Status::High
        }
    }

    /// Upper-case name as printed in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Low => "LOW",
            Status::Medium => "MEDIUM",
            Status::High => "HIGH",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returns `(1 - fidelity, status)`.
///
/// Severity is plain distance from the expected state; the thresholds are
/// fixed policy, not derived from any statistical model.
pub fn classify(fidelity: f64) -> (f64, Status) {
    let severity = 1.0 - fidelity;
    (severity, Status::from_severity(severity))
}
