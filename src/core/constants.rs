//! Numerical constants and fixed policy thresholds.

/// Constants shared by the metrics, severity and simulation modules.
pub mod qanomaly_constants {
    /// Additive regularizer inside `log2(p + ε)` for the entropy estimator.
    /// Keeps `log2(0)` out of the sum for zero-probability outcomes.
    pub const ENTROPY_EPSILON: f64 = 1e-10;
    /// Severities at or above this value are at least `MEDIUM`.
    pub const MEDIUM_SEVERITY_THRESHOLD: f64 = 0.3;
    /// Severities at or above this value are `HIGH`.
    pub const HIGH_SEVERITY_THRESHOLD: f64 = 0.7;
    /// Allowed deviation of `|a0|² + |a1|²` from 1.0.
    pub const NORM_TOLERANCE: f64 = 1e-9;
}
