//! Error handling logic

use thiserror::Error;

/// Error types raised while configuring or running an anomaly-scoring pass.
///
/// Both variants are fatal for the run that raised them. Nothing in the
/// pipeline retries, and no partial report is produced after an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)] // Eq useful for testing error variants
pub enum AnomalyError {
    /// The simulation backend could not turn a preparation into an
    /// amplitude vector (non-finite angle, non-normalizable result, ...).
    #[error("Simulation Process Error: {message}")]
    Simulation {
        /// Simulation failure message
        message: String,
    },

    /// The run configuration was rejected before the pipeline started.
    #[error("Configuration Error: {message}")]
    Configuration {
        /// Configuration failure message
        message: String,
    },
}

impl AnomalyError {
    pub(crate) fn simulation(message: impl Into<String>) -> Self {
        AnomalyError::Simulation { message: message.into() }
    }

    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        AnomalyError::Configuration { message: message.into() }
    }
}
