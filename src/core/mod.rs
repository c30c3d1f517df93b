// src/core/mod.rs

//! Core data structures and types

// Declare modules within core
pub mod error;
pub mod state;

// Re-export public types for convenient access via `qanomaly::core::TypeName`
pub use error::AnomalyError;
pub use state::AmplitudeVector;

pub mod constants;
pub use constants::qanomaly_constants::{
    ENTROPY_EPSILON, HIGH_SEVERITY_THRESHOLD, MEDIUM_SEVERITY_THRESHOLD, NORM_TOLERANCE,
};
