// src/config/mod.rs

//! Run configuration, built and validated once before a pipeline starts.

use crate::core::AnomalyError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// Typed configuration for a single anomaly-scoring run.
///
/// Fields are private so a `RunConfig` cannot change once a `Pipeline`
/// holds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunConfig {
    use_random_anomaly: bool,
    seed: Option<u64>,
    show_visualization: bool,
}

impl RunConfig {
    /// Creates a configuration from already-validated values.
    pub fn new(use_random_anomaly: bool, seed: Option<u64>, show_visualization: bool) -> Self {
        Self { use_random_anomaly, seed, show_visualization }
    }

    /// Builds a configuration from raw command-line values.
    ///
    /// `seed` is taken as `i128` so every `u64` value, and every negative
    /// typo, reaches the range check here instead of failing in the parser.
    ///
    /// # Errors
    /// Returns `AnomalyError::Configuration` if `seed` is negative or above `u64::MAX`.
    pub fn from_cli(random: bool, seed: Option<i128>, no_visualization: bool) -> Result<Self, AnomalyError> {
        let seed = seed
            .map(|raw| {
                u64::try_from(raw).map_err(|_| {
                    AnomalyError::configuration(format!("seed must be in 0..={}, got {}", u64::MAX, raw))
                })
            })
            .transpose()?;
        let config = Self::new(random, seed, !no_visualization);
        debug!(?config, "Run configuration validated");
        Ok(config)
    }

    /// Whether the anomalous branch uses randomized rotations.
    pub fn use_random_anomaly(&self) -> bool {
        self.use_random_anomaly
    }

    /// Seed for the run's random source, if reproducibility was requested.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Whether the report sink should render its chart.
    pub fn show_visualization(&self) -> bool {
        self.show_visualization
    }

    /// Creates the run's random source: seeded from `seed` when present,
    /// otherwise from the thread-local generator.
    pub fn random_source(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }
}
