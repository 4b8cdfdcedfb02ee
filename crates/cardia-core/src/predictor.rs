//! Predictor abstraction
//!
//! The scoring model is an injected capability rather than process
//! state: the server constructs one at startup (or none, if no
//! artifact is available) and shares it read-only across requests.

use crate::encoder::FeatureVector;
use crate::error::ModelError;

/// An externally supplied scoring capability
///
/// Implementations must be deterministic for a given model: the same
/// feature vector always yields the same probability.
pub trait Predictor: Send + Sync {
    /// Probability of the positive class, in [0, 1]
    fn score(&self, features: &FeatureVector) -> Result<f64, ModelError>;

    /// Model name for logging and health reporting
    fn name(&self) -> &str;
}

/// Fixed-probability predictor for tests and demos
///
/// Always returns the probability it was constructed with, so handler
/// and encoder tests need no real model artifact.
pub struct StubPredictor(pub f64);

impl Predictor for StubPredictor {
    fn score(&self, _features: &FeatureVector) -> Result<f64, ModelError> {
        Ok(self.0)
    }

    fn name(&self) -> &str {
        "stub"
    }
}
