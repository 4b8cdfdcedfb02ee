//! Persisted logistic-regression model
//!
//! The trained classifier is exported as a JSON artifact holding one
//! weight per feature plus an intercept:
//!
//! ```json
//! {
//!   "name": "heart-disease-lr-v2",
//!   "weights": [0.04, 1.1, 0.8, 0.01, 0.004, 0.3, 0.0, -0.02, 0.9, 0.6, 0.5, 1.2, 0.7],
//!   "intercept": -3.1
//! }
//! ```
//!
//! Loaded once at startup, immutable thereafter.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::encoder::FeatureVector;
use crate::error::ModelError;
use crate::predictor::Predictor;

/// Logistic-regression scoring model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticModel {
    name: String,
    weights: Vec<f64>,
    intercept: f64,
}

impl LogisticModel {
    /// Construct from coefficients, validating the weight count
    pub fn new(
        name: impl Into<String>,
        weights: Vec<f64>,
        intercept: f64,
    ) -> Result<Self, ModelError> {
        if weights.len() != FeatureVector::LEN {
            return Err(ModelError::DimensionMismatch {
                expected: FeatureVector::LEN,
                actual: weights.len(),
            });
        }
        Ok(Self {
            name: name.into(),
            weights,
            intercept,
        })
    }

    /// Load a model artifact from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ModelError::NotFound(path.display().to_string()));
        }
        let raw = std::fs::read_to_string(path)?;
        let model: LogisticModel = serde_json::from_str(&raw)?;
        if model.weights.len() != FeatureVector::LEN {
            return Err(ModelError::DimensionMismatch {
                expected: FeatureVector::LEN,
                actual: model.weights.len(),
            });
        }
        Ok(model)
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

impl Predictor for LogisticModel {
    fn score(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        let logit: f64 = self
            .weights
            .iter()
            .zip(features.as_slice())
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept;
        Ok(sigmoid(logit))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::assessment::{AssessmentRecord, ChestPainType, Sex, Slope, Thal};
    use crate::encoder::encode;

    fn sample_record() -> AssessmentRecord {
        AssessmentRecord {
            age: 54,
            sex: Sex::Male,
            chest_pain_type: ChestPainType::Atypical,
            resting_ecg: "normal".to_string(),
            fasting_blood_sugar: 130.0,
            cholesterol: 250.0,
            blood_pressure: 140.0,
            max_heart_rate: 150.0,
            exercise_angina: false,
            oldpeak: 1.2,
            slope: Slope::Flat,
            colored_vessels: 0,
            thal: Thal::Normal,
        }
    }

    #[test]
    fn test_score_is_probability_and_deterministic() {
        let model =
            LogisticModel::new("test-lr", vec![0.01; FeatureVector::LEN], -2.0).unwrap();
        let features = encode(&sample_record());
        let a = model.score(&features).unwrap();
        let b = model.score(&features).unwrap();
        assert_eq!(a, b);
        assert!((0.0..=1.0).contains(&a));
    }

    #[test]
    fn test_zero_weights_score_half() {
        let model = LogisticModel::new("flat", vec![0.0; FeatureVector::LEN], 0.0).unwrap();
        let score = model.score(&encode(&sample_record())).unwrap();
        assert!((score - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_wrong_weight_count_rejected() {
        let err = LogisticModel::new("bad", vec![0.0; 5], 0.0).unwrap_err();
        assert!(matches!(
            err,
            ModelError::DimensionMismatch {
                expected: 13,
                actual: 5
            }
        ));
    }

    #[test]
    fn test_from_path_roundtrip() {
        let model =
            LogisticModel::new("disk-lr", vec![0.1; FeatureVector::LEN], -1.0).unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(&model).unwrap().as_bytes())
            .unwrap();

        let loaded = LogisticModel::from_path(file.path()).unwrap();
        assert_eq!(loaded.name(), "disk-lr");

        let features = encode(&sample_record());
        assert_eq!(
            loaded.score(&features).unwrap(),
            model.score(&features).unwrap()
        );
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = LogisticModel::from_path("/nonexistent/model.json").unwrap_err();
        assert!(matches!(err, ModelError::NotFound(_)));
    }

    #[test]
    fn test_from_path_invalid_artifact() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not a model").unwrap();
        let err = LogisticModel::from_path(file.path()).unwrap_err();
        assert!(matches!(err, ModelError::Invalid(_)));
    }

    #[test]
    fn test_from_path_wrong_dimension() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"name":"short","weights":[1.0,2.0],"intercept":0.0}"#)
            .unwrap();
        let err = LogisticModel::from_path(file.path()).unwrap_err();
        assert!(matches!(err, ModelError::DimensionMismatch { actual: 2, .. }));
    }
}
