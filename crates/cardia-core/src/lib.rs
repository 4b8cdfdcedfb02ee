//! Cardia Core - Heart disease risk assessment
//!
//! This crate provides the core functionality for the cardia prediction service:
//!
//! - **Assessment**: Validated clinical input record with fixed categorical value sets
//! - **Encoder**: Deterministic mapping to the 13-feature layout the model was trained on
//! - **Predictor**: Injected scoring capability (`score(features) -> probability`)
//! - **Model**: Persisted logistic-regression artifact loaded once at startup
//! - **Risk**: Percentage score in [0, 100], with a clearly-marked synthetic fallback
//!
//! # Architecture
//!
//! The encoder is a pure function and the heart of the crate: the
//! feature order and categorical codes are part of the trained model's
//! contract and must match it exactly. Everything around it is
//! deliberately thin — the predictor is a trait so the encoder and the
//! HTTP layer are testable without a real model artifact.

pub mod assessment;
pub mod encoder;
pub mod error;
pub mod model;
pub mod predictor;
pub mod risk;

pub use assessment::{AssessmentRecord, ChestPainType, Sex, Slope, Thal};
pub use encoder::{encode, FeatureVector};
pub use error::{CardiaError, EncodingError, ModelError, Result};
pub use model::LogisticModel;
pub use predictor::{Predictor, StubPredictor};
pub use risk::RiskScore;
