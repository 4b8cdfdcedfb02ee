//! HTTP endpoint handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use cardia_core::{encode, AssessmentRecord, RiskScore};

use crate::AppState;

/// Prediction response
///
/// `synthetic` marks fallback estimates produced without a loaded
/// model; callers must never treat those as real predictions.
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub risk: f64,
    pub synthetic: bool,
}

/// Score an assessment record
///
/// The `Json` extractor rejects malformed JSON and unmapped
/// categorical values before this handler runs, so the record is
/// already validated against the enum sets.
pub async fn predict(
    State(state): State<Arc<AppState>>,
    Json(record): Json<AssessmentRecord>,
) -> Result<Json<PredictResponse>, (StatusCode, String)> {
    let features = encode(&record);

    match &state.predictor {
        Some(predictor) => {
            let probability = predictor.score(&features).map_err(|e| {
                tracing::error!("Prediction failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Prediction failed".to_string(),
                )
            })?;
            let risk = RiskScore::from_probability(probability);
            tracing::info!("Prediction completed: {} risk", risk);
            Ok(Json(PredictResponse {
                risk: risk.value(),
                synthetic: false,
            }))
        }
        None => {
            let risk = RiskScore::synthetic();
            tracing::warn!("No model loaded, returning synthetic estimate");
            Ok(Json(PredictResponse {
                risk: risk.value(),
                synthetic: true,
            }))
        }
    }
}

/// Health check
pub async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "model_loaded": state.model_loaded()
    }))
}

/// Liveness message for the root route
pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Cardia heart disease risk API is live"
    }))
}
