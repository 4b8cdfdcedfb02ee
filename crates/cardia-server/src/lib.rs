//! Cardia Server - Heart disease risk API
//!
//! HTTP surface for the cardia predictor: JSON parsing and validation,
//! routing, CORS, and request tracing. The scoring model is loaded
//! once at startup and shared read-only across requests; everything
//! stateful about a request lives in the request itself.

pub mod config;
pub mod http;

use std::path::Path;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use cardia_core::{LogisticModel, ModelError, Predictor};

/// Shared application state
///
/// The predictor is an explicitly constructed, passed-in dependency.
/// `None` means no model artifact was available; predictions then use
/// the synthetic fallback and are flagged as such.
pub struct AppState {
    pub predictor: Option<Arc<dyn Predictor>>,
}

impl AppState {
    /// Create without a scoring model (synthetic fallback only)
    pub fn new() -> Self {
        Self { predictor: None }
    }

    /// Create with the given predictor
    pub fn with_predictor(predictor: Arc<dyn Predictor>) -> Self {
        Self {
            predictor: Some(predictor),
        }
    }

    /// Create by loading a model artifact from disk
    ///
    /// A missing or unreadable artifact is not fatal: the server comes
    /// up with the synthetic fallback and logs why.
    pub fn from_model_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match LogisticModel::from_path(path) {
            Ok(model) => {
                tracing::info!("Model '{}' loaded from {}", model.name(), path.display());
                Self::with_predictor(Arc::new(model))
            }
            Err(ModelError::NotFound(p)) => {
                tracing::warn!("Model not found at {}, using synthetic predictions", p);
                Self::new()
            }
            Err(e) => {
                tracing::error!("Error loading model: {}, using synthetic predictions", e);
                Self::new()
            }
        }
    }

    pub fn model_loaded(&self) -> bool {
        self.predictor.is_some()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/predict", post(http::predict))
        .route("/health", get(http::health))
        .route("/", get(http::root))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the server
pub async fn serve(addr: &str, state: Arc<AppState>) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Cardia server listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
