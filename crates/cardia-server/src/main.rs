//! Cardia Server Binary
//!
//! Standalone server for the heart disease risk API.

use std::sync::Arc;

use cardia_server::config::ServerConfig;
use cardia_server::{serve, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env();
    let state = Arc::new(AppState::from_model_path(&config.model_path));

    serve(&config.addr, state).await
}
