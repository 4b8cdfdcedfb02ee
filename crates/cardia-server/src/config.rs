//! Server configuration
//!
//! Everything comes from the environment with sensible development
//! defaults, so a bare `cargo run` starts a working server (with the
//! synthetic fallback if no model artifact is present).

use std::path::PathBuf;

const DEFAULT_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_MODEL_PATH: &str = "cardia-model.json";

/// Runtime configuration for the server binary
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address (`CARDIA_ADDR`)
    pub addr: String,
    /// Path to the persisted model artifact (`CARDIA_MODEL_PATH`)
    pub model_path: PathBuf,
}

impl ServerConfig {
    /// Read configuration from the environment
    pub fn from_env() -> Self {
        let addr = std::env::var("CARDIA_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
        let model_path = std::env::var("CARDIA_MODEL_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_MODEL_PATH));
        Self { addr, model_path }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.addr, "127.0.0.1:8080");
        assert_eq!(config.model_path, PathBuf::from("cardia-model.json"));
    }
}
