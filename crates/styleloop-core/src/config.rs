//! Server configuration from environment variables.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level StyleLoop configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleLoopConfig {
    /// HTTP server port.
    pub port: u16,
    /// Path to the product catalog JSON file.
    pub catalog_path: PathBuf,
}

impl StyleLoopConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8000);

        let catalog_path = std::env::var("STYLELOOP_CATALOG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("products.json"));

        Self { port, catalog_path }
    }
}
