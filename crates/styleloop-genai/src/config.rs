//! Generation service configuration.

use styleloop_core::{Error, Result};

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";

/// Configuration for the hosted generation service.
///
/// A missing API key is not a startup error; endpoints that need the model
/// surface it as a server error at call time.
#[derive(Debug, Clone)]
pub struct GenAiConfig {
    pub api_key: Option<String>,
    /// Model used for both text and vision calls.
    pub model: String,
}

impl GenAiConfig {
    /// Read configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("GEMINI_API_KEY")
                .ok()
                .filter(|k| !k.is_empty()),
            model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// The API key, or [`Error::MissingApiKey`] when unset.
    pub fn resolve_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or(Error::MissingApiKey)
    }
}
