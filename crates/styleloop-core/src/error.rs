//! Error types for StyleLoop.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("No JSON object found in model output")]
    NoJson,

    #[error("Malformed JSON in model output: {0}")]
    MalformedJson(#[source] serde_json::Error),

    #[error("Generation service error: {0}")]
    GenAi(String),

    #[error("Generation service is not configured: missing API key")]
    MissingApiKey,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
