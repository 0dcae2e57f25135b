//! Generative AI integration — Gemini REST client, prompt templates, and
//! tolerant extraction of JSON objects from free-form model output.
//!
//! Calls go to the hosted `generateContent` API — no local model required.

pub mod client;
pub mod config;
pub mod extract;
pub mod prompts;
pub mod types;

pub use client::{GeminiClient, ImagePart};
pub use config::GenAiConfig;
pub use extract::extract_json_object;
pub use types::*;
