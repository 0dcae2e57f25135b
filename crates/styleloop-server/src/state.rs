//! Shared application state.

use parking_lot::RwLock;
use reqwest::Client;

use styleloop_catalog::Catalog;
use styleloop_core::{Result, StyleLoopConfig};
use styleloop_genai::{GenAiConfig, GeminiClient};
use styleloop_insights::ReturnIntentRecord;

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: StyleLoopConfig,
    pub genai: GenAiConfig,
    pub catalog: Catalog,
    /// Append-only return-intent history (process lifetime only).
    intents: RwLock<Vec<ReturnIntentRecord>>,
    http: Client,
}

impl AppState {
    pub fn new(config: StyleLoopConfig, genai: GenAiConfig, catalog: Catalog) -> Self {
        Self {
            config,
            genai,
            catalog,
            intents: RwLock::new(Vec::new()),
            http: Client::new(),
        }
    }

    /// Build a model client, failing when no API key is configured.
    pub fn model_client(&self) -> Result<GeminiClient> {
        let key = self.genai.resolve_key()?;
        Ok(GeminiClient::new(
            self.http.clone(),
            key,
            self.genai.model.clone(),
        ))
    }

    /// Append one record; returns the new history size.
    pub fn record_intent(&self, record: ReturnIntentRecord) -> usize {
        let mut intents = self.intents.write();
        intents.push(record);
        intents.len()
    }

    /// Snapshot of the intent history for aggregation.
    pub fn intent_history(&self) -> Vec<ReturnIntentRecord> {
        self.intents.read().clone()
    }
}
