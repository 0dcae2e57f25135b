//! Return-assistant chat route.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use tracing::{error, info};

use styleloop_genai::{extract_json_object, prompts, ChatRequest};
use styleloop_insights::ReturnIntentRecord;

use super::server_error;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/chat", post(chat))
}

/// POST /api/chat — one chatbot turn. When the model detects a return
/// intent, the record lands in the in-memory history for the dashboard.
async fn chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> impl IntoResponse {
    let client = match state.model_client() {
        Ok(c) => c,
        Err(e) => return server_error(format!("Server configuration error: {}", e)),
    };

    let reply = match client
        .generate_text(&prompts::chatbot_reply(&req.message))
        .await
        .and_then(|text| extract_json_object(&text))
    {
        Ok(value) => value,
        Err(e) => {
            error!("Chatbot call failed: {}", e);
            return server_error("The chat service hit an error. Please try again later.");
        }
    };

    let detected = reply
        .get("detected_intent")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty());
    if let Some(intent) = detected {
        let size = state.record_intent(ReturnIntentRecord::new(
            req.product.clone(),
            intent,
            req.message.clone(),
        ));
        info!(
            "Recorded intent '{}' for product '{}' ({} records total)",
            intent, req.product, size
        );
    }

    (StatusCode::OK, Json(reply))
}
