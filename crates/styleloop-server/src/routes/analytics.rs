//! Seller dashboard analytics route.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::warn;

use styleloop_genai::{extract_json_object, prompts, StrategicAdvice};
use styleloop_insights::{summarize, ReturnAnalytics};

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/return-analytics", get(return_analytics))
}

/// GET /api/return-analytics — aggregated return reasons per product,
/// recomputed from the full history on every request.
async fn return_analytics(State(state): State<Arc<AppState>>) -> Json<ReturnAnalytics> {
    let records = state.intent_history();
    let mut analytics = summarize(&records);

    // Advice is best-effort; the dashboard renders with the fallback text
    // when the model call fails or no key is configured.
    for product in &mut analytics.product_analysis {
        let advice = match strategic_advice(&state, &product.messages).await {
            Ok(value) => value,
            Err(e) => {
                warn!(
                    "Strategic advice failed for '{}': {}",
                    product.product_name, e
                );
                serde_json::to_value(StrategicAdvice::fallback()).unwrap_or_default()
            }
        };
        product.strategic_advice = Some(advice);
    }

    Json(analytics)
}

async fn strategic_advice(
    state: &AppState,
    messages: &[String],
) -> styleloop_core::Result<serde_json::Value> {
    let client = state.model_client()?;
    let raw = client
        .generate_text(&prompts::strategic_return_advice(messages))
        .await?;
    extract_json_object(&raw)
}
