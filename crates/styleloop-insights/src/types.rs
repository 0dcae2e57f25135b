//! Intent record and analytics types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded return intent, appended whenever the chatbot detects one.
/// Lives in an unbounded in-memory list for the process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnIntentRecord {
    pub product_name: String,
    /// Enum-like uppercase category, e.g. "SIZE" or "COLOR_STYLE".
    pub intent: String,
    /// The customer's original free-text message.
    pub message: String,
    pub recorded_at: DateTime<Utc>,
}

impl ReturnIntentRecord {
    pub fn new(
        product_name: impl Into<String>,
        intent: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            product_name: product_name.into(),
            intent: intent.into(),
            message: message.into(),
            recorded_at: Utc::now(),
        }
    }
}

/// Share of one intent category within a product's returns.
#[derive(Debug, Clone, Serialize)]
pub struct ReasonBreakdown {
    pub intent: String,
    pub count: usize,
    /// `count / total_returns * 100`, rounded to one decimal.
    pub percentage: f64,
}

/// Per-product return summary.
#[derive(Debug, Clone, Serialize)]
pub struct ProductReturnSummary {
    pub product_name: String,
    pub total_returns: usize,
    pub reasons: Vec<ReasonBreakdown>,
    /// Raw messages for this product, kept around for the advice call.
    #[serde(skip)]
    pub messages: Vec<String>,
    /// Filled in by the analytics endpoint, not the aggregator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategic_advice: Option<serde_json::Value>,
}

/// The aggregated dashboard payload.
#[derive(Debug, Clone, Serialize)]
pub struct ReturnAnalytics {
    pub total_returns: usize,
    pub product_analysis: Vec<ProductReturnSummary>,
}
