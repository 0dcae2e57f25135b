//! Request and advice types shared with the HTTP surface.

use serde::{Deserialize, Serialize};

/// Incoming chat request.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// The product the customer is considering returning.
    pub product: String,
}

/// Request to render a combo as a studio-shot description.
#[derive(Debug, Clone, Deserialize)]
pub struct VisualComboRequest {
    pub main_item: String,
    pub matched_items: Vec<String>,
}

/// Seller-facing advice distilled from a product's return messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategicAdvice {
    pub common_theme: String,
    pub actionable_advice: String,
}

impl StrategicAdvice {
    /// Placeholder returned when the advice call fails.
    pub fn fallback() -> Self {
        Self {
            common_theme: "An error occurred during analysis.".into(),
            actionable_advice: "Please review the return messages manually.".into(),
        }
    }
}
